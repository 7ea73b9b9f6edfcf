//! Criterion benchmarks for topology building and layout projection.

use axlemap_core::id::TireCount;
use axlemap_core::test_utils::*;
use axlemap_core::topology::Topology;
use axlemap_layout::{LayoutProjector, SchematicProjector, WorldProjector};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    group.sample_size(50);

    group.bench_function("build_topology_18", |b| {
        b.iter(|| Topology::build(black_box(TireCount::new(18))));
    });

    let truck = topology(18);
    let schematic = SchematicProjector::default();
    group.bench_function("schematic_18", |b| {
        b.iter(|| schematic.project(black_box(&truck)));
    });

    let world = WorldProjector::default();
    group.bench_function("world_18", |b| {
        b.iter(|| world.project(black_box(&truck)));
    });

    // A long road train, far beyond real fleets.
    let train = topology(1_000);
    group.bench_function("world_1000", |b| {
        b.iter(|| world.project(black_box(&train)));
    });

    let layout = schematic.project(&truck).unwrap();
    group.bench_function("schematic_pick", |b| {
        b.iter(|| schematic.pick(&layout, black_box(40.0), black_box(100.0)));
    });

    group.finish();
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
