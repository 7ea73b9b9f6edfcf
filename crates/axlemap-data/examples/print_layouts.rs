//! Loads the bundled fleet, prints each vehicle's axles and both layouts,
//! and checks the two views agree.
//!
//! Run with: `cargo run --package axlemap-data --example print_layouts`
//! Set `RUST_LOG=debug` to see the engine's tracing output.

use std::path::Path;

use axlemap_core::fixed::fixed64_to_f64;
use axlemap_core::topology::Topology;
use axlemap_data::load_fleet_config;
use axlemap_layout::{LayoutProjector, same_positions};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let fleet_dir = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/fleet"));
    let fleet = load_fleet_config(fleet_dir).unwrap_or_else(|e| {
        panic!("failed to load fleet from {}: {e}", fleet_dir.display());
    });

    println!("Vehicles: {}\n", fleet.catalog.len());

    for vehicle in fleet.catalog.iter() {
        println!(
            "--- {} ({}, {} tires) ---",
            vehicle.plate, vehicle.kind, vehicle.tire_count
        );

        let topology = Topology::build(vehicle.tire_count);
        for axle in topology.axles() {
            println!(
                "    {:>8} {:?}: left={:?} right={:?}",
                axle.id.to_string(),
                axle.kind,
                axle.left.iter().map(|p| p.get()).collect::<Vec<_>>(),
                axle.right.iter().map(|p| p.get()).collect::<Vec<_>>()
            );
        }

        let (schematic, world) = match (
            fleet.schematic.project(&topology),
            fleet.world.project(&topology),
        ) {
            (Ok(schematic), Ok(world)) => (schematic, world),
            (Err(e), _) | (_, Err(e)) => panic!("failed to project {}: {e}", vehicle.plate),
        };
        for (s, w) in schematic.tires().iter().zip(world.tires()) {
            let [x, y, z] = w.point.to_f32_array();
            println!(
                "      #{:<3} row={} col={:>2}  xyz=({x:>5.2}, {y:>4.2}, {z:>5.2})",
                s.position.get(),
                s.point.row,
                s.point.column,
            );
        }
        println!(
            "    schematic {}x{} px, chassis {:.2} m",
            schematic.extent().width,
            schematic.extent().height,
            fixed64_to_f64(world.extent().length)
        );

        if same_positions(&schematic, &world) {
            println!("    Views agree: PASS\n");
        } else {
            println!("    Views agree: FAIL!");
            std::process::exit(1);
        }
    }
}
