//! Shared test helpers for unit tests, integration tests, and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use std::collections::BTreeSet;

use crate::id::{PositionId, TireCount, VehicleKey};
use crate::topology::{Axle, Topology};

// ===========================================================================
// Constructors
// ===========================================================================

pub fn pos(n: u32) -> PositionId {
    PositionId(n)
}

pub fn positions(ids: &[u32]) -> Vec<PositionId> {
    ids.iter().copied().map(PositionId).collect()
}

pub fn topology(count: u32) -> Topology {
    Topology::build(TireCount::new(count))
}

/// A small fleet matching the demo catalog: truck, van, bus.
pub fn demo_fleet() -> Vec<(VehicleKey, TireCount)> {
    vec![
        (VehicleKey::new("TT305"), TireCount::new(6)),
        (VehicleKey::new("ABC-123"), TireCount::new(4)),
        (VehicleKey::new("SXK-990"), TireCount::new(6)),
    ]
}

// ===========================================================================
// Assertions
// ===========================================================================

/// Assert an axle carries exactly the given left and right positions.
pub fn assert_axle(axle: &Axle, left: &[u32], right: &[u32]) {
    assert_eq!(axle.left, positions(left), "left group of {}", axle.id);
    assert_eq!(axle.right, positions(right), "right group of {}", axle.id);
}

/// Assert the partition laws: positions are exactly `1..=count` with no
/// duplicates, the front axle is `{[1], [2]}` whenever there are two tires,
/// and only the last axle may carry a single tire.
pub fn assert_partition(topology: &Topology) {
    let count = topology.tire_count().get();
    let ids: Vec<u32> = topology.position_ids().map(PositionId::get).collect();
    let unique: BTreeSet<u32> = ids.iter().copied().collect();
    assert_eq!(ids.len(), count as usize, "cardinality for {count} tires");
    assert_eq!(
        unique,
        (1..=count).collect::<BTreeSet<_>>(),
        "completeness for {count} tires"
    );

    if count >= 2 {
        assert_axle(&topology.axles()[0], &[1], &[2]);
    }

    let axles = topology.axles();
    for (i, axle) in axles.iter().enumerate() {
        let width = axle.width();
        assert_eq!(width, axle.kind.width(), "kind/width mismatch on {}", axle.id);
        if i + 1 < axles.len() {
            assert!(
                width == 2 || width == 4,
                "axle {} of {count} tires has width {width}",
                axle.id
            );
        } else {
            assert!(matches!(width, 1 | 2 | 4), "last axle width {width}");
        }
    }
}
