//! Property-based tests for both projectors.

use axlemap_core::id::TireCount;
use axlemap_core::topology::Topology;
use axlemap_layout::{
    LayoutProjector, ProjectionError, SchematicProjector, WorldConfig, WorldProjector,
    same_positions,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// One placed tire per position, no shared coordinates.
    #[test]
    fn schematic_places_every_position_once(count in 0u32..400) {
        let topology = Topology::build(TireCount::new(count));
        let layout = SchematicProjector::default().project(&topology).unwrap();
        prop_assert_eq!(layout.len(), count as usize);
        prop_assert!(layout.has_distinct_points());
        prop_assert!(layout.position_ids().eq(topology.position_ids()));
    }

    #[test]
    fn world_places_every_position_once(count in 0u32..400) {
        let topology = Topology::build(TireCount::new(count));
        let layout = WorldProjector::default().project(&topology).unwrap();
        prop_assert_eq!(layout.len(), count as usize);
        prop_assert!(layout.has_distinct_points());
    }

    /// Both views name the same tire on the same axle for every position.
    #[test]
    fn projectors_agree(count in 0u32..400) {
        let topology = Topology::build(TireCount::new(count));
        let schematic = SchematicProjector::default().project(&topology).unwrap();
        let world = WorldProjector::default().project(&topology).unwrap();
        prop_assert!(same_positions(&schematic, &world));
    }

    /// The chassis always reaches behind the rearmost wheel.
    #[test]
    fn chassis_covers_every_wheel(count in 0u32..400) {
        let layout = WorldProjector::default().project_count(TireCount::new(count)).unwrap();
        let extent = *layout.extent();
        for tire in layout.tires() {
            prop_assert!(tire.point.z > extent.rear_z);
            prop_assert!(tire.point.z < extent.front_z);
            prop_assert!(tire.point.x.abs() < extent.half_width);
        }
    }

    /// Tapping the center of any schematic box selects that box's tire.
    #[test]
    fn schematic_pick_round_trips(count in 1u32..120) {
        let projector = SchematicProjector::default();
        let layout = projector.project_count(TireCount::new(count)).unwrap();
        for tire in layout.tires() {
            let r = projector.slot_rect(layout.extent(), tire.point);
            prop_assert_eq!(
                projector.pick(&layout, r.x + r.width / 2.0, r.y + r.height / 2.0),
                Some(tire.position)
            );
        }
    }

    /// However far apart the axles are, the world projector either places
    /// every wheel at its own point or reports the axle it cannot place.
    #[test]
    fn long_spacing_fails_instead_of_stacking(
        spacing in 1.0f64..5.0e8,
        count in 0u32..2_000,
    ) {
        let projector = WorldProjector::new(WorldConfig {
            axle_spacing: spacing,
            ..WorldConfig::default()
        })
        .unwrap();
        match projector.project_count(TireCount::new(count)) {
            Ok(layout) => {
                prop_assert_eq!(layout.len(), count as usize);
                prop_assert!(layout.has_distinct_points());
            }
            Err(ProjectionError::AxleOutOfRange { axle_index }) => {
                prop_assert!(axle_index > 0);
            }
            Err(ProjectionError::ExtentOutOfRange) => {}
        }
    }
}
