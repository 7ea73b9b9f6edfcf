//! The fleet shipped under `fleet/` must always load and validate.

use std::path::Path;

use axlemap_core::catalog::TireCountProvider;
use axlemap_core::id::{TireCount, VehicleKey};
use axlemap_data::load_fleet_config;
use axlemap_layout::{SchematicConfig, WorldConfig};

fn fleet_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/fleet"))
}

#[test]
fn bundled_fleet_loads() {
    let fleet = load_fleet_config(fleet_dir()).unwrap();
    assert_eq!(fleet.catalog.len(), 5);
    assert_eq!(
        fleet.catalog.tire_count(&VehicleKey::new("5")).unwrap(),
        TireCount::new(10)
    );
    assert_eq!(fleet.catalog.by_plate("RT-777").unwrap().tire_count, TireCount::new(7));
}

#[test]
fn bundled_layout_matches_defaults() {
    let fleet = load_fleet_config(fleet_dir()).unwrap();
    assert_eq!(*fleet.schematic.config(), SchematicConfig::default());
    assert_eq!(*fleet.world.config(), WorldConfig::default());
}
