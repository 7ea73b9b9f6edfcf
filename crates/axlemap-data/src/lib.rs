//! Data-driven configuration for the axle layout engine.
//!
//! Reads a directory holding:
//!
//! - `vehicles.{ron,toml,json}` (required) -- the vehicle catalog that
//!   supplies tire counts.
//! - `layout.{ron,toml,json}` (optional) -- schematic and world projector
//!   constants; missing fields keep their defaults.

pub mod catalog;
mod loader;
pub mod schema;

use std::path::Path;

use axlemap_layout::{SchematicProjector, WorldProjector};

pub use catalog::{VehicleCatalog, VehicleRecord};
pub use loader::{DataLoadError, FleetFile};

use crate::loader::{locate, locate_required, read_file};
use crate::schema::LayoutData;

/// Everything loaded from a fleet data directory.
#[derive(Debug, Clone)]
pub struct FleetConfig {
    pub catalog: VehicleCatalog,
    pub schematic: SchematicProjector,
    pub world: WorldProjector,
}

/// Load the vehicle catalog and projector configuration from `dir`.
pub fn load_fleet_config(dir: &Path) -> Result<FleetConfig, DataLoadError> {
    let vehicles_path = locate_required(dir, FleetFile::Vehicles)?;
    let catalog = catalog::load_catalog(&vehicles_path)?;

    let (schematic, world) = match locate(dir, FleetFile::Layout)? {
        Some(path) => load_projectors(&path)?,
        None => (SchematicProjector::default(), WorldProjector::default()),
    };

    tracing::info!(dir = %dir.display(), vehicles = catalog.len(), "loaded fleet config");
    Ok(FleetConfig {
        catalog,
        schematic,
        world,
    })
}

fn load_projectors(path: &Path) -> Result<(SchematicProjector, WorldProjector), DataLoadError> {
    let data: LayoutData = read_file(path)?;
    let invalid = |source| DataLoadError::InvalidLayout {
        file: path.to_path_buf(),
        source,
    };
    let schematic = SchematicProjector::new(data.schematic).map_err(invalid)?;
    let world = WorldProjector::new(data.world).map_err(invalid)?;
    Ok((schematic, world))
}
