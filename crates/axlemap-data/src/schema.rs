//! Serde data file structs for fleet and layout definitions.
//!
//! These structs define the on-disk format. They are deserialized from RON,
//! JSON, or TOML files and then resolved into engine types by the loader.

use axlemap_layout::{SchematicConfig, WorldConfig};
use serde::Deserialize;

// ===========================================================================
// Vehicles
// ===========================================================================

/// A vehicle record in a data file.
///
/// `tire_count` is signed on purpose: a negative value is reported as a
/// load error rather than a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleData {
    pub id: String,
    #[serde(default)]
    pub plate: String,
    #[serde(default)]
    pub client_id: Option<String>,
    pub tire_count: i64,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Top-level contents of `vehicles.{ron,toml,json}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FleetData {
    pub vehicles: Vec<VehicleData>,
}

fn default_true() -> bool {
    true
}

// ===========================================================================
// Layout
// ===========================================================================

/// Top-level contents of `layout.{ron,toml,json}`. Every field falls back to
/// the projector defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LayoutData {
    pub schematic: SchematicConfig,
    pub world: WorldConfig,
}
