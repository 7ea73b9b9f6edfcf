//! Resolved vehicle catalog.

use std::collections::BTreeMap;
use std::path::Path;

use axlemap_core::catalog::{CatalogError, TireCountProvider};
use axlemap_core::id::{TireCount, VehicleKey};

use crate::loader::{DataLoadError, read_file};
use crate::schema::FleetData;

/// A vehicle whose tire count passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRecord {
    pub key: VehicleKey,
    pub plate: String,
    pub client_id: Option<String>,
    pub kind: String,
    pub tire_count: TireCount,
    pub active: bool,
}

/// Read-only vehicle catalog loaded from a data file.
#[derive(Debug, Clone, Default)]
pub struct VehicleCatalog {
    vehicles: BTreeMap<VehicleKey, VehicleRecord>,
}

impl VehicleCatalog {
    pub fn get(&self, key: &VehicleKey) -> Option<&VehicleRecord> {
        self.vehicles.get(key)
    }

    /// Find a vehicle by license plate.
    pub fn by_plate(&self, plate: &str) -> Option<&VehicleRecord> {
        self.vehicles.values().find(|v| v.plate == plate)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleRecord> {
        self.vehicles.values()
    }
}

impl TireCountProvider for VehicleCatalog {
    fn tire_count(&self, vehicle: &VehicleKey) -> Result<TireCount, CatalogError> {
        let record = self
            .vehicles
            .get(vehicle)
            .ok_or_else(|| CatalogError::UnknownVehicle {
                vehicle: vehicle.clone(),
            })?;
        if !record.active {
            return Err(CatalogError::Inactive {
                vehicle: vehicle.clone(),
            });
        }
        Ok(record.tire_count)
    }
}

/// Load and validate `path` as a vehicle catalog.
pub(crate) fn load_catalog(path: &Path) -> Result<VehicleCatalog, DataLoadError> {
    let data: FleetData = read_file(path)?;
    let mut vehicles = BTreeMap::new();

    for v in data.vehicles {
        let key = VehicleKey::new(v.id.clone());
        if vehicles.contains_key(&key) {
            return Err(DataLoadError::DuplicateVehicle {
                file: path.to_path_buf(),
                id: v.id,
            });
        }
        let tire_count =
            TireCount::try_from(v.tire_count).map_err(|source| DataLoadError::InvalidTireCount {
                file: path.to_path_buf(),
                id: v.id.clone(),
                source,
            })?;
        vehicles.insert(
            key.clone(),
            VehicleRecord {
                key,
                plate: v.plate,
                client_id: v.client_id,
                kind: v.kind,
                tire_count,
                active: v.active,
            },
        );
    }

    tracing::debug!(file = %path.display(), vehicles = vehicles.len(), "loaded vehicle catalog");
    Ok(VehicleCatalog { vehicles })
}
