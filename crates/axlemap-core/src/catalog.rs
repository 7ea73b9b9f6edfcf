//! Read-only access to vehicle tire counts.
//!
//! The engine never reaches into a database. Callers hand it anything that
//! implements [`TireCountProvider`].

use std::collections::{BTreeMap, HashMap};

use crate::id::{TireCount, VehicleKey};

/// Errors from tire-count lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown vehicle '{vehicle}'")]
    UnknownVehicle { vehicle: VehicleKey },
    #[error("vehicle '{vehicle}' is inactive")]
    Inactive { vehicle: VehicleKey },
}

/// Capability that resolves a vehicle key to its tire count.
pub trait TireCountProvider {
    fn tire_count(&self, vehicle: &VehicleKey) -> Result<TireCount, CatalogError>;
}

impl TireCountProvider for BTreeMap<VehicleKey, TireCount> {
    fn tire_count(&self, vehicle: &VehicleKey) -> Result<TireCount, CatalogError> {
        self.get(vehicle)
            .copied()
            .ok_or_else(|| CatalogError::UnknownVehicle {
                vehicle: vehicle.clone(),
            })
    }
}

impl TireCountProvider for HashMap<VehicleKey, TireCount> {
    fn tire_count(&self, vehicle: &VehicleKey) -> Result<TireCount, CatalogError> {
        self.get(vehicle)
            .copied()
            .ok_or_else(|| CatalogError::UnknownVehicle {
                vehicle: vehicle.clone(),
            })
    }
}

impl<P: TireCountProvider + ?Sized> TireCountProvider for &P {
    fn tire_count(&self, vehicle: &VehicleKey) -> Result<TireCount, CatalogError> {
        (**self).tire_count(vehicle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::demo_fleet;

    #[test]
    fn btree_map_provider_resolves_known_vehicle() {
        let catalog: BTreeMap<_, _> = demo_fleet().into_iter().collect();
        let count = catalog.tire_count(&VehicleKey::new("ABC-123")).unwrap();
        assert_eq!(count, TireCount::new(4));
    }

    #[test]
    fn unknown_vehicle_is_reported() {
        let catalog: HashMap<_, _> = demo_fleet().into_iter().collect();
        let err = catalog.tire_count(&VehicleKey::new("ZZZ-000")).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownVehicle {
                vehicle: VehicleKey::new("ZZZ-000")
            }
        );
    }

    #[test]
    fn provider_by_reference() {
        fn lookup(p: impl TireCountProvider) -> TireCount {
            p.tire_count(&VehicleKey::new("TT305")).unwrap()
        }
        let catalog: BTreeMap<_, _> = demo_fleet().into_iter().collect();
        assert_eq!(lookup(&catalog), TireCount::new(6));
    }
}
