//! One vehicle inspection: topology, current position, the form for that
//! position, and the readings recorded so far.

use std::collections::BTreeMap;

use axlemap_core::catalog::{CatalogError, TireCountProvider};
use axlemap_core::id::{AxleId, PositionId, TireCount, VehicleKey};
use axlemap_core::topology::{AxleKind, Topology};
use serde::{Deserialize, Serialize};

use crate::form::{FormError, InspectionForm, TireReading};
use crate::selection::{Advance, PositionSelection, SelectionError, Transition};

/// Errors from inspection sessions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("inspection incomplete: {} position(s) without a reading", missing.len())]
    Incomplete { missing: Vec<PositionId> },
}

/// Readings of one axle, in position order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxleSummary {
    pub axle: AxleId,
    pub kind: AxleKind,
    pub readings: Vec<TireReading>,
}

/// Everything a finished inspection hands to whoever files the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionSummary {
    pub vehicle: VehicleKey,
    pub tire_count: TireCount,
    pub axles: Vec<AxleSummary>,
}

impl InspectionSummary {
    pub fn readings(&self) -> impl Iterator<Item = &TireReading> {
        self.axles.iter().flat_map(|a| a.readings.iter())
    }

    /// The position with the shallowest tread, if any reading exists.
    pub fn lowest_tread(&self) -> Option<(PositionId, f64)> {
        self.readings()
            .map(|r| (r.position, r.tread.min()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// An inspection in progress. Owned by a single inspection view.
#[derive(Debug, Clone)]
pub struct InspectionSession {
    vehicle: VehicleKey,
    topology: Topology,
    selection: PositionSelection,
    form: InspectionForm,
    readings: BTreeMap<PositionId, TireReading>,
}

impl InspectionSession {
    pub fn new(vehicle: VehicleKey, tire_count: TireCount) -> Self {
        let selection = PositionSelection::new(tire_count);
        let form = InspectionForm::fresh(selection.current());
        tracing::info!(vehicle = %vehicle, tire_count = tire_count.get(), "inspection started");
        Self {
            vehicle,
            topology: Topology::build(tire_count),
            selection,
            form,
            readings: BTreeMap::new(),
        }
    }

    /// Look the vehicle's tire count up in `provider` and start.
    pub fn start<P>(vehicle: VehicleKey, provider: &P) -> Result<Self, SessionError>
    where
        P: TireCountProvider + ?Sized,
    {
        let tire_count = provider.tire_count(&vehicle)?;
        Ok(Self::new(vehicle, tire_count))
    }

    pub fn vehicle(&self) -> &VehicleKey {
        &self.vehicle
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn tire_count(&self) -> TireCount {
        self.topology.tire_count()
    }

    pub fn current(&self) -> PositionId {
        self.selection.current()
    }

    pub fn selection(&self) -> &PositionSelection {
        &self.selection
    }

    pub fn form(&self) -> &InspectionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InspectionForm {
        &mut self.form
    }

    /// Jump to `position`, e.g. from a tap on either layout.
    pub fn select(&mut self, position: PositionId) -> Result<(), SessionError> {
        if let Some(transition) = self.selection.select(position)? {
            self.switch_form(transition);
        }
        Ok(())
    }

    /// Move to the next position without recording anything.
    pub fn advance(&mut self) -> Advance {
        let step = self.selection.advance();
        if let Advance::Continue(transition) = step {
            self.switch_form(transition);
        }
        step
    }

    fn switch_form(&mut self, transition: Transition) {
        debug_assert_eq!(self.form.position(), transition.from);
        self.form = InspectionForm::fresh(transition.to);
    }

    /// Validate the current form and store it as the reading for the current
    /// position, replacing any earlier one.
    pub fn record(&mut self) -> Result<&TireReading, SessionError> {
        let position = self.current();
        if !self.tire_count().contains(position) {
            return Err(SelectionError::InvalidPosition {
                position: position.get(),
                tire_count: self.tire_count().get(),
            }
            .into());
        }
        let reading = self.form.to_reading()?;
        tracing::debug!(position = position.get(), "recorded reading");
        self.readings.insert(position, reading);
        Ok(&self.readings[&position])
    }

    /// Record the current form, then advance.
    pub fn save_and_advance(&mut self) -> Result<Advance, SessionError> {
        self.record()?;
        Ok(self.advance())
    }

    pub fn reading(&self, position: PositionId) -> Option<&TireReading> {
        self.readings.get(&position)
    }

    pub fn readings(&self) -> impl Iterator<Item = &TireReading> {
        self.readings.values()
    }

    /// Positions that still have no reading, in numbering order.
    pub fn missing_positions(&self) -> Vec<PositionId> {
        self.tire_count()
            .positions()
            .filter(|p| !self.readings.contains_key(p))
            .collect()
    }

    pub fn is_finished(&self) -> bool {
        self.readings.len() == self.tire_count().get() as usize
    }

    /// Close the inspection, grouping readings by axle.
    pub fn finish(self) -> Result<InspectionSummary, SessionError> {
        let missing = self.missing_positions();
        if !missing.is_empty() {
            tracing::warn!(vehicle = %self.vehicle, missing = missing.len(), "inspection incomplete");
            return Err(SessionError::Incomplete { missing });
        }

        let mut readings = self.readings;
        let axles = self
            .topology
            .axles()
            .iter()
            .map(|axle| {
                let mut group: Vec<TireReading> = axle
                    .positions()
                    .filter_map(|p| readings.remove(&p))
                    .collect();
                group.sort_by_key(|r| r.position);
                AxleSummary {
                    axle: axle.id,
                    kind: axle.kind,
                    readings: group,
                }
            })
            .collect();

        tracing::info!(vehicle = %self.vehicle, "inspection finished");
        Ok(InspectionSummary {
            vehicle: self.vehicle,
            tire_count: self.topology.tire_count(),
            axles,
        })
    }
}
