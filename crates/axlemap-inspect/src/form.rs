//! Per-position measurement form.
//!
//! A form always belongs to exactly one position and starts empty. Moving to
//! another position throws the form away, so no value typed for one tire can
//! show up on the next.

use axlemap_core::id::PositionId;
use serde::{Deserialize, Serialize};

/// Errors from turning a form into a reading.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("position {position}: {field} is required")]
    Missing {
        position: PositionId,
        field: &'static str,
    },
    #[error("position {position}: {field} must be a non-negative number, got {value}")]
    OutOfRange {
        position: PositionId,
        field: &'static str,
        value: f64,
    },
}

/// Tread depth in millimeters across the tire, outer shoulder to inner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreadDepth {
    pub outer: f64,
    pub center: f64,
    pub inner: f64,
}

impl TreadDepth {
    /// The shallowest of the three measurements.
    pub fn min(&self) -> f64 {
        self.outer.min(self.center).min(self.inner)
    }
}

/// A validated set of measurements for one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TireReading {
    pub position: PositionId,
    pub pressure_psi: f64,
    pub hour_meter: f64,
    pub tread: TreadDepth,
    pub observations: String,
    /// Catalog ID of the tire mounted at this position, when known.
    pub tire_id: Option<String>,
}

/// Editable measurements for the current position.
///
/// There is no unbound form: the only constructor is [`InspectionForm::fresh`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionForm {
    position: PositionId,
    pub pressure_psi: Option<f64>,
    pub hour_meter: Option<f64>,
    pub depth_outer: Option<f64>,
    pub depth_center: Option<f64>,
    pub depth_inner: Option<f64>,
    pub observations: String,
    pub tire_id: Option<String>,
}

impl InspectionForm {
    /// An empty form for `position`.
    pub fn fresh(position: PositionId) -> Self {
        Self {
            position,
            pressure_psi: None,
            hour_meter: None,
            depth_outer: None,
            depth_center: None,
            depth_inner: None,
            observations: String::new(),
            tire_id: None,
        }
    }

    /// The position this form belongs to.
    pub fn position(&self) -> PositionId {
        self.position
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::fresh(self.position)
    }

    pub fn set_tread(&mut self, outer: f64, center: f64, inner: f64) {
        self.depth_outer = Some(outer);
        self.depth_center = Some(center);
        self.depth_inner = Some(inner);
    }

    /// Validate every measurement and produce a reading.
    pub fn to_reading(&self) -> Result<TireReading, FormError> {
        let position = self.position;
        let field = |name: &'static str, value: Option<f64>| -> Result<f64, FormError> {
            let value = value.ok_or(FormError::Missing {
                position,
                field: name,
            })?;
            if value.is_finite() && value >= 0.0 {
                Ok(value)
            } else {
                Err(FormError::OutOfRange {
                    position,
                    field: name,
                    value,
                })
            }
        };

        Ok(TireReading {
            position,
            pressure_psi: field("pressure", self.pressure_psi)?,
            hour_meter: field("hour meter", self.hour_meter)?,
            tread: TreadDepth {
                outer: field("outer tread depth", self.depth_outer)?,
                center: field("center tread depth", self.depth_center)?,
                inner: field("inner tread depth", self.depth_inner)?,
            },
            observations: self.observations.trim().to_string(),
            tire_id: self.tire_id.clone(),
        })
    }
}
