//! Inspection state for axle topologies.
//!
//! [`PositionSelection`] tracks which position an inspector is on and walks
//! the vehicle front to back. [`InspectionSession`] pairs it with a fresh
//! [`InspectionForm`] per position and collects validated readings.

pub mod form;
pub mod selection;
pub mod session;

pub use form::{FormError, InspectionForm, TireReading, TreadDepth};
pub use selection::{Advance, PositionSelection, SelectionError, Transition};
pub use session::{AxleSummary, InspectionSession, InspectionSummary, SessionError};
