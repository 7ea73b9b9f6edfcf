//! Axlemap Core -- axle topology for tire inspection.
//!
//! This crate turns a vehicle's total tire count into an ordered chain of
//! axles and assigns every tire a stable, 1-based position identifier. It is
//! the shared input of every layout projector and of the inspection session,
//! so all of them agree on which tire a position ID refers to.
//!
//! # Partition Rule
//!
//! Axles are emitted front to back by a greedy partition:
//!
//! 1. **Front** -- positions 1 (left) and 2 (right) when there are at least
//!    two tires.
//! 2. **Dual** -- while four or more tires remain, consume four: left outer,
//!    left inner, right inner, right outer.
//! 3. **Single** -- when two or three remain, consume two: one per side.
//! 4. **Terminal** -- a lone leftover tire (a spare) on the left group.
//!
//! ```rust,ignore
//! let topology = Topology::build(TireCount::new(10));
//! assert_eq!(topology.axles().len(), 3);
//! ```
//!
//! # Key Types
//!
//! - [`topology::Topology`] -- The ordered axle list for one tire count.
//! - [`topology::Axle`] -- One transverse group of left/right positions.
//! - [`id::PositionId`] -- 1-based tire position, stable across views.
//! - [`id::TireCount`] -- Validated, non-negative tire count.
//! - [`catalog::TireCountProvider`] -- Read-only source of tire counts keyed
//!   by vehicle.
//! - [`fixed::Fixed64`] -- Q32.32 fixed-point type for world coordinates.

pub mod catalog;
pub mod fixed;
pub mod id;
pub mod topology;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
