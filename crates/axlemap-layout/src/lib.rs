//! Layout projection for axle topologies.
//!
//! A [`LayoutProjector`] turns a [`Topology`] into one [`PlacedTire`] per
//! position plus an overall extent. Two realizations ship here:
//!
//! - [`SchematicProjector`] -- flat rows of tire boxes for a 2D schematic.
//! - [`WorldProjector`] -- explicit (x, y, z) wheel centers for a 3D scene.
//!
//! Both read positions straight from the topology, so a position ID picked in
//! one view always names the same tire on the same axle in the other.

use axlemap_core::fixed::{Fixed64, checked_f64_to_fixed64};
use axlemap_core::id::{PositionId, TireCount};
use axlemap_core::topology::Topology;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub mod schematic;
pub mod world;

pub use schematic::{Rect, SchematicConfig, SchematicExtent, SchematicProjector, SchematicSlot};
pub use world::{WorldConfig, WorldExtent, WorldPoint, WorldProjector};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Errors from projector configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} = {value} does not fit the fixed-point coordinate range")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("tires would overlap: {detail}")]
    Overlap { detail: String },
}

/// Errors from placing a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    /// Stepping back to this axle ran past the coordinate range; placing it
    /// would stack it on an axle ahead of it.
    #[error("axle {axle_index} lies outside the coordinate range")]
    AxleOutOfRange { axle_index: usize },
    /// The vehicle's overall bounds do not fit the coordinate range.
    #[error("vehicle extent lies outside the coordinate range")]
    ExtentOutOfRange,
}

/// One tire placed in a projector's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTire<P> {
    pub position: PositionId,
    /// Index of the carrying axle in the topology, front axle first.
    pub axle_index: usize,
    pub point: P,
}

/// Placed tires in topology order plus the extent of the whole vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout<P, E> {
    tires: Vec<PlacedTire<P>>,
    extent: E,
}

impl<P, E> Layout<P, E> {
    pub(crate) fn new(tires: Vec<PlacedTire<P>>, extent: E) -> Self {
        Self { tires, extent }
    }

    pub fn tires(&self) -> &[PlacedTire<P>] {
        &self.tires
    }

    pub fn extent(&self) -> &E {
        &self.extent
    }

    pub fn len(&self) -> usize {
        self.tires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tires.is_empty()
    }

    /// The placement of a position, if the layout carries it.
    pub fn get(&self, position: PositionId) -> Option<&PlacedTire<P>> {
        self.tires.iter().find(|t| t.position == position)
    }

    pub fn position_ids(&self) -> impl Iterator<Item = PositionId> + '_ {
        self.tires.iter().map(|t| t.position)
    }
}

impl<P: Ord, E> Layout<P, E> {
    /// Whether no two tires share a coordinate.
    pub fn has_distinct_points(&self) -> bool {
        let mut seen = BTreeSet::new();
        self.tires.iter().all(|t| seen.insert(&t.point))
    }
}

/// Whether two layouts place the same positions on the same axles, in the
/// same order, regardless of their coordinate spaces.
pub fn same_positions<P, E, Q, F>(a: &Layout<P, E>, b: &Layout<Q, F>) -> bool {
    a.len() == b.len()
        && a
            .tires()
            .iter()
            .zip(b.tires())
            .all(|(x, y)| x.position == y.position && x.axle_index == y.axle_index)
}

// ---------------------------------------------------------------------------
// Projector trait
// ---------------------------------------------------------------------------

/// Stateless mapping from a topology to renderable geometry.
pub trait LayoutProjector {
    type Point: Copy + PartialEq + fmt::Debug;
    type Extent: Copy + fmt::Debug;

    /// Place every position of `topology`, or report why the vehicle does
    /// not fit this projector's coordinate space.
    fn project(
        &self,
        topology: &Topology,
    ) -> Result<Layout<Self::Point, Self::Extent>, ProjectionError>;

    /// Build the topology for `tire_count` and place it.
    fn project_count(
        &self,
        tire_count: TireCount,
    ) -> Result<Layout<Self::Point, Self::Extent>, ProjectionError> {
        self.project(&Topology::build(tire_count))
    }
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), LayoutConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutConfigError::NonPositive { field, value })
    }
}

/// Convert a config value to fixed point, rejecting values outside the
/// Q32.32 range.
pub(crate) fn require_fixed(field: &'static str, value: f64) -> Result<Fixed64, LayoutConfigError> {
    checked_f64_to_fixed64(value).ok_or(LayoutConfigError::OutOfRange { field, value })
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: f64,
) -> Result<(), LayoutConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutConfigError::Negative { field, value })
    }
}
