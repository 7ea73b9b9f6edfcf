use serde::{Deserialize, Serialize};
use std::fmt;

use crate::topology::TopologyError;

/// Identifies one tire mount point on a vehicle. 1-based, dense, and stable
/// across the topology, every layout, and the inspection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PositionId(pub u32);

impl PositionId {
    /// The first position on every vehicle.
    pub const FIRST: PositionId = PositionId(1);

    pub fn get(self) -> u32 {
        self.0
    }

    /// The position immediately behind this one in numbering order.
    pub fn next(self) -> PositionId {
        PositionId(self.0 + 1)
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies an axle within a topology.
///
/// Rear axles are keyed by the first position they carry, so the identifier
/// only changes when the tire count changes the partition itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AxleId {
    Front,
    Rear { first: PositionId },
}

impl fmt::Display for AxleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxleId::Front => write!(f, "front"),
            AxleId::Rear { first } => write!(f, "rear-{first}"),
        }
    }
}

/// Total number of wheel positions on a vehicle.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TireCount(u32);

impl TireCount {
    pub const ZERO: TireCount = TireCount(0);

    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whether `position` lies in `1..=count`.
    pub fn contains(self, position: PositionId) -> bool {
        position.0 >= 1 && position.0 <= self.0
    }

    /// The last position ID, or `None` for an empty vehicle.
    pub fn last(self) -> Option<PositionId> {
        (self.0 > 0).then_some(PositionId(self.0))
    }

    /// Iterate over every position ID in numbering order.
    pub fn positions(self) -> impl Iterator<Item = PositionId> {
        (1..=self.0).map(PositionId)
    }
}

impl From<u32> for TireCount {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

impl TryFrom<i64> for TireCount {
    type Error = TopologyError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u32::try_from(raw)
            .map(TireCount)
            .map_err(|_| TopologyError::InvalidTireCount { count: raw })
    }
}

impl fmt::Display for TireCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key of a vehicle record in whatever catalog supplies tire counts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VehicleKey(pub String);

impl VehicleKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
