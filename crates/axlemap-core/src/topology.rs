//! Axle topology: partitions a tire count into an ordered chain of axles.
//!
//! The partition is a pure function of the tire count. Every consumer
//! (schematic, 3D scene, inspection session, summaries) reads the same
//! [`Topology`] and therefore the same position-to-axle mapping.

use serde::{Deserialize, Serialize};

use crate::id::{AxleId, PositionId, TireCount};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Errors from topology construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("invalid tire count {count}: must be between 0 and {}", u32::MAX)]
    InvalidTireCount { count: i64 },
}

/// What kind of axle a group of positions forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxleKind {
    /// Front steer axle: one tire per side, positions 1 and 2.
    Steer,
    /// Rear axle with twin tires: outer and inner on each side.
    Dual,
    /// Rear axle with one tire per side.
    Single,
    /// A lone leftover tire with no partner, e.g. a spare.
    Terminal,
}

impl AxleKind {
    /// Number of positions an axle of this kind carries.
    pub fn width(self) -> usize {
        match self {
            AxleKind::Steer | AxleKind::Single => 2,
            AxleKind::Dual => 4,
            AxleKind::Terminal => 1,
        }
    }
}

/// Which side of the vehicle centerline a tire sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// How a tire is mounted within its side of the axle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mount {
    /// The only tire on this side of a steer or single axle.
    Single,
    /// The wheel farthest from the centerline on a dual axle.
    Outer,
    /// The wheel closest to the centerline on a dual axle.
    Inner,
    /// The unpaired tire of a terminal axle.
    Spare,
}

/// A transverse group of tire positions.
///
/// `left` is ordered outer to inner (closest to center last) and `right` is
/// ordered inner to outer (closest to center first), so reading
/// `left ++ right` sweeps across the vehicle from left to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axle {
    pub id: AxleId,
    pub kind: AxleKind,
    pub left: Vec<PositionId>,
    pub right: Vec<PositionId>,
}

impl Axle {
    fn steer() -> Self {
        Self {
            id: AxleId::Front,
            kind: AxleKind::Steer,
            left: vec![PositionId(1)],
            right: vec![PositionId(2)],
        }
    }

    fn rear(kind: AxleKind, first: u32) -> Self {
        let (left, right) = match kind {
            AxleKind::Dual => (vec![first, first + 1], vec![first + 2, first + 3]),
            AxleKind::Single | AxleKind::Steer => (vec![first], vec![first + 1]),
            AxleKind::Terminal => (vec![first], Vec::new()),
        };
        Self {
            id: AxleId::Rear {
                first: PositionId(first),
            },
            kind,
            left: left.into_iter().map(PositionId).collect(),
            right: right.into_iter().map(PositionId).collect(),
        }
    }

    /// Number of positions on this axle.
    pub fn width(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Positions swept left to right across the vehicle.
    pub fn positions(&self) -> impl Iterator<Item = PositionId> + '_ {
        self.left.iter().chain(self.right.iter()).copied()
    }

    pub fn contains(&self, position: PositionId) -> bool {
        self.left.contains(&position) || self.right.contains(&position)
    }

    /// Side and mount of a position on this axle, if it is carried here.
    pub fn mount_of(&self, position: PositionId) -> Option<(Side, Mount)> {
        let mount_at = |index: usize, outer_index: usize| match self.kind {
            AxleKind::Dual if index == outer_index => Mount::Outer,
            AxleKind::Dual => Mount::Inner,
            AxleKind::Terminal => Mount::Spare,
            AxleKind::Steer | AxleKind::Single => Mount::Single,
        };
        if let Some(i) = self.left.iter().position(|&p| p == position) {
            return Some((Side::Left, mount_at(i, 0)));
        }
        let i = self.right.iter().position(|&p| p == position)?;
        Some((Side::Right, mount_at(i, self.right.len().saturating_sub(1))))
    }
}

/// Where a position sits within a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TireSlot {
    pub position: PositionId,
    pub axle_index: usize,
    pub axle: AxleId,
    pub side: Side,
    pub mount: Mount,
}

// ---------------------------------------------------------------------------
// Topology
// ---------------------------------------------------------------------------

/// The ordered axle chain for one tire count, front to back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topology {
    tire_count: TireCount,
    axles: Vec<Axle>,
}

impl Topology {
    /// Partition `tire_count` tires into axles.
    ///
    /// Total and deterministic: every count yields exactly the positions
    /// `1..=count`, each on exactly one axle. A single tire forms one
    /// terminal axle (`rear-1`).
    pub fn build(tire_count: TireCount) -> Self {
        let count = tire_count.get();
        let mut axles = Vec::new();
        let mut next = 1u32;

        if count >= 2 {
            axles.push(Axle::steer());
            next = 3;
        }

        // `next` only ever grows, and stops one past `count`.
        while next <= count {
            let remaining = count - next + 1;
            let kind = if remaining >= 4 {
                AxleKind::Dual
            } else if remaining >= 2 {
                AxleKind::Single
            } else {
                AxleKind::Terminal
            };
            axles.push(Axle::rear(kind, next));
            match next.checked_add(kind.width() as u32) {
                Some(n) => next = n,
                None => break,
            }
        }

        tracing::debug!(tire_count = count, axles = axles.len(), "built axle topology");

        Self { tire_count, axles }
    }

    pub fn tire_count(&self) -> TireCount {
        self.tire_count
    }

    pub fn axles(&self) -> &[Axle] {
        &self.axles
    }

    pub fn is_empty(&self) -> bool {
        self.axles.is_empty()
    }

    /// The front steer axle, absent for fewer than two tires.
    pub fn front(&self) -> Option<&Axle> {
        self.axles.first().filter(|a| a.kind == AxleKind::Steer)
    }

    /// Rear axles in front-to-back order.
    pub fn rear_axles(&self) -> impl Iterator<Item = &Axle> {
        self.axles.iter().filter(|a| a.kind != AxleKind::Steer)
    }

    /// Number of rear axle slots consumed (terminal tire included).
    pub fn rear_axle_count(&self) -> usize {
        self.rear_axles().count()
    }

    /// Every position, axle by axle, swept left to right within each axle.
    pub fn position_ids(&self) -> impl Iterator<Item = PositionId> + '_ {
        self.axles.iter().flat_map(Axle::positions)
    }

    /// Every position with its slot, in axle order.
    pub fn slots(&self) -> impl Iterator<Item = TireSlot> + '_ {
        self.axles.iter().enumerate().flat_map(|(axle_index, axle)| {
            axle.positions().filter_map(move |position| {
                let (side, mount) = axle.mount_of(position)?;
                Some(TireSlot {
                    position,
                    axle_index,
                    axle: axle.id,
                    side,
                    mount,
                })
            })
        })
    }

    /// Locate a position. `None` when it lies outside `1..=tire_count`.
    pub fn locate(&self, position: PositionId) -> Option<TireSlot> {
        if !self.tire_count.contains(position) {
            return None;
        }
        let axle_index = self
            .axles
            .iter()
            .position(|a| a.positions().any(|p| p == position))?;
        let axle = &self.axles[axle_index];
        let (side, mount) = axle.mount_of(position)?;
        Some(TireSlot {
            position,
            axle_index,
            axle: axle.id,
            side,
            mount,
        })
    }
}

/// Build a topology from an unchecked, signed tire count.
///
/// Negative counts are rejected before any axle is emitted.
pub fn build_topology(raw_count: i64) -> Result<Topology, TopologyError> {
    let tire_count = TireCount::try_from(raw_count).inspect_err(|_| {
        tracing::warn!(raw_count, "rejected tire count");
    })?;
    Ok(Topology::build(tire_count))
}
