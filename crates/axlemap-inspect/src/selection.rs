//! Which tire position an inspection is currently looking at.

use axlemap_core::id::{PositionId, TireCount};
use serde::{Deserialize, Serialize};

/// Errors from selection changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("position {position} is outside 1..={tire_count}")]
    InvalidPosition { position: u32, tire_count: u32 },
}

/// A change of the current position. The owner discards whatever belonged
/// to `from` before setting up `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: PositionId,
    pub to: PositionId,
}

/// Outcome of [`PositionSelection::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    /// Moved to the next position.
    Continue(Transition),
    /// Already at the last position; nothing moved. What happens next is
    /// the caller's decision.
    Complete,
}

/// Current position of one inspection, bounded by the vehicle's tire count.
///
/// States are the positions `1..=tire_count` plus `Complete`. `select` jumps
/// to any valid position (reopening a completed walk); `advance` steps to
/// the successor, or reports `Complete` at the last position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSelection {
    tire_count: TireCount,
    current: PositionId,
    complete: bool,
}

impl PositionSelection {
    /// Start at position 1. A vehicle with no tires is complete from the
    /// outset.
    pub fn new(tire_count: TireCount) -> Self {
        Self {
            tire_count,
            current: PositionId::FIRST,
            complete: tire_count.is_zero(),
        }
    }

    pub fn tire_count(&self) -> TireCount {
        self.tire_count
    }

    pub fn current(&self) -> PositionId {
        self.current
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Jump to `position`. Returns the transition, or `None` when `position`
    /// is already current. Out-of-range positions leave the state untouched.
    pub fn select(&mut self, position: PositionId) -> Result<Option<Transition>, SelectionError> {
        if !self.tire_count.contains(position) {
            tracing::warn!(
                position = position.get(),
                tire_count = self.tire_count.get(),
                "rejected position selection"
            );
            return Err(SelectionError::InvalidPosition {
                position: position.get(),
                tire_count: self.tire_count.get(),
            });
        }
        self.complete = false;
        if position == self.current {
            return Ok(None);
        }
        let transition = Transition {
            from: self.current,
            to: position,
        };
        self.current = position;
        tracing::debug!(from = transition.from.get(), to = position.get(), "selected position");
        Ok(Some(transition))
    }

    /// Step to the next position, or report `Complete` at the last one.
    pub fn advance(&mut self) -> Advance {
        if self.current.get() < self.tire_count.get() {
            let transition = Transition {
                from: self.current,
                to: self.current.next(),
            };
            self.current = transition.to;
            tracing::debug!(to = transition.to.get(), "advanced position");
            Advance::Continue(transition)
        } else {
            if !self.complete {
                tracing::debug!(tire_count = self.tire_count.get(), "selection complete");
            }
            self.complete = true;
            Advance::Complete
        }
    }
}
