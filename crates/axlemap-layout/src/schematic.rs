//! Flat schematic projection: one row per axle, tires as boxes either side
//! of a central beam.

use axlemap_core::id::PositionId;
use axlemap_core::topology::Topology;
use serde::{Deserialize, Serialize};

use crate::{Layout, LayoutConfigError, LayoutProjector, PlacedTire, ProjectionError};
use crate::{require_non_negative, require_positive};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A tire's cell in the schematic grid.
///
/// `row` counts axles from the front. `column` is signed: negative columns
/// are left of the centerline, positive columns right of it, and `-1` / `1`
/// are the cells closest to the center. Column 0 is never used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchematicSlot {
    pub row: u32,
    pub column: i32,
}

/// An axis-aligned rectangle in schematic pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Whether a point lies inside (edges inclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Pixel metrics for the schematic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchematicConfig {
    pub tire_width: f32,
    pub tire_height: f32,
    /// Gap between twin tires on the same side.
    pub tire_gap: f32,
    /// Gap between the centerline and the innermost tire on each side.
    pub center_gap: f32,
    /// Vertical gap between consecutive axle rows.
    pub row_gap: f32,
    /// Columns reserved per side even for narrow vehicles, so the chassis
    /// keeps a stable width.
    pub min_columns_per_side: u32,
}

impl Default for SchematicConfig {
    fn default() -> Self {
        Self {
            tire_width: 32.0,
            tire_height: 48.0,
            tire_gap: 4.0,
            center_gap: 12.0,
            row_gap: 32.0,
            min_columns_per_side: 2,
        }
    }
}

impl SchematicConfig {
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        require_positive("tire_width", f64::from(self.tire_width))?;
        require_positive("tire_height", f64::from(self.tire_height))?;
        require_non_negative("tire_gap", f64::from(self.tire_gap))?;
        require_non_negative("center_gap", f64::from(self.center_gap))?;
        require_non_negative("row_gap", f64::from(self.row_gap))?;
        Ok(())
    }

    fn column_pitch(&self) -> f32 {
        self.tire_width + self.tire_gap
    }

    fn row_pitch(&self) -> f32 {
        self.tire_height + self.row_gap
    }

    fn half_width(&self, columns: u32) -> f32 {
        if columns == 0 {
            return self.center_gap;
        }
        self.center_gap + columns as f32 * self.tire_width + (columns - 1) as f32 * self.tire_gap
    }
}

/// Overall size of the schematic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchematicExtent {
    pub rows: u32,
    pub columns_per_side: u32,
    pub width: f32,
    pub height: f32,
}

// ---------------------------------------------------------------------------
// SchematicProjector
// ---------------------------------------------------------------------------

/// Lays axles out as evenly spaced rows, front row first.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchematicProjector {
    config: SchematicConfig,
}

impl SchematicProjector {
    pub fn new(config: SchematicConfig) -> Result<Self, LayoutConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SchematicConfig {
        &self.config
    }

    /// Pixel rectangle of a slot within a schematic of the given extent.
    pub fn slot_rect(&self, extent: &SchematicExtent, slot: SchematicSlot) -> Rect {
        let c = &self.config;
        let center = extent.width / 2.0;
        let offset = (slot.column.unsigned_abs().saturating_sub(1)) as f32 * c.column_pitch();
        let x = if slot.column < 0 {
            center - c.center_gap - offset - c.tire_width
        } else {
            center + c.center_gap + offset
        };
        Rect {
            x,
            y: slot.row as f32 * c.row_pitch(),
            width: c.tire_width,
            height: c.tire_height,
        }
    }

    /// Map a tap in schematic pixels back to the position drawn there.
    pub fn pick(
        &self,
        layout: &Layout<SchematicSlot, SchematicExtent>,
        x: f32,
        y: f32,
    ) -> Option<PositionId> {
        layout
            .tires()
            .iter()
            .find(|t| self.slot_rect(layout.extent(), t.point).contains(x, y))
            .map(|t| t.position)
    }
}

impl LayoutProjector for SchematicProjector {
    type Point = SchematicSlot;
    type Extent = SchematicExtent;

    fn project(
        &self,
        topology: &Topology,
    ) -> Result<Layout<SchematicSlot, SchematicExtent>, ProjectionError> {
        let mut tires = Vec::with_capacity(topology.tire_count().get() as usize);
        let mut columns = self.config.min_columns_per_side;

        for (axle_index, axle) in topology.axles().iter().enumerate() {
            let row = axle_index as u32;
            let left_len = axle.left.len() as i32;
            // Left group reads outer to inner: the last entry sits at -1.
            for (i, &position) in axle.left.iter().enumerate() {
                tires.push(PlacedTire {
                    position,
                    axle_index,
                    point: SchematicSlot {
                        row,
                        column: -(left_len - i as i32),
                    },
                });
            }
            // Right group mirrors it: the first entry sits at +1.
            for (i, &position) in axle.right.iter().enumerate() {
                tires.push(PlacedTire {
                    position,
                    axle_index,
                    point: SchematicSlot {
                        row,
                        column: i as i32 + 1,
                    },
                });
            }
            columns = columns.max(axle.left.len().max(axle.right.len()) as u32);
        }

        let rows = topology.axles().len() as u32;
        let c = &self.config;
        let extent = SchematicExtent {
            rows,
            columns_per_side: columns,
            width: 2.0 * c.half_width(columns),
            height: rows.max(1) as f32 * c.row_pitch() - c.row_gap,
        };

        tracing::debug!(tires = tires.len(), rows, "projected schematic layout");
        Ok(Layout::new(tires, extent))
    }
}
