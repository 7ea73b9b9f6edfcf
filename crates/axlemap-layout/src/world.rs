//! 3D world projection: wheel centers in meters for an interactive scene.
//!
//! The vehicle faces +z with y up. Left tires get negative x, right tires
//! positive x. The front axle sits at `front_axle_z`, and every rear axle
//! slot steps back by `axle_spacing`.

use axlemap_core::fixed::{Fixed64, fixed64_to_f32, fixed64_to_f64};
use axlemap_core::id::PositionId;
use axlemap_core::topology::{AxleKind, Mount, Side, Topology};
use serde::{Deserialize, Serialize};

use crate::{Layout, LayoutConfigError, LayoutProjector, PlacedTire, ProjectionError};
use crate::{require_fixed, require_non_negative, require_positive};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A wheel center in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: Fixed64,
    pub y: Fixed64,
    pub z: Fixed64,
}

impl WorldPoint {
    /// `[x, y, z]` at the precision scene graphs take vertex data in.
    pub fn to_f32_array(&self) -> [f32; 3] {
        [
            fixed64_to_f32(self.x),
            fixed64_to_f32(self.y),
            fixed64_to_f32(self.z),
        ]
    }
}

/// World-space constants, all in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub front_axle_z: f64,
    pub axle_spacing: f64,
    /// Height of every wheel center (the tire radius on flat ground).
    pub ground_y: f64,
    pub tire_width: f64,
    pub front_track_x: f64,
    pub rear_track_x: f64,
    pub outer_x: f64,
    pub inner_x: f64,
    /// Chassis length ahead of the front axle.
    pub front_overhang: f64,
    /// Chassis length behind the last axle.
    pub rear_margin: f64,
    pub min_chassis_length: f64,
    pub chassis_half_width: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            front_axle_z: 2.0,
            axle_spacing: 1.6,
            ground_y: 0.5,
            tire_width: 0.3,
            front_track_x: 1.0,
            rear_track_x: 1.0,
            outer_x: 1.2,
            inner_x: 0.8,
            front_overhang: 1.2,
            rear_margin: 0.8,
            min_chassis_length: 4.0,
            chassis_half_width: 0.6,
        }
    }
}

impl WorldConfig {
    /// Reject constants that would let two tires overlap or that do not fit
    /// the fixed-point coordinate range.
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        require_positive("axle_spacing", self.axle_spacing)?;
        require_positive("ground_y", self.ground_y)?;
        require_positive("tire_width", self.tire_width)?;
        require_positive("front_track_x", self.front_track_x)?;
        require_positive("rear_track_x", self.rear_track_x)?;
        require_positive("outer_x", self.outer_x)?;
        require_positive("inner_x", self.inner_x)?;
        require_positive("min_chassis_length", self.min_chassis_length)?;
        require_positive("chassis_half_width", self.chassis_half_width)?;
        require_non_negative("front_overhang", self.front_overhang)?;
        require_non_negative("rear_margin", self.rear_margin)?;
        Resolved::try_from(self)?;

        let diameter = 2.0 * self.ground_y;
        if self.axle_spacing < diameter {
            return Err(LayoutConfigError::Overlap {
                detail: format!(
                    "axle_spacing {} is shorter than the tire diameter {diameter}",
                    self.axle_spacing
                ),
            });
        }
        if self.outer_x - self.inner_x < self.tire_width {
            return Err(LayoutConfigError::Overlap {
                detail: format!(
                    "outer_x {} and inner_x {} are closer than tire_width {}",
                    self.outer_x, self.inner_x, self.tire_width
                ),
            });
        }
        // Mirrored innermost tires must clear each other across the centerline.
        let min_track = self.inner_x.min(self.front_track_x).min(self.rear_track_x);
        if 2.0 * min_track < self.tire_width {
            return Err(LayoutConfigError::Overlap {
                detail: format!(
                    "track {min_track} leaves no room for tire_width {} at the centerline",
                    self.tire_width
                ),
            });
        }
        Ok(())
    }
}

/// Chassis bounds along z plus its half width along x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldExtent {
    pub front_z: Fixed64,
    pub rear_z: Fixed64,
    pub length: Fixed64,
    pub half_width: Fixed64,
}

impl WorldExtent {
    /// Midpoint of the chassis along z, where a renderer centers its mesh.
    pub fn center_z(&self) -> Fixed64 {
        (self.front_z + self.rear_z) / 2
    }
}

// ---------------------------------------------------------------------------
// WorldProjector
// ---------------------------------------------------------------------------

/// Config resolved to fixed point once, so every projection reuses the
/// exact same constants.
#[derive(Debug, Clone, Copy)]
struct Resolved {
    front_axle_z: Fixed64,
    axle_spacing: Fixed64,
    ground_y: Fixed64,
    half_tire_width: Fixed64,
    front_track_x: Fixed64,
    rear_track_x: Fixed64,
    outer_x: Fixed64,
    inner_x: Fixed64,
    front_overhang: Fixed64,
    rear_margin: Fixed64,
    min_chassis_length: Fixed64,
    chassis_half_width: Fixed64,
}

impl TryFrom<&WorldConfig> for Resolved {
    type Error = LayoutConfigError;

    fn try_from(c: &WorldConfig) -> Result<Self, LayoutConfigError> {
        Ok(Self {
            front_axle_z: require_fixed("front_axle_z", c.front_axle_z)?,
            axle_spacing: require_fixed("axle_spacing", c.axle_spacing)?,
            ground_y: require_fixed("ground_y", c.ground_y)?,
            half_tire_width: require_fixed("tire_width", c.tire_width / 2.0)?,
            front_track_x: require_fixed("front_track_x", c.front_track_x)?,
            rear_track_x: require_fixed("rear_track_x", c.rear_track_x)?,
            outer_x: require_fixed("outer_x", c.outer_x)?,
            inner_x: require_fixed("inner_x", c.inner_x)?,
            front_overhang: require_fixed("front_overhang", c.front_overhang)?,
            rear_margin: require_fixed("rear_margin", c.rear_margin)?,
            min_chassis_length: require_fixed("min_chassis_length", c.min_chassis_length)?,
            chassis_half_width: require_fixed("chassis_half_width", c.chassis_half_width)?,
        })
    }
}

/// Places wheel centers in world space.
#[derive(Debug, Clone, Copy)]
pub struct WorldProjector {
    config: WorldConfig,
    resolved: Resolved,
}

impl Default for WorldProjector {
    fn default() -> Self {
        Self::new(WorldConfig::default()).expect("default world config is valid")
    }
}

impl WorldProjector {
    pub fn new(config: WorldConfig) -> Result<Self, LayoutConfigError> {
        config.validate()?;
        Ok(Self {
            resolved: Resolved::try_from(&config)?,
            config,
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// z of the `slot`-th rear axle slot (0 is the first behind the front),
    /// or `None` once the chain runs past the coordinate range.
    fn rear_z(&self, slot: usize) -> Option<Fixed64> {
        let r = &self.resolved;
        let steps = Fixed64::checked_from_num(slot as u64 + 1)?;
        r.front_axle_z.checked_sub(r.axle_spacing.checked_mul(steps)?)
    }

    fn x_offset(&self, kind: AxleKind, side: Side, mount: Mount) -> Fixed64 {
        let r = &self.resolved;
        let magnitude = match (kind, mount) {
            (_, Mount::Spare) => return Fixed64::ZERO,
            (AxleKind::Steer, _) => r.front_track_x,
            (_, Mount::Outer) => r.outer_x,
            (_, Mount::Inner) => r.inner_x,
            (_, Mount::Single) => r.rear_track_x,
        };
        match side {
            Side::Left => -magnitude,
            Side::Right => magnitude,
        }
    }

    /// Map a ground-plane tap (x, z) to the nearest wheel within one tire
    /// radius, if any.
    pub fn pick(
        &self,
        layout: &Layout<WorldPoint, WorldExtent>,
        x: f64,
        z: f64,
    ) -> Option<PositionId> {
        let radius = self.config.ground_y;
        layout
            .tires()
            .iter()
            .map(|t| {
                let dx = fixed64_to_f64(t.point.x) - x;
                let dz = fixed64_to_f64(t.point.z) - z;
                (t.position, dx * dx + dz * dz)
            })
            .filter(|&(_, d2)| d2 <= radius * radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(position, _)| position)
    }
}

impl LayoutProjector for WorldProjector {
    type Point = WorldPoint;
    type Extent = WorldExtent;

    fn project(
        &self,
        topology: &Topology,
    ) -> Result<Layout<WorldPoint, WorldExtent>, ProjectionError> {
        let r = &self.resolved;
        let mut tires = Vec::with_capacity(topology.tire_count().get() as usize);
        let mut last_axle_z = r.front_axle_z;
        let mut max_x = Fixed64::ZERO;
        let mut rear_slot = 0;

        for (axle_index, axle) in topology.axles().iter().enumerate() {
            let z = if axle.kind == AxleKind::Steer {
                r.front_axle_z
            } else {
                let z = self
                    .rear_z(rear_slot)
                    .ok_or(ProjectionError::AxleOutOfRange { axle_index })?;
                rear_slot += 1;
                z
            };
            last_axle_z = z;

            for position in axle.positions() {
                let Some((side, mount)) = axle.mount_of(position) else {
                    continue;
                };
                let x = self.x_offset(axle.kind, side, mount);
                max_x = max_x.max(x.abs());
                tires.push(PlacedTire {
                    position,
                    axle_index,
                    point: WorldPoint { x, y: r.ground_y, z },
                });
            }
        }

        let out_of_range = ProjectionError::ExtentOutOfRange;
        let front_z = r
            .front_axle_z
            .checked_add(r.front_overhang)
            .ok_or(out_of_range)?;
        // The chassis reaches past the last axle, but never shorter than
        // the minimum length.
        let rear_z = last_axle_z
            .checked_sub(r.rear_margin)
            .zip(front_z.checked_sub(r.min_chassis_length))
            .map(|(behind_last, shortest)| behind_last.min(shortest))
            .ok_or(out_of_range)?;
        let half_width = if tires.is_empty() {
            r.chassis_half_width
        } else {
            let outer_edge = max_x.checked_add(r.half_tire_width).ok_or(out_of_range)?;
            r.chassis_half_width.max(outer_edge)
        };
        let extent = WorldExtent {
            front_z,
            rear_z,
            length: front_z.checked_sub(rear_z).ok_or(out_of_range)?,
            half_width,
        };

        tracing::debug!(
            tires = tires.len(),
            rear_slots = rear_slot,
            chassis_length = fixed64_to_f64(extent.length),
            "projected world layout"
        );
        Ok(Layout::new(tires, extent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axlemap_core::fixed::f64_to_fixed64;
    use axlemap_core::test_utils::*;

    fn fx(v: f64) -> Fixed64 {
        f64_to_fixed64(v)
    }

    fn point_of(layout: &Layout<WorldPoint, WorldExtent>, p: u32) -> WorldPoint {
        layout.get(pos(p)).unwrap().point
    }

    // -----------------------------------------------------------------------
    // Placement
    // -----------------------------------------------------------------------

    #[test]
    fn front_axle_at_fixed_offsets() {
        let layout = WorldProjector::default().project(&topology(6)).unwrap();
        let left = point_of(&layout, 1);
        let right = point_of(&layout, 2);
        assert_eq!((left.x, left.y, left.z), (fx(-1.0), fx(0.5), fx(2.0)));
        assert_eq!((right.x, right.y, right.z), (fx(1.0), fx(0.5), fx(2.0)));
    }

    #[test]
    fn dual_axle_outer_is_wider_than_inner() {
        let layout = WorldProjector::default().project(&topology(6)).unwrap();
        let xs: Vec<Fixed64> = (3..=6).map(|p| point_of(&layout, p).x).collect();
        assert_eq!(xs, vec![fx(-1.2), fx(-0.8), fx(0.8), fx(1.2)]);
        let rear_z = fx(2.0) - fx(1.6);
        assert!((3..=6).all(|p| point_of(&layout, p).z == rear_z));
    }

    #[test]
    fn rear_axles_step_back_by_spacing() {
        let layout = WorldProjector::default().project(&topology(10)).unwrap();
        let spacing = fx(1.6);
        assert_eq!(point_of(&layout, 3).z, fx(2.0) - spacing);
        assert_eq!(point_of(&layout, 7).z, fx(2.0) - spacing * Fixed64::from_num(2));
    }

    #[test]
    fn spare_is_centered_on_its_own_slot() {
        let layout = WorldProjector::default().project(&topology(7)).unwrap();
        let spare = point_of(&layout, 7);
        assert_eq!(spare.x, Fixed64::ZERO);
        assert!(spare.z < point_of(&layout, 3).z);
    }

    #[test]
    fn single_tire_sits_in_first_rear_slot() {
        let layout = WorldProjector::default().project(&topology(1)).unwrap();
        let p = point_of(&layout, 1);
        assert_eq!(p.x, Fixed64::ZERO);
        assert_eq!(p.z, fx(2.0) - fx(1.6));
    }

    #[test]
    fn points_are_distinct() {
        for n in 0..=40 {
            let layout = WorldProjector::default().project(&topology(n)).unwrap();
            assert!(layout.has_distinct_points(), "overlap for {n} tires");
        }
    }

    #[test]
    fn f32_array_matches_fixed_coordinates() {
        let layout = WorldProjector::default().project(&topology(6)).unwrap();
        assert_eq!(point_of(&layout, 3).to_f32_array(), [-1.2f32, 0.5, 0.4]);
        assert_eq!(point_of(&layout, 2).to_f32_array(), [1.0f32, 0.5, 2.0]);
    }

    // -----------------------------------------------------------------------
    // Coordinate range
    // -----------------------------------------------------------------------

    fn long_spacing() -> WorldProjector {
        WorldProjector::new(WorldConfig {
            axle_spacing: 1e8,
            ..WorldConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn axle_chain_past_range_is_reported() {
        // 120 tires is a front axle plus 30 rear slots; slot 21 would sit
        // at 2 - 22e8, below the Q32.32 floor.
        let err = long_spacing().project(&topology(120)).unwrap_err();
        assert_eq!(err, ProjectionError::AxleOutOfRange { axle_index: 22 });
    }

    #[test]
    fn long_spacing_never_stacks_axles() {
        let projector = long_spacing();
        for n in 0..=120 {
            if let Ok(layout) = projector.project(&topology(n)) {
                assert!(layout.has_distinct_points(), "overlap for {n} tires");
            }
        }
        let short = projector.project(&topology(10)).unwrap();
        assert_eq!(point_of(&short, 7).z, fx(2.0) - fx(2e8));
    }

    #[test]
    fn extent_past_range_is_reported() {
        let projector = WorldProjector::new(WorldConfig {
            front_axle_z: 2.0e9,
            front_overhang: 2.0e8,
            ..WorldConfig::default()
        })
        .unwrap();
        assert_eq!(
            projector.project(&topology(6)).unwrap_err(),
            ProjectionError::ExtentOutOfRange
        );
    }

    // -----------------------------------------------------------------------
    // Extent
    // -----------------------------------------------------------------------

    #[test]
    fn zero_tires_has_minimum_chassis() {
        let layout = WorldProjector::default().project(&topology(0)).unwrap();
        assert!(layout.is_empty());
        let e = layout.extent();
        assert_eq!(e.length, fx(4.0));
        assert_eq!(e.front_z, fx(2.0) + fx(1.2));
        assert_eq!(e.half_width, fx(0.6));
    }

    #[test]
    fn chassis_reaches_last_axle_plus_margin() {
        let layout = WorldProjector::default().project(&topology(14)).unwrap();
        let last_z = point_of(&layout, 14).z;
        let e = layout.extent();
        assert_eq!(e.rear_z, last_z - fx(0.8));
        assert_eq!(e.length, e.front_z - e.rear_z);
        assert!(e.length > fx(4.0));
    }

    #[test]
    fn chassis_grows_with_rear_slots() {
        let projector = WorldProjector::default();
        let lengths: Vec<Fixed64> = [6, 10, 14, 18]
            .iter()
            .map(|&n| projector.project(&topology(n)).unwrap().extent().length)
            .collect();
        assert!(lengths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn half_width_covers_outer_tires() {
        let layout = WorldProjector::default().project(&topology(6)).unwrap();
        assert_eq!(layout.extent().half_width, fx(1.2) + fx(0.15));
    }

    #[test]
    fn center_z_is_midpoint() {
        let layout = WorldProjector::default().project(&topology(0)).unwrap();
        let e = layout.extent();
        assert_eq!(e.center_z(), e.front_z - fx(2.0));
    }

    // -----------------------------------------------------------------------
    // Hit testing
    // -----------------------------------------------------------------------

    #[test]
    fn pick_nearest_wheel() {
        let projector = WorldProjector::default();
        let layout = projector.project(&topology(6)).unwrap();
        for tire in layout.tires() {
            let x = fixed64_to_f64(tire.point.x) + 0.05;
            let z = fixed64_to_f64(tire.point.z) - 0.05;
            assert_eq!(projector.pick(&layout, x, z), Some(tire.position));
        }
    }

    #[test]
    fn pick_far_from_any_wheel_misses() {
        let projector = WorldProjector::default();
        let layout = projector.project(&topology(6)).unwrap();
        assert_eq!(projector.pick(&layout, 0.0, 10.0), None);
    }

    // -----------------------------------------------------------------------
    // Config
    // -----------------------------------------------------------------------

    #[test]
    fn default_config_is_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn overlapping_twins_rejected() {
        let err = WorldProjector::new(WorldConfig {
            inner_x: 1.1,
            ..WorldConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, LayoutConfigError::Overlap { .. }));
    }

    #[test]
    fn short_axle_spacing_rejected() {
        let err = WorldProjector::new(WorldConfig {
            axle_spacing: 0.9,
            ..WorldConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, LayoutConfigError::Overlap { .. }));
    }

    #[test]
    fn values_past_fixed_range_rejected() {
        let err = WorldProjector::new(WorldConfig {
            front_axle_z: 1e12,
            ..WorldConfig::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            LayoutConfigError::OutOfRange {
                field: "front_axle_z",
                value: 1e12
            }
        );

        let err = WorldConfig {
            front_axle_z: f64::NAN,
            ..WorldConfig::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(
            err,
            LayoutConfigError::OutOfRange {
                field: "front_axle_z",
                ..
            }
        ));

        let err = WorldConfig {
            outer_x: 5e9,
            ..WorldConfig::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(
            err,
            LayoutConfigError::OutOfRange {
                field: "outer_x",
                ..
            }
        ));
    }

    #[test]
    fn negative_spacing_rejected() {
        let err = WorldProjector::new(WorldConfig {
            axle_spacing: -1.0,
            ..WorldConfig::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            LayoutConfigError::NonPositive {
                field: "axle_spacing",
                ..
            }
        ));
    }
}
