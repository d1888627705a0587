use glam::Vec2;
use gridray_common::Pose;
use gridray_kernel::GridMap;

use crate::config::RenderConfig;

/// The result of marching one column's ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Steps marched before entering a solid cell, or the full budget if
    /// nothing was hit. Proportional to true distance: the step length is
    /// fixed.
    pub raw_distance: f32,
    /// Angular offset from view center, in degrees.
    pub angle_offset_deg: f32,
    /// Screen column this ray belongs to.
    pub column: u32,
}

impl RayHit {
    /// Raw distance scaled by the cosine of the angle offset, removing the
    /// fisheye distortion of off-center rays. Never exceeds the raw
    /// distance; equal to it only for the center column.
    pub fn corrected_distance(&self) -> f32 {
        self.raw_distance * self.angle_offset_deg.to_radians().cos()
    }
}

/// Marches rays across the grid, one per screen column.
///
/// Fixed small-step marching: each iteration advances the ray by
/// `step_size` cells until it enters a solid cell or the step budget runs
/// out. The grid reports out-of-range cells as solid, so leaving the grid
/// is an ordinary hit rather than a fault.
pub struct ColumnCaster<'a> {
    grid: &'a GridMap,
    config: &'a RenderConfig,
}

impl<'a> ColumnCaster<'a> {
    pub fn new(grid: &'a GridMap, config: &'a RenderConfig) -> Self {
        Self { grid, config }
    }

    /// Cast the ray for one column from the given pose.
    pub fn cast(&self, pose: &Pose, column: u32) -> RayHit {
        let angle_offset_deg = column as f32 - self.config.fov_degrees as f32 / 2.0;
        let rot = pose.heading + angle_offset_deg.to_radians();
        let step = self.config.step_size * Vec2::new(rot.cos(), rot.sin());

        let mut point = pose.position;
        let mut steps = 0u32;
        while steps < self.config.max_steps {
            point += step;
            steps += 1;
            if self.grid.solid_at(point) {
                break;
            }
        }

        RayHit {
            raw_distance: steps as f32,
            angle_offset_deg,
            column,
        }
    }
}
