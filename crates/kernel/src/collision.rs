use glam::Vec2;
use gridray_common::Pose;

use crate::grid::GridMap;

/// Clamps candidate motion so a disc of `radius` around the player never
/// enters a solid cell.
///
/// The x and y displacements are tested independently: a wall ahead on one
/// axis rejects only that axis's displacement, so motion slides along walls
/// instead of sticking. Probes outside the grid read solid, which also
/// keeps the pose inside the grid extent.
#[derive(Debug, Clone, Copy)]
pub struct CollisionFilter {
    radius: f32,
}

impl CollisionFilter {
    pub fn new(radius: f32) -> Self {
        assert!(radius >= 0.0, "radius must be non-negative");
        Self { radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Resolve a candidate pose against the grid.
    ///
    /// Returns the candidate with any blocked axis displacement replaced by
    /// the previous coordinate. Heading and look offset pass through
    /// untouched.
    pub fn resolve(&self, previous: Pose, candidate: Pose, grid: &GridMap) -> Pose {
        let prev = previous.position;
        let want = candidate.position;
        let dx = want.x - prev.x;
        let dy = want.y - prev.y;

        // Probe the disc's leading edge along each axis of travel.
        let x = if dx != 0.0 && grid.solid_at(Vec2::new(want.x + self.radius * dx.signum(), prev.y))
        {
            prev.x
        } else {
            want.x
        };
        let y = if dy != 0.0 && grid.solid_at(Vec2::new(prev.x, want.y + self.radius * dy.signum()))
        {
            prev.y
        } else {
            want.y
        };

        Pose {
            position: Vec2::new(x, y),
            ..candidate
        }
    }
}
