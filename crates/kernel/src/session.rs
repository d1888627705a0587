use gridray_common::Pose;
use gridray_input::IntentSnapshot;

use crate::collision::CollisionFilter;
use crate::grid::GridMap;
use crate::motion::{MotionIntegrator, MotionTuning};

/// Default player collision radius in cell units.
pub const PLAYER_RADIUS: f32 = 0.2;

/// Errors from session construction.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("spawn position ({x:.2}, {y:.2}) is solid or outside the grid")]
    SpawnBlocked { x: f32, y: f32 },
}

/// One play session: the level grid, the player pose, and the motion
/// pipeline that advances it.
///
/// Pose mutation is strictly sequential: integrate, then resolve, once per
/// frame. Renderers read the pose and grid, never write them.
#[derive(Debug)]
pub struct Session {
    grid: GridMap,
    pose: Pose,
    integrator: MotionIntegrator,
    collision: CollisionFilter,
    frame: u64,
}

impl Session {
    /// Start a session with default motion tuning.
    pub fn new(grid: GridMap, spawn: Pose) -> Result<Self, SessionError> {
        Self::with_tuning(grid, spawn, MotionTuning::default())
    }

    /// Start a session with explicit motion tuning.
    ///
    /// The spawn cell must be open and inside the grid; the render loop
    /// never starts from an invalid pose.
    pub fn with_tuning(
        grid: GridMap,
        spawn: Pose,
        tuning: MotionTuning,
    ) -> Result<Self, SessionError> {
        if !grid.contains(spawn.position) || grid.solid_at(spawn.position) {
            return Err(SessionError::SpawnBlocked {
                x: spawn.position.x,
                y: spawn.position.y,
            });
        }
        Ok(Self {
            grid,
            pose: spawn,
            integrator: MotionIntegrator::new(tuning),
            collision: CollisionFilter::new(PLAYER_RADIUS),
            frame: 0,
        })
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Frames advanced since the session started.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance one frame: integrate intents over `dt_ticks`, then clamp
    /// the result against the grid.
    pub fn advance(&mut self, intent: &IntentSnapshot, dt_ticks: f32) {
        let candidate = self.integrator.integrate(self.pose, intent, dt_ticks);
        self.pose = self.collision.resolve(self.pose, candidate, &self.grid);
        self.frame += 1;
        tracing::trace!(
            frame = self.frame,
            x = self.pose.position.x,
            y = self.pose.position.y,
            heading = self.pose.heading,
            "session advanced"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_in_open_cell_succeeds() {
        let session = Session::new(GridMap::demo(), Pose::at(2.0, 2.0));
        assert!(session.is_ok());
    }

    #[test]
    fn spawn_in_wall_is_rejected() {
        let err = Session::new(GridMap::demo(), Pose::at(0.5, 0.5)).unwrap_err();
        assert!(matches!(err, SessionError::SpawnBlocked { .. }));
    }

    #[test]
    fn spawn_outside_grid_is_rejected() {
        let err = Session::new(GridMap::demo(), Pose::at(-3.0, 2.0)).unwrap_err();
        assert!(matches!(err, SessionError::SpawnBlocked { .. }));
    }

    #[test]
    fn advance_counts_frames() {
        let mut session = Session::new(GridMap::demo(), Pose::at(2.0, 2.0)).unwrap();
        let idle = IntentSnapshot::default();
        session.advance(&idle, 1.0);
        session.advance(&idle, 1.0);
        assert_eq!(session.frame(), 2);
        assert_eq!(session.pose(), Pose::at(2.0, 2.0));
    }

    #[test]
    fn pose_stays_inside_grid_under_sustained_input() {
        let mut session = Session::new(GridMap::bordered_box(8, 8).unwrap(), Pose::at(4.0, 4.0))
            .unwrap();
        let forward = IntentSnapshot {
            move_forward: true,
            sprint: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            session.advance(&forward, 1.0);
            let p = session.pose().position;
            assert!(session.grid().contains(p));
            assert!(!session.grid().solid_at(p));
        }
    }

    #[test]
    fn walking_into_a_wall_slides_along_it() {
        // Head slightly off-axis toward the x=9 wall: x eventually blocks,
        // y keeps accumulating.
        let mut session = Session::new(
            GridMap::bordered_box(10, 10).unwrap(),
            Pose::facing(8.0, 4.0, 0.3),
        )
        .unwrap();
        let intent = IntentSnapshot {
            move_forward: true,
            ..Default::default()
        };
        let start_y = session.pose().position.y;
        for _ in 0..300 {
            session.advance(&intent, 1.0);
        }
        let end = session.pose().position;
        assert!(end.x < 8.8 + 1e-3, "x must stop at the wall, got {}", end.x);
        assert!(end.y > start_y + 1.0, "y must keep sliding, got {}", end.y);
    }
}
