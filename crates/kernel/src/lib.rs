//! Session kernel: level grid, player pose, and the per-frame motion
//! pipeline.
//!
//! # Invariants
//! - The grid is immutable for the lifetime of a session.
//! - The pose is mutated exactly once per frame: integrate, then resolve.
//! - Out-of-range grid reads are impossible; the boundary reads as solid.

pub mod collision;
pub mod grid;
pub mod motion;
pub mod session;

pub use collision::CollisionFilter;
pub use grid::{GridError, GridMap};
pub use motion::{MotionIntegrator, MotionTuning};
pub use session::{PLAYER_RADIUS, Session, SessionError};
