//! Shared value types for the gridray workspace.
//!
//! # Invariants
//! - Types here are plain values: no I/O, no global state.
//! - Positions are in cell units; one grid cell spans one unit.

pub mod types;

pub use types::{Pose, Rgb};
