use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Reference simulation rate. Per-tick motion constants assume one tick at
/// this frame rate.
pub const REFERENCE_HZ: f32 = 60.0;

/// Converts real elapsed time into ticks at the reference rate.
///
/// A dt of 1.0 means exactly one reference frame elapsed, so code written
/// against per-tick constants runs at the same world speed regardless of
/// the actual frame rate. The caller owns the clock and passes elapsed
/// durations in.
#[derive(Debug, Clone, Copy)]
pub struct TickScale {
    reference_hz: f32,
}

impl Default for TickScale {
    fn default() -> Self {
        Self::new(REFERENCE_HZ)
    }
}

impl TickScale {
    pub fn new(reference_hz: f32) -> Self {
        assert!(reference_hz > 0.0, "reference rate must be positive");
        Self { reference_hz }
    }

    pub fn reference_hz(&self) -> f32 {
        self.reference_hz
    }

    /// Elapsed real time expressed in reference-rate ticks.
    pub fn dt_ticks(&self, elapsed: Duration) -> f32 {
        elapsed.as_secs_f32() * self.reference_hz
    }
}

/// Frame pacing configuration, including the debug slow-motion override.
///
/// The override is a field threaded into the frame loop by whoever builds
/// the configuration; there is no process-wide speed state to toggle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Target presentation rate in frames per second.
    pub target_hz: f32,
    /// Debug slow-motion rate. When set, the frame loop paces to this
    /// rate instead of `target_hz`.
    pub slow_motion_hz: Option<f32>,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            target_hz: REFERENCE_HZ,
            slow_motion_hz: None,
        }
    }
}

impl PacingConfig {
    /// The rate the frame loop should pace to.
    pub fn effective_hz(&self) -> f32 {
        self.slow_motion_hz.unwrap_or(self.target_hz)
    }

    /// Duration of one frame at the effective rate.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.effective_hz())
    }
}
