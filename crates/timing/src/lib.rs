//! Timing: tick scaling, frame pacing, and frame-time instrumentation.
//!
//! # Invariants
//! - No ambient clock: callers measure elapsed time and pass it in.
//! - Pacing overrides are explicit configuration, never process state.

mod pace;
mod stats;

pub use pace::{PacingConfig, REFERENCE_HZ, TickScale};
pub use stats::{FrameStats, FrameTimer};

pub fn crate_info() -> &'static str {
    "gridray-timing v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("timing"));
    }
}
