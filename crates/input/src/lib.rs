//! Input intents: one shared vocabulary for every driver.
//!
//! # Invariants
//! - The kernel consumes intents, never raw device events.
//! - Desktop and headless drivers produce the same snapshot type.

pub mod intent;

pub use intent::IntentSnapshot;

pub fn crate_info() -> &'static str {
    "gridray-input v0.1.0"
}
