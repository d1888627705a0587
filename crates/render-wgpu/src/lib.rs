//! wgpu render backend for the column-strip command stream.
//!
//! # Invariants
//! - The backend consumes render commands only; it never reads the grid
//!   or pose.
//! - Vertex expansion is pure and testable without a device.

mod shaders;
mod strip;

pub use strip::StripRenderer;

pub fn crate_info() -> &'static str {
    "gridray-render-wgpu v0.1.0"
}
