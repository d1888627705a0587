//! Rendering core: per-column ray marching, fisheye-corrected projection,
//! and the per-frame command stream.
//!
//! # Invariants
//! - The renderer never mutates the grid or pose; frames derive from them.
//! - Configuration is validated before the first column is cast.
//! - The per-column hot path cannot fault: boundary reads are solid hits
//!   and degenerate distances clamp to an epsilon.

mod caster;
mod config;
mod frame;
mod shade;
mod surface;

pub use caster::{ColumnCaster, RayHit};
pub use config::{RenderConfig, RenderError};
pub use frame::FrameRenderer;
pub use shade::{MIN_DISTANCE, ProjectionShader, RenderCommand};
pub use surface::{DrawSurface, TextSurface};

pub fn crate_info() -> &'static str {
    "gridray-render v0.1.0"
}
