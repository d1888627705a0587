use gridray_common::Rgb;

use crate::caster::RayHit;
use crate::config::RenderConfig;

/// Smallest corrected distance the projection will divide by.
pub const MIN_DISTANCE: f32 = 1e-4;

/// One vertical strip of a frame, ready for a draw surface.
///
/// `top_y` and `bottom_y` are the strip's two screen-space anchors in
/// pixels (y grows downward; `top_y` is the numerically larger anchor).
/// The horizontal extent is implied by the column index and the configured
/// column width, so strips abut exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCommand {
    pub column: u32,
    pub top_y: f32,
    pub bottom_y: f32,
    pub color: Rgb,
}

/// Converts ray hits into screen strips with distance-fog shading.
///
/// Projection anchors the strip ends at `screen_height / 2` and
/// `screen_height / 3`; the asymmetry is part of the renderer's look and
/// deliberately kept.
pub struct ProjectionShader<'a> {
    config: &'a RenderConfig,
}

impl<'a> ProjectionShader<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Project one hit into its strip extent and fog color.
    pub fn project(&self, hit: &RayHit, look_offset: f32) -> RenderCommand {
        let corrected = hit.corrected_distance().max(MIN_DISTANCE);
        let wall_height = self.config.height_scale / corrected;

        let h = self.config.screen_height as f32;
        let top_y = h / 2.0 + look_offset + wall_height;
        let bottom_y = h / 3.0 + look_offset - wall_height;

        // Farther hits fade toward black; the clamp is the entire fog model.
        let shadow = (hit.raw_distance / self.config.shadow_divisor).clamp(0.0, 255.0);
        let level = (255.0 - shadow) as u8;

        RenderCommand {
            column: hit.column,
            top_y,
            bottom_y,
            color: Rgb::gray(level),
        }
    }
}
