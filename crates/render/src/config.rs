use serde::{Deserialize, Serialize};

/// Errors from render configuration and setup.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("field of view must be at least 1 degree, got {0}")]
    FovOutOfRange(u32),
    #[error("ray step size must be positive, got {0}")]
    StepSizeOutOfRange(f32),
    #[error("max steps must be at least 1")]
    NoStepBudget,
    #[error("screen extent must be nonzero, got {width}x{height}")]
    EmptyScreen { width: u32, height: u32 },
}

/// Render tuning: field of view, march resolution, projection constants,
/// and the screen extent commands are projected into.
///
/// One ray is cast per whole degree of field of view, so `fov_degrees` is
/// also the column count of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Field of view in whole degrees; one column per degree.
    pub fov_degrees: u32,
    /// Ray advance per march iteration, in cell units.
    pub step_size: f32,
    /// March budget per ray. Exhausting it reads as a hit at max render
    /// distance.
    pub max_steps: u32,
    /// Projection numerator: wall half-height is `height_scale / distance`.
    /// A tuned constant, not derived from other fields.
    pub height_scale: f32,
    /// Raw distance divided by this gives the fog shadow level.
    pub shadow_divisor: f32,
    /// Screen extent in pixels.
    pub screen_width: u32,
    pub screen_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 80,
            step_size: 0.01,
            max_steps: 1000,
            height_scale: 25_000.0,
            shadow_divisor: 2.0,
            screen_width: 640,
            screen_height: 480,
        }
    }
}

impl RenderConfig {
    /// Check every field the render loop depends on. Called by
    /// [`crate::FrameRenderer::new`] so an invalid configuration can never
    /// reach the per-column path.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.fov_degrees == 0 {
            return Err(RenderError::FovOutOfRange(self.fov_degrees));
        }
        if self.step_size.is_nan() || self.step_size <= 0.0 {
            return Err(RenderError::StepSizeOutOfRange(self.step_size));
        }
        if self.max_steps == 0 {
            return Err(RenderError::NoStepBudget);
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(RenderError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        Ok(())
    }

    /// Horizontal extent of one column strip, in pixels. Strips abut:
    /// column `c` spans `[c * column_width, (c + 1) * column_width)`.
    pub fn column_width(&self) -> f32 {
        self.screen_width as f32 / self.fov_degrees as f32
    }
}
