use gridray_common::Pose;
use gridray_kernel::GridMap;

use crate::caster::ColumnCaster;
use crate::config::{RenderConfig, RenderError};
use crate::shade::{ProjectionShader, RenderCommand};

/// Walks every screen column through the caster and shader, producing one
/// frame as a lazy command stream.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    config: RenderConfig,
}

impl FrameRenderer {
    /// Build a renderer, rejecting invalid configuration before any frame
    /// can start.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        tracing::debug!(
            fov = config.fov_degrees,
            max_steps = config.max_steps,
            step_size = config.step_size,
            "frame renderer ready"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Produce one frame as a lazy stream of strip commands, one per
    /// column, consumed immediately by a draw surface. The stream borrows
    /// the pose and grid for the duration of the frame.
    pub fn render_frame<'a>(
        &'a self,
        pose: &'a Pose,
        grid: &'a GridMap,
    ) -> impl Iterator<Item = RenderCommand> + 'a {
        let caster = ColumnCaster::new(grid, &self.config);
        let shader = ProjectionShader::new(&self.config);
        (0..self.config.fov_degrees).map(move |column| {
            let hit = caster.cast(pose, column);
            shader.project(&hit, pose.look_offset)
        })
    }
}
