use std::fmt::Write;

use crate::shade::RenderCommand;

/// Renderer-agnostic draw surface.
///
/// The core emits strip commands; a surface turns them into pixels (or
/// text). Surfaces never read the grid or pose — a frame's command stream
/// is their entire input.
pub trait DrawSurface {
    /// The output produced from one frame of commands.
    type Output;

    /// Consume one frame's command stream.
    fn draw(&mut self, commands: impl Iterator<Item = RenderCommand>) -> Self::Output;
}

/// Debug text surface — workaround for driving the pipeline headless.
///
/// Formats a command stream into a per-column table. Useful for CLI
/// output, logging, and testing the frame pipeline without a window.
#[derive(Debug, Default)]
pub struct TextSurface;

impl TextSurface {
    pub fn new() -> Self {
        Self
    }
}

impl DrawSurface for TextSurface {
    type Output = String;

    fn draw(&mut self, commands: impl Iterator<Item = RenderCommand>) -> String {
        let mut out = String::from("col     top_y  bottom_y  gray\n");
        let mut count = 0usize;
        for cmd in commands {
            let _ = writeln!(
                out,
                "{:>3}  {:>8.1}  {:>8.1}  {:>4}",
                cmd.column, cmd.top_y, cmd.bottom_y, cmd.color.r
            );
            count += 1;
        }
        let _ = writeln!(out, "{count} columns");
        out
    }
}
