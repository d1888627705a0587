use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Player pose: continuous position on the grid plane, view heading, and
/// vertical look offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in cell units.
    pub position: Vec2,
    /// View heading in radians. Zero faces +X.
    pub heading: f32,
    /// Vertical pan in screen pixels, positive looks up.
    pub look_offset: f32,
}

impl Pose {
    /// Pose at the given position, facing +X, looking level.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            heading: 0.0,
            look_offset: 0.0,
        }
    }

    /// Pose at the given position with an explicit heading.
    pub fn facing(x: f32, y: f32, heading: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            heading,
            look_offset: 0.0,
        }
    }

    /// Unit direction of the current heading.
    pub fn forward(&self) -> Vec2 {
        Vec2::new(self.heading.cos(), self.heading.sin())
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniform gray at the given level.
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Components scaled to [0, 1] floats, for GPU upload.
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}
