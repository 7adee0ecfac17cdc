use crate::paint::Color;
use crate::render::DEFAULT_GEOMETRY_BUDGET;

/// Canvas configuration.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Background the surface is cleared to each frame.
    pub clear_color: Color,

    /// Whether the picture is visible before any input.
    pub picture_visible: bool,

    /// Maximum vertices buffered per repaint. Shapes past it fail to draw.
    pub geometry_budget: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::black(),
            picture_visible: false,
            geometry_budget: DEFAULT_GEOMETRY_BUDGET,
        }
    }
}
