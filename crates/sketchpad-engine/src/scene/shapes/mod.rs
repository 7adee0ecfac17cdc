mod circle;
mod point;
mod triangle;

pub use circle::Circle;
pub use point::Point;
pub use triangle::Triangle;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{RenderError, RenderSurface};

/// Divisor mapping the abstract `size` unit to NDC extent for triangles and circles.
///
/// A size-10 circle has radius `10 / 150` in NDC.
pub const SIZE_SCALE: f32 = 150.0;

/// A placed shape.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here and in [`ShapeKind`]
/// - route it through [`Shape::render`]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Triangle(Triangle),
    Circle(Circle),
}

/// Variant tag without geometry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Point,
    Triangle,
    Circle,
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        match self {
            Shape::Point(s) => s.position(),
            Shape::Triangle(s) => s.position(),
            Shape::Circle(s) => s.position(),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        match self {
            Shape::Point(s) => s.color(),
            Shape::Triangle(s) => s.color(),
            Shape::Circle(s) => s.color(),
        }
    }

    /// Issues this shape's draw call.
    ///
    /// On error nothing was submitted for this shape; surface uniforms may have changed.
    pub fn render(&self, surface: &mut dyn RenderSurface) -> Result<(), RenderError> {
        match self {
            Shape::Point(s) => s.render(surface),
            Shape::Triangle(s) => s.render(surface),
            Shape::Circle(s) => s.render(surface),
        }
    }
}

impl From<Point> for Shape {
    fn from(s: Point) -> Self {
        Shape::Point(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Shape::Triangle(s)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}
