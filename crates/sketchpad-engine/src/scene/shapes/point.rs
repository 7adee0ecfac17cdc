use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{draw_vertices, Primitive, RenderError, RenderSurface};
use crate::scene::error::{check_size, ShapeError};

/// A single square point sprite.
///
/// Holds no vertex buffer; its position is uploaded at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    position: Vec2,
    color: Color,
    /// Diameter in logical pixels.
    size: f32,
}

impl Point {
    pub fn new(position: Vec2, color: Color, size: f32) -> Result<Self, ShapeError> {
        Ok(Self { position, color, size: check_size(size)? })
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) -> Result<(), RenderError> {
        surface.set_fill_color(self.color);
        surface.set_point_size(self.size);
        draw_vertices(surface, Primitive::Points, &[self.position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::GeometryRecorder;

    #[test]
    fn renders_one_point_with_size_uniform() {
        let p = Point::new(Vec2::new(0.5, -0.5), Color::black(), 12.0).unwrap();
        let mut rec = GeometryRecorder::new();
        p.render(&mut rec).unwrap();

        let b = &rec.batches()[0];
        assert_eq!(b.primitive, Primitive::Points);
        assert_eq!(b.point_size, 12.0);
        assert_eq!(b.vertices, vec![Vec2::new(0.5, -0.5)]);
    }

    #[test]
    fn rejects_non_positive_size() {
        assert!(Point::new(Vec2::zero(), Color::black(), 0.0).is_err());
        assert!(Point::new(Vec2::zero(), Color::black(), f32::NAN).is_err());
    }
}
