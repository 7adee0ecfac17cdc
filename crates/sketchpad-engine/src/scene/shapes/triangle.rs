use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{draw_vertices, Primitive, RenderError, RenderSurface};
use crate::scene::error::{check_size, ShapeError};

use super::SIZE_SCALE;

/// A filled triangle.
///
/// Stamped triangles are isosceles and centered on `position`; picture triangles
/// carry arbitrary vertices and use their centroid as `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    position: Vec2,
    color: Color,
    vertices: [Vec2; 3],
}

impl Triangle {
    /// Builds the stamp triangle: apex at `+d` above `position`, base corners at `±d`
    /// horizontally and `-d` vertically, where `d = size / SIZE_SCALE`.
    pub fn new(position: Vec2, color: Color, size: f32) -> Result<Self, ShapeError> {
        let d = check_size(size)? / SIZE_SCALE;
        let vertices = [
            Vec2::new(position.x, position.y + d),
            Vec2::new(position.x - d, position.y - d),
            Vec2::new(position.x + d, position.y - d),
        ];
        Ok(Self { position, color, vertices })
    }

    /// Builds a triangle from explicit vertices.
    pub fn from_vertices(vertices: [Vec2; 3], color: Color) -> Self {
        let position = (vertices[0] + vertices[1] + vertices[2]) / 3.0;
        Self { position, color, vertices }
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
    pub fn vertices(&self) -> &[Vec2; 3] {
        &self.vertices
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) -> Result<(), RenderError> {
        surface.set_fill_color(self.color);
        draw_vertices(surface, Primitive::Triangles, &self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::GeometryRecorder;

    fn chebyshev(a: Vec2, b: Vec2) -> f32 {
        (a.x - b.x).abs().max((a.y - b.y).abs())
    }

    fn signed_area(v: &[Vec2; 3]) -> f32 {
        0.5 * ((v[1].x - v[0].x) * (v[2].y - v[0].y) - (v[2].x - v[0].x) * (v[1].y - v[0].y))
    }

    #[test]
    fn vertices_sit_at_chebyshev_distance_d() {
        for &size in &[0.5f32, 1.0, 10.0, 75.0, 100.0] {
            let pos = Vec2::new(0.3, -0.2);
            let t = Triangle::new(pos, Color::black(), size).unwrap();
            let d = size / SIZE_SCALE;
            for v in t.vertices() {
                assert!((chebyshev(*v, pos) - d).abs() < 1e-6, "size {size}");
            }
        }
    }

    #[test]
    fn stamp_triangle_is_non_degenerate() {
        let t = Triangle::new(Vec2::zero(), Color::black(), 10.0).unwrap();
        let d = 10.0 / SIZE_SCALE;
        // base 2d, height 2d
        assert!((signed_area(t.vertices()) - 2.0 * d * d).abs() < 1e-6);
    }

    #[test]
    fn stamp_triangle_layout() {
        let t = Triangle::new(Vec2::zero(), Color::black(), 150.0).unwrap();
        assert_eq!(
            t.vertices(),
            &[Vec2::new(0.0, 1.0), Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0)]
        );
    }

    #[test]
    fn renders_three_vertex_triangle_list() {
        let t = Triangle::new(Vec2::zero(), Color::black(), 10.0).unwrap();
        let mut rec = GeometryRecorder::new();
        t.render(&mut rec).unwrap();
        assert_eq!(rec.draw_count(), 1);
        assert_eq!(rec.batches()[0].primitive, Primitive::Triangles);
        assert_eq!(rec.batches()[0].vertices.len(), 3);
    }

    #[test]
    fn from_vertices_uses_centroid() {
        let t = Triangle::from_vertices(
            [Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(0.0, 3.0)],
            Color::black(),
        );
        assert_eq!(t.position(), Vec2::new(1.0, 1.0));
    }
}
