use std::f32::consts::TAU;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{draw_vertices, Primitive, RenderError, RenderSurface};
use crate::scene::error::{check_size, ShapeError};

use super::SIZE_SCALE;

/// A filled circle approximated by a `segments`-sided triangle fan.
///
/// Vertex layout (`segments + 2` vertices):
/// - `[0]` center
/// - `[1..=segments + 1]` boundary samples at angle `i * 2π / segments`; the last sample
///   repeats the first so the fan closes.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    position: Vec2,
    color: Color,
    radius: f32,
    segments: u32,
    vertices: Vec<Vec2>,
}

impl Circle {
    pub const MIN_SEGMENTS: u32 = 3;

    pub fn new(position: Vec2, color: Color, size: f32, segments: u32) -> Result<Self, ShapeError> {
        if segments < Self::MIN_SEGMENTS {
            return Err(ShapeError::TooFewSegments(segments));
        }
        let radius = check_size(size)? / SIZE_SCALE;

        let mut vertices = Vec::with_capacity(segments as usize + 2);
        vertices.push(position);
        for i in 0..=segments {
            let angle = i as f32 * TAU / segments as f32;
            vertices.push(Vec2::new(
                position.x + radius * angle.cos(),
                position.y + radius * angle.sin(),
            ));
        }

        Ok(Self { position, color, radius, segments, vertices })
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Radius in NDC.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) -> Result<(), RenderError> {
        surface.set_fill_color(self.color);
        draw_vertices(surface, Primitive::TriangleFan, &self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::GeometryRecorder;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn vertex_count_is_segments_plus_two() {
        for segments in [3u32, 4, 12, 37, 100] {
            let c = Circle::new(Vec2::zero(), Color::black(), 10.0, segments).unwrap();
            assert_eq!(c.vertices().len(), segments as usize + 2);
        }
    }

    #[test]
    fn fan_closes_on_first_boundary_vertex() {
        for segments in [3u32, 7, 12, 64] {
            let c = Circle::new(Vec2::new(-0.4, 0.2), Color::black(), 25.0, segments).unwrap();
            let v = c.vertices();
            assert!(approx(v[1], v[segments as usize + 1]), "segments {segments}");
        }
    }

    #[test]
    fn boundary_vertices_lie_on_radius() {
        let center = Vec2::new(0.1, 0.1);
        let c = Circle::new(center, Color::black(), 30.0, 16).unwrap();
        assert_eq!(c.vertices()[0], center);
        for v in &c.vertices()[1..] {
            let d = ((v.x - center.x).powi(2) + (v.y - center.y).powi(2)).sqrt();
            assert!((d - 30.0 / SIZE_SCALE).abs() < 1e-5);
        }
    }

    #[test]
    fn first_boundary_vertex_is_at_angle_zero() {
        let c = Circle::new(Vec2::zero(), Color::black(), 150.0, 4).unwrap();
        assert!(approx(c.vertices()[1], Vec2::new(1.0, 0.0)));
        assert!(approx(c.vertices()[2], Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn rejects_fewer_than_three_segments() {
        assert_eq!(
            Circle::new(Vec2::zero(), Color::black(), 10.0, 2),
            Err(ShapeError::TooFewSegments(2))
        );
    }

    #[test]
    fn renders_as_fan_of_all_vertices() {
        let c = Circle::new(Vec2::zero(), Color::black(), 10.0, 12).unwrap();
        let mut rec = GeometryRecorder::new();
        c.render(&mut rec).unwrap();

        let b = &rec.batches()[0];
        assert_eq!(b.primitive, Primitive::TriangleFan);
        assert_eq!(b.vertices.len(), 14);
        assert_eq!(b.primitive.triangle_count(b.vertices.len()), 12);
    }
}
