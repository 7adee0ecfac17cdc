use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{RenderError, RenderSurface};

use super::Triangle;

/// An immutable picture made of colored triangles.
///
/// Rendered through the same triangle contract as stamped shapes, but never stored
/// in the [`ShapeList`](super::ShapeList).
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    triangles: Vec<Triangle>,
}

/// Flat `[x0, y0, x1, y1, x2, y2]` vertex data plus a palette slot.
type Tri = ([f32; 6], Tone);

#[derive(Debug, Copy, Clone)]
enum Tone {
    Dark,
    Main,
    Light,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Dark => Color::from_straight(0.2, 0.2, 0.2, 1.0),
            Tone::Main => Color::from_straight(0.4, 0.25, 0.05, 1.0),
            Tone::Light => Color::from_straight(0.7, 0.5, 0.2, 1.0),
        }
    }
}

use Tone::{Dark, Light, Main};

#[rustfmt::skip]
const DOG: [Tri; 28] = [
    // face
    ([0.25, 0.75, 0.25, 0.45, 0.45, 0.65], Main),
    ([0.45, 0.65, 0.5, 0.55, 0.35, 0.55], Dark),
    ([0.5, 0.55, 0.6, 0.4, 0.65, 0.45], Dark),
    ([0.6, 0.4, 0.35, 0.55, 0.5, 0.55], Main),
    ([0.25, 0.45, 0.35, 0.55, 0.37, 0.4], Light),
    ([0.37, 0.4, 0.35, 0.55, 0.5, 0.45], Light),
    ([0.37, 0.4, 0.5, 0.45, 0.55, 0.35], Main),
    // body
    ([0.10, 0.1, 0.22, 0.6, 0.45, 0.05], Light),
    ([0.45, 0.05, 0.4, 0.4, 0.3, 0.42], Main),
    ([0.45, 0.05, 0.1, 0.1, 0.4, -0.10], Main),
    ([0.1, 0.1, 0.4, -0.1, 0.1, -0.35], Light),
    ([0.1, -0.35, 0.1, 0.1, -0.15, -0.1], Main),
    ([0.1, -0.35, -0.15, -0.35, -0.15, -0.1], Light),
    ([-0.4, -0.35, -0.15, -0.35, -0.15, -0.1], Light),
    // back legs
    ([-0.4, -0.35, -0.15, -0.35, -0.4, -0.5], Main),
    ([-0.15, -0.35, -0.15, -0.5, -0.4, -0.5], Light),
    ([-0.4, -0.5, -0.15, -0.5, -0.4, -0.65], Main),
    ([-0.15, -0.5, -0.15, -0.65, -0.4, -0.65], Light),
    ([0.02, -0.45, -0.15, -0.65, -0.15, -0.35], Main),
    ([0.02, -0.45, 0.10, -0.35, -0.15, -0.35], Light),
    ([-0.15, -0.65, -0.05, -0.55, 0.1, -0.55], Light),
    ([-0.15, -0.65, 0.15, -0.65, 0.1, -0.55], Dark),
    // front legs
    ([0.1, -0.35, 0.35, -0.65, 0.3, -0.18], Main),
    ([0.4, -0.1, 0.35, -0.45, 0.3, -0.18], Main),
    ([0.37, -0.35, 0.33, -0.45, 0.4, -0.55], Light),
    ([0.5, -0.65, 0.33, -0.65, 0.4, -0.55], Dark),
    // tail
    ([-0.4, -0.65, -0.6, -0.35, -0.55, -0.25], Dark),
    // ear
    ([0.25, 0.4, 0.25, 0.75, 0.1, 0.6], Dark),
];

impl Picture {
    /// The geometric German Shepherd: 28 triangles in three tones.
    pub fn dog() -> Self {
        let triangles = DOG
            .iter()
            .map(|(v, tone)| {
                Triangle::from_vertices(
                    [Vec2::new(v[0], v[1]), Vec2::new(v[2], v[3]), Vec2::new(v[4], v[5])],
                    tone.color(),
                )
            })
            .collect();
        Self { triangles }
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Draws every triangle in order. A failed triangle is reported and skipped.
    ///
    /// Returns `(drawn, failed)`.
    pub fn render(&self, surface: &mut dyn RenderSurface) -> (usize, usize) {
        let mut drawn = 0;
        let mut failed = 0;
        for (i, tri) in self.triangles.iter().enumerate() {
            match tri.render(surface) {
                Ok(()) => drawn += 1,
                Err(e) => {
                    report_failure(i, &e);
                    failed += 1;
                }
            }
        }
        (drawn, failed)
    }
}

fn report_failure(index: usize, err: &RenderError) {
    log::warn!("picture triangle {index} not drawn: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{GeometryRecorder, Primitive};

    #[test]
    fn dog_has_twenty_eight_triangles() {
        assert_eq!(Picture::dog().len(), 28);
    }

    #[test]
    fn dog_renders_one_triangle_draw_each() {
        let mut rec = GeometryRecorder::new();
        let (drawn, failed) = Picture::dog().render(&mut rec);
        assert_eq!((drawn, failed), (28, 0));
        assert!(rec.batches().iter().all(|b| b.primitive == Primitive::Triangles));
    }

    #[test]
    fn dog_stays_inside_ndc() {
        for t in Picture::dog().triangles() {
            for v in t.vertices() {
                assert!(v.x.abs() <= 1.0 && v.y.abs() <= 1.0);
            }
        }
    }

    #[test]
    fn render_continues_after_a_failure() {
        // Room for exactly one triangle.
        let mut rec = GeometryRecorder::with_budget(3);
        let (drawn, failed) = Picture::dog().render(&mut rec);
        assert_eq!((drawn, failed), (1, 27));
    }
}
