use crate::coords::Vec2;
use crate::paint::Color;

use super::RenderError;

/// Handle to a geometry buffer created by a [`RenderSurface`].
///
/// Handles are only valid until the next [`RenderSurface::clear`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BufferId(pub u32);

/// Primitive topology for [`RenderSurface::draw`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Primitive {
    /// One square sprite per vertex, `point_size` pixels across.
    Points,
    /// Independent triangles, three vertices each.
    Triangles,
    /// Vertex 0 is shared; each following pair forms one triangle with it.
    TriangleFan,
}

impl Primitive {
    /// Number of triangles `count` vertices produce under this topology.
    #[inline]
    pub fn triangle_count(self, count: usize) -> usize {
        match self {
            Primitive::Points => 0,
            Primitive::Triangles => count / 3,
            Primitive::TriangleFan => count.saturating_sub(2),
        }
    }
}

/// Graphics-context contract consumed by shapes.
///
/// Mirrors an immediate-mode GL context: uniforms (`fill_color`, `point_size`) and the
/// bound position buffer are sticky state that every subsequent `draw` reads.
pub trait RenderSurface {
    /// Clears the surface. Drops every buffer and everything drawn so far.
    fn clear(&mut self);

    /// Creates a writable geometry buffer holding up to `capacity` vertices.
    fn create_buffer(&mut self, capacity: usize) -> Result<BufferId, RenderError>;

    /// Replaces the contents of `buffer`.
    fn write_buffer(&mut self, buffer: BufferId, vertices: &[Vec2]) -> Result<(), RenderError>;

    /// Binds `buffer` as the vertex-position input for subsequent draws.
    fn bind_position(&mut self, buffer: BufferId) -> Result<(), RenderError>;

    fn set_fill_color(&mut self, color: Color);

    /// Point diameter in logical pixels. Only `Primitive::Points` reads it.
    fn set_point_size(&mut self, size: f32);

    /// Submits `count` vertices starting at `first` from the bound buffer.
    fn draw(&mut self, primitive: Primitive, first: usize, count: usize) -> Result<(), RenderError>;
}

/// Uploads `vertices` into a fresh buffer, binds it, and submits one draw.
///
/// This is the common tail of every shape's render call. Fill color and point size
/// must already be set.
pub fn draw_vertices(
    surface: &mut dyn RenderSurface,
    primitive: Primitive,
    vertices: &[Vec2],
) -> Result<(), RenderError> {
    let buffer = surface.create_buffer(vertices.len())?;
    surface.write_buffer(buffer, vertices)?;
    surface.bind_position(buffer)?;
    surface.draw(primitive, 0, vertices.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_triangle_count() {
        assert_eq!(Primitive::TriangleFan.triangle_count(14), 12);
        assert_eq!(Primitive::TriangleFan.triangle_count(2), 0);
        assert_eq!(Primitive::TriangleFan.triangle_count(0), 0);
    }

    #[test]
    fn list_triangle_count() {
        assert_eq!(Primitive::Triangles.triangle_count(3), 1);
        assert_eq!(Primitive::Triangles.triangle_count(7), 2);
    }

    #[test]
    fn points_have_no_triangles() {
        assert_eq!(Primitive::Points.triangle_count(5), 0);
    }
}
