use crate::coords::Vec2;
use crate::paint::Color;

use super::{BufferId, Primitive, RenderError, RenderSurface};

/// Default per-repaint vertex budget for [`GeometryRecorder`].
pub const DEFAULT_GEOMETRY_BUDGET: usize = 1 << 20;

/// One submitted draw call, with the uniform state it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub primitive: Primitive,
    pub color: Color,
    /// Point diameter in logical pixels (meaningful for `Primitive::Points` only).
    pub point_size: f32,
    /// Vertices in normalized device space, already sliced to the draw range.
    pub vertices: Vec<Vec2>,
}

#[derive(Debug, Clone)]
struct BufferSlot {
    capacity: usize,
    data: Vec<Vec2>,
}

/// CPU implementation of [`RenderSurface`].
///
/// Buffers and batches live until the next `clear()`. The vertex capacity of all buffers
/// created since the last clear is bounded by `budget`; a request past it fails with
/// [`RenderError::BufferAllocation`].
///
/// `generation()` changes on every clear or draw so GPU consumers can skip re-uploading
/// unchanged frames.
#[derive(Debug)]
pub struct GeometryRecorder {
    buffers: Vec<BufferSlot>,
    bound: Option<BufferId>,

    fill_color: Color,
    point_size: f32,

    batches: Vec<DrawBatch>,

    budget: usize,
    allocated: usize,

    generation: u64,
}

impl Default for GeometryRecorder {
    fn default() -> Self {
        Self::with_budget(DEFAULT_GEOMETRY_BUDGET)
    }
}

impl GeometryRecorder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(budget: usize) -> Self {
        Self {
            buffers: Vec::new(),
            bound: None,
            fill_color: Color::black(),
            point_size: 1.0,
            batches: Vec::new(),
            budget,
            allocated: 0,
            generation: 0,
        }
    }

    /// Draw calls recorded since the last clear, in submission order.
    #[inline]
    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    #[inline]
    pub fn draw_count(&self) -> usize {
        self.batches.len()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Vertices still available to `create_buffer` before the next clear.
    #[inline]
    pub fn remaining_budget(&self) -> usize {
        self.budget.saturating_sub(self.allocated)
    }

    fn slot(&self, buffer: BufferId) -> Result<&BufferSlot, RenderError> {
        self.buffers
            .get(buffer.0 as usize)
            .ok_or(RenderError::UnknownBuffer(buffer))
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

impl RenderSurface for GeometryRecorder {
    fn clear(&mut self) {
        self.buffers.clear();
        self.bound = None;
        self.batches.clear();
        self.allocated = 0;
        self.bump_generation();
    }

    fn create_buffer(&mut self, capacity: usize) -> Result<BufferId, RenderError> {
        let available = self.remaining_budget();
        if capacity > available {
            return Err(RenderError::BufferAllocation { requested: capacity, available });
        }

        let id = BufferId(self.buffers.len() as u32);
        self.buffers.push(BufferSlot { capacity, data: Vec::with_capacity(capacity) });
        self.allocated += capacity;
        Ok(id)
    }

    fn write_buffer(&mut self, buffer: BufferId, vertices: &[Vec2]) -> Result<(), RenderError> {
        let slot = self
            .buffers
            .get_mut(buffer.0 as usize)
            .ok_or(RenderError::UnknownBuffer(buffer))?;

        if vertices.len() > slot.capacity {
            return Err(RenderError::BufferOverflow { capacity: slot.capacity, len: vertices.len() });
        }

        slot.data.clear();
        slot.data.extend_from_slice(vertices);
        Ok(())
    }

    fn bind_position(&mut self, buffer: BufferId) -> Result<(), RenderError> {
        self.slot(buffer)?;
        self.bound = Some(buffer);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_point_size(&mut self, size: f32) {
        self.point_size = size;
    }

    fn draw(&mut self, primitive: Primitive, first: usize, count: usize) -> Result<(), RenderError> {
        let bound = self.bound.ok_or(RenderError::NoBoundBuffer)?;
        let data = &self.slot(bound)?.data;

        let end = first.saturating_add(count);
        if end > data.len() {
            return Err(RenderError::VertexRange { first, end, len: data.len() });
        }

        let batch = DrawBatch {
            primitive,
            color: self.fill_color,
            point_size: self.point_size,
            vertices: data[first..end].to_vec(),
        };
        self.batches.push(batch);
        self.bump_generation();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::draw_vertices;

    fn tri() -> [Vec2; 3] {
        [Vec2::new(0.0, 1.0), Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0)]
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn draw_captures_current_uniforms() {
        let mut rec = GeometryRecorder::new();
        let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        rec.set_fill_color(red);
        rec.set_point_size(7.0);
        draw_vertices(&mut rec, Primitive::Triangles, &tri()).unwrap();

        let b = &rec.batches()[0];
        assert_eq!(b.primitive, Primitive::Triangles);
        assert_eq!(b.color, red);
        assert_eq!(b.point_size, 7.0);
        assert_eq!(b.vertices, tri().to_vec());
    }

    #[test]
    fn uniform_change_does_not_touch_recorded_batches() {
        let mut rec = GeometryRecorder::new();
        rec.set_fill_color(Color::black());
        draw_vertices(&mut rec, Primitive::Triangles, &tri()).unwrap();
        rec.set_fill_color(Color::transparent());
        assert_eq!(rec.batches()[0].color, Color::black());
    }

    #[test]
    fn draw_without_binding_fails() {
        let mut rec = GeometryRecorder::new();
        assert_eq!(rec.draw(Primitive::Points, 0, 1), Err(RenderError::NoBoundBuffer));
    }

    #[test]
    fn draw_past_buffer_end_fails() {
        let mut rec = GeometryRecorder::new();
        let id = rec.create_buffer(3).unwrap();
        rec.write_buffer(id, &tri()).unwrap();
        rec.bind_position(id).unwrap();
        assert_eq!(
            rec.draw(Primitive::Triangles, 1, 3),
            Err(RenderError::VertexRange { first: 1, end: 4, len: 3 })
        );
        assert_eq!(rec.draw_count(), 0);
    }

    #[test]
    fn draw_slices_requested_range() {
        let mut rec = GeometryRecorder::new();
        let id = rec.create_buffer(3).unwrap();
        rec.write_buffer(id, &tri()).unwrap();
        rec.bind_position(id).unwrap();
        rec.draw(Primitive::Points, 1, 2).unwrap();
        assert_eq!(rec.batches()[0].vertices, tri()[1..].to_vec());
    }

    // ── buffers ───────────────────────────────────────────────────────────

    #[test]
    fn budget_exhaustion_fails_allocation() {
        let mut rec = GeometryRecorder::with_budget(4);
        rec.create_buffer(3).unwrap();
        assert_eq!(
            rec.create_buffer(3),
            Err(RenderError::BufferAllocation { requested: 3, available: 1 })
        );
        assert!(rec.create_buffer(1).is_ok());
    }

    #[test]
    fn clear_releases_budget_and_batches() {
        let mut rec = GeometryRecorder::with_budget(3);
        draw_vertices(&mut rec, Primitive::Triangles, &tri()).unwrap();
        assert_eq!(rec.remaining_budget(), 0);

        rec.clear();
        assert_eq!(rec.draw_count(), 0);
        assert_eq!(rec.remaining_budget(), 3);
    }

    #[test]
    fn buffers_do_not_survive_clear() {
        let mut rec = GeometryRecorder::new();
        let id = rec.create_buffer(1).unwrap();
        rec.clear();
        assert_eq!(rec.bind_position(id), Err(RenderError::UnknownBuffer(id)));
    }

    #[test]
    fn write_over_capacity_fails() {
        let mut rec = GeometryRecorder::new();
        let id = rec.create_buffer(2).unwrap();
        assert_eq!(
            rec.write_buffer(id, &tri()),
            Err(RenderError::BufferOverflow { capacity: 2, len: 3 })
        );
    }

    // ── generation ────────────────────────────────────────────────────────

    #[test]
    fn generation_advances_on_clear_and_draw() {
        let mut rec = GeometryRecorder::new();
        let g0 = rec.generation();
        rec.clear();
        let g1 = rec.generation();
        draw_vertices(&mut rec, Primitive::Triangles, &tri()).unwrap();
        let g2 = rec.generation();
        assert!(g0 != g1 && g1 != g2);
    }
}
