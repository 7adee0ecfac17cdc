use super::BufferId;

/// Failures reported by a [`RenderSurface`](super::RenderSurface).
///
/// A failed draw aborts only the shape being drawn; callers log and continue.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("geometry buffer allocation failed: requested {requested} vertices, {available} available")]
    BufferAllocation { requested: usize, available: usize },
    #[error("unknown geometry buffer {0:?}")]
    UnknownBuffer(BufferId),
    #[error("buffer overflow: {len} vertices written into a buffer of {capacity}")]
    BufferOverflow { capacity: usize, len: usize },
    #[error("draw submitted with no bound position buffer")]
    NoBoundBuffer,
    #[error("draw range {first}..{end} exceeds bound buffer of {len} vertices")]
    VertexRange { first: usize, end: usize, len: usize },
}
