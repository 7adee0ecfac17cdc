//! Rendering subsystem.
//!
//! Two layers:
//! - [`RenderSurface`] is the graphics-context contract shapes draw through
//!   (buffer creation/upload, position binding, fill/point-size uniforms, primitive
//!   submission, clear). [`GeometryRecorder`] implements it on the CPU.
//! - [`CanvasRenderer`] consumes a recorder's batches and issues GPU commands via wgpu.
//!
//! Convention:
//! - recorded geometry is in normalized device space
//! - point sizes are in logical pixels

mod canvas;
mod ctx;
mod error;
mod recorder;
mod surface;

pub use canvas::CanvasRenderer;
pub use ctx::{RenderCtx, RenderTarget};
pub use error::RenderError;
pub use recorder::{DrawBatch, GeometryRecorder, DEFAULT_GEOMETRY_BUDGET};
pub use surface::{draw_vertices, BufferId, Primitive, RenderSurface};
