//! Scene model: the shapes a user stamps and the static picture beneath them.
//!
//! Responsibilities:
//! - derive each shape's vertices once, at construction
//! - keep placed shapes in insertion order (insertion order = paint order)
//! - replay shapes through a [`RenderSurface`](crate::render::RenderSurface)
//!
//! Nothing here owns GPU resources.

mod error;
mod list;
mod picture;
mod style;

pub mod shapes;

pub use error::ShapeError;
pub use list::ShapeList;
pub use picture::Picture;
pub use shapes::{Circle, Point, Shape, ShapeKind, Triangle, SIZE_SCALE};
pub use style::{Channel, StyleLimits, StyleState, Tool};
