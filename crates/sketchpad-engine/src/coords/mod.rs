//! Coordinate types and the pixel → normalized device space mapping.
//!
//! Two spaces are in play:
//! - surface pixels: logical pixels, origin top-left, +X right, +Y down
//! - normalized device space (NDC): [-1, 1] on both axes, origin centered, +Y up
//!
//! Shapes live in NDC. Pointer input arrives in surface pixels and is mapped once,
//! at stamp time.

mod ndc;
mod vec2;
mod viewport;

pub use ndc::pixel_to_ndc;
pub use vec2::Vec2;
pub use viewport::Viewport;
