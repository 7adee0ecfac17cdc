//! Paint model shared between the scene and the renderer.
//!
//! Colors are stored premultiplied; every fill is solid.

pub mod color;

pub use color::Color;
