//! Sketchpad engine crate.
//!
//! Owns the drawing model (shapes, canvas, repaint) and the platform + GPU runtime
//! pieces the studio binary drives.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod canvas;
pub mod effects;
