//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the studio: an
//! [`App`] trait plus the per-window and per-frame contexts handed to it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
