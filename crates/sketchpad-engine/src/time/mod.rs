//! Frame timing.
//!
//! One `FrameClock` per window; `tick()` once per presented frame. Particle bursts
//! age by the returned `dt`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
