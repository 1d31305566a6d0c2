//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per window (or per render loop)
//! - call `tick()` once per presented frame to obtain `FrameTime`
//! - one `FramePacer` per loop when frame rate is capped by sleeping instead of vsync

mod clock;
mod frame_clock;
mod pacer;

pub use clock::{Clock, SystemClock};
pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::{frame_duration_for, FpsReport, FramePacer, ReportCadence, DEFAULT_TARGET_FPS};
