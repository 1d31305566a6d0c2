//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the tasks built on
//! top of it, with a consistent per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
