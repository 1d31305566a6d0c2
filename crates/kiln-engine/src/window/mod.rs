//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer and, when
//! configured, paces the loop with a `FramePacer`.

mod config;
mod runtime;

pub use config::{PacingMode, RuntimeConfig};
pub use runtime::Runtime;
