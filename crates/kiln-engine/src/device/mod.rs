//! GPU device and window surface.
//!
//! `Gpu` is created once per window and owns everything wgpu needs to put pixels on
//! it. Frames are acquired with [`Gpu::begin_frame`] and handed back with
//! [`Gpu::present`].

mod frame;
mod gpu;
mod init;
mod surface;

pub use frame::{GpuFrame, SurfaceErrorAction};
pub use gpu::Gpu;
pub use init::GpuInit;
