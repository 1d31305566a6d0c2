/// One acquired swapchain image plus the encoder recording into it.
///
/// Hand it back to [`Gpu::present`](super::Gpu::present) in the same frame; the surface
/// will not give out another image while this one is alive.
pub struct GpuFrame {
    pub(crate) surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What the render loop does after the surface refuses to give out an image.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface is configured again; the next frame should succeed.
    Reconfigure,
    /// Drop this frame and retry on the next redraw.
    SkipFrame,
    /// The device cannot recover; stop rendering.
    Fatal,
}

impl SurfaceErrorAction {
    pub fn classify(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Self::Reconfigure,
            wgpu::SurfaceError::OutOfMemory => Self::Fatal,
            // Timeout, Other
            _ => Self::SkipFrame,
        }
    }

    #[inline]
    pub fn is_fatal(self) -> bool {
        self == Self::Fatal
    }
}
