/// Knobs for [`Gpu::new`](super::Gpu::new).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB swapchain format when the surface offers one.
    ///
    /// Off by default: colors are then display values that reach the screen
    /// unconverted, as they do in a GL default framebuffer.
    pub prefer_srgb: bool,

    /// `Fifo` waits for vertical blank (swap interval 1). The runtime overwrites this
    /// from the window's `PacingMode`.
    pub present_mode: wgpu::PresentMode,

    /// Falls back to the surface's first supported mode when `None` or unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub power_preference: wgpu::PowerPreference,

    /// How many frames the CPU may queue ahead of the display. A hint only.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::HighPerformance,
            desired_maximum_frame_latency: 2,
        }
    }
}

impl GpuInit {
    #[inline]
    pub fn with_present_mode(mut self, present_mode: wgpu::PresentMode) -> Self {
        self.present_mode = present_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_waits_for_vblank() {
        let init = GpuInit::default();
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert!(!init.prefer_srgb);
    }

    #[test]
    fn present_mode_override_keeps_other_fields() {
        let init = GpuInit {
            desired_maximum_frame_latency: 1,
            ..GpuInit::default()
        }
        .with_present_mode(wgpu::PresentMode::AutoNoVsync);

        assert_eq!(init.present_mode, wgpu::PresentMode::AutoNoVsync);
        assert_eq!(init.desired_maximum_frame_latency, 1);
    }
}
