use winit::dpi::PhysicalSize;

/// First format matching the sRGB preference, or the surface's first format when none
/// does.
pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if caps.formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if caps.formats.contains(&f) {
                return Some(f);
            }
        }
        return Some(caps.formats[0]);
    }

    // Shader output is written as-is, like a GL default framebuffer.
    caps.formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| caps.formats.first().copied())
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Returns `requested` if the surface supports it, otherwise `Fifo`.
///
/// The `Auto*` modes are always accepted; wgpu resolves them at configure time.
pub(crate) fn choose_present_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    match requested {
        wgpu::PresentMode::AutoVsync | wgpu::PresentMode::AutoNoVsync => requested,
        mode if caps.present_modes.contains(&mode) => mode,
        mode => {
            log::warn!("present mode {mode:?} unsupported by surface; using Fifo");
            wgpu::PresentMode::Fifo
        }
    }
}

/// Swapchain configuration for a drawable of `size` physical pixels.
///
/// A zero dimension is bumped to 1; callers skip `configure` while minimized.
pub(crate) fn surface_config(
    format: wgpu::TextureFormat,
    present_mode: wgpu::PresentMode,
    alpha_mode: wgpu::CompositeAlphaMode,
    size: PhysicalSize<u32>,
    desired_maximum_frame_latency: u32,
) -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency,
    }
}

#[inline]
pub(crate) fn is_drawable(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}
