use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface;
use super::{GpuFrame, GpuInit, SurfaceErrorAction};

/// Device, queue and swapchain for one window.
///
/// The surface borrows the window, so a `Gpu<'w>` cannot outlive it; the runtime keeps
/// both in one self-referencing entry.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    /// Physical pixels. May be 0x0 while minimized, unlike `config`.
    size: PhysicalSize<u32>,
}

impl<'w> Gpu<'w> {
    /// Opens the GPU for `window`. Async because adapter and device requests are.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(surface::is_drawable(size), "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter can present to this window")?;

        let info = adapter.get_info();
        log::info!("adapter: {} ({:?}, {:?})", info.name, info.backend, info.device_type);

        // The exercises need nothing beyond what a WebGL2-class GPU offers.
        let required_limits =
            wgpu::Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits());

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("kiln device"),
                required_features: wgpu::Features::empty(),
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device")?;

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps, init.prefer_srgb)
            .context("surface reports no supported formats")?;
        let alpha_mode = surface::choose_alpha_mode(&caps, init.alpha_mode);
        let present_mode = surface::choose_present_mode(&caps, init.present_mode);

        let config = surface::surface_config(
            format,
            present_mode,
            alpha_mode,
            size,
            init.desired_maximum_frame_latency,
        );
        surface.configure(&device, &config);

        log::debug!(
            "surface: {format:?}, {present_mode:?}, {alpha_mode:?}, {}x{}",
            size.width,
            size.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    #[inline]
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    #[inline]
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    #[inline]
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Tracks the new drawable size; configuration waits until it is non-zero.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if !surface::is_drawable(new_size) {
            return;
        }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquires the next swapchain image and an encoder to record into it.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("kiln frame encoder"),
            });

        Ok(GpuFrame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Submits everything recorded into `frame` and shows it.
    pub fn present(&self, frame: GpuFrame) {
        let GpuFrame {
            surface_texture,
            view,
            encoder,
        } = frame;

        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }

    /// Logs `err`, reconfigures the surface when that is the remedy, and says what the
    /// caller should do with the current frame.
    pub fn handle_surface_error(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        let action = SurfaceErrorAction::classify(&err);
        match action {
            SurfaceErrorAction::Fatal => log::error!("surface error: {err}"),
            _ => log::debug!("surface error: {err} ({action:?})"),
        }

        if action == SurfaceErrorAction::Reconfigure && surface::is_drawable(self.size) {
            self.surface.configure(&self.device, &self.config);
        }
        action
    }
}
