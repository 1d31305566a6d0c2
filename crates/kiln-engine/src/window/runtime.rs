use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::time::{FrameClock, FramePacer};

use super::config::RuntimeConfig;

/// Owns the winit event loop.
pub struct Runtime;

impl Runtime {
    /// Opens a window for `config` and drives `app` until the window closes or the app
    /// returns [`AppControl::Exit`].
    ///
    /// Failing to open the window (or its GPU) is logged and returned.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit event loop")?;
        let mut state = LoopState {
            config,
            gpu_init,
            app,
            window: None,
            exit_requested: false,
            startup_error: None,
        };

        event_loop
            .run_app(&mut state)
            .context("winit event loop exited with an error")?;

        state.startup_error.map_or(Ok(()), Err)
    }
}

/// The window, the GPU state borrowing it, and its timing.
#[self_referencing]
struct WindowEntry {
    clock: FrameClock,
    pacer: Option<FramePacer>,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowEntry {
    fn open(event_loop: &ActiveEventLoop, config: RuntimeConfig, gpu_init: &GpuInit) -> Result<Self> {
        let RuntimeConfig {
            title,
            initial_size,
            pacing,
        } = config;

        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(title)
                    .with_inner_size(initial_size),
            )
            .context("failed to create window")?;

        let gpu_init = gpu_init.clone().with_present_mode(pacing.present_mode());
        log::info!("window {:?} opened, pacing {pacing:?}", window.id());

        WindowEntryTryBuilder {
            clock: FrameClock::new(),
            pacer: pacing.pacer(),
            window,
            gpu_builder: |window| {
                pollster::block_on(Gpu::new(window, gpu_init)).context("GPU setup failed")
            },
        }
        .try_build()
    }

    fn id(&self) -> WindowId {
        self.with_window(|w| w.id())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.with_gpu_mut(|gpu| gpu.resize(size));
        self.with_window(|w| w.request_redraw());
    }

    /// One loop iteration: draw through `app`, then sleep out the frame budget.
    fn redraw(&mut self, app: &mut impl App) -> AppControl {
        self.with_mut(|fields| {
            let time = fields.clock.tick();

            let control = app.on_frame(&mut FrameCtx {
                window: WindowCtx {
                    id: fields.window.id(),
                    window: fields.window,
                },
                gpu: fields.gpu,
                time,
            });

            if let Some(pacer) = fields.pacer.as_mut() {
                pacer.end_frame();
            }

            control
        })
    }
}

struct LoopState<A> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    exit_requested: bool,
    startup_error: Option<anyhow::Error>,
}

impl<A: App> LoopState<A> {
    /// The open window, if `id` names it.
    fn entry_mut(&mut self, id: WindowId) -> Option<&mut WindowEntry> {
        self.window.as_mut().filter(|entry| entry.id() == id)
    }
}

impl<A: App> ApplicationHandler for LoopState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        match WindowEntry::open(event_loop, self.config.clone(), &self.gpu_init) {
            Ok(entry) => self.window = Some(entry),
            Err(e) => {
                log::error!("{e:#}");
                self.startup_error = Some(e);
                self.exit_requested = true;
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Redraw continuously; vsync or the pacer bounds the rate.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if self.entry_mut(id).is_none() {
            return;
        }

        if self.app.on_window_event(id, &event) == AppControl::Exit {
            self.exit_requested = true;
        } else {
            match event {
                WindowEvent::CloseRequested => self.exit_requested = true,
                WindowEvent::Resized(size) => {
                    if let Some(entry) = self.entry_mut(id) {
                        entry.resize(size);
                    }
                }
                WindowEvent::ScaleFactorChanged { .. } => {
                    if let Some(entry) = self.entry_mut(id) {
                        let size = entry.with_window(|w| w.inner_size());
                        entry.resize(size);
                    }
                }
                WindowEvent::RedrawRequested => {
                    let app = &mut self.app;
                    if let Some(entry) = self.window.as_mut() {
                        if entry.redraw(app) == AppControl::Exit {
                            self.exit_requested = true;
                        }
                    }
                }
                _ => {}
            }
        }

        if self.exit_requested {
            // Drop the surface before the window goes away with the event loop.
            self.window = None;
            event_loop.exit();
        }
    }
}
