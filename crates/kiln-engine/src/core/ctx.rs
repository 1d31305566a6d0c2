use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::device::Gpu;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

/// The window a frame is being drawn for.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl WindowCtx<'_> {
    /// Current client area in logical pixels.
    pub fn viewport(&self) -> Viewport {
        let logical: winit::dpi::LogicalSize<f32> =
            self.window.inner_size().to_logical(self.window.scale_factor());
        Viewport::new(logical.width, logical.height)
    }
}

/// Handed to [`App::on_frame`](super::App::on_frame) once per redraw.
///
/// `'a` is the callback; `'w` is the window borrow inside `Gpu<'w>`.
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

impl FrameCtx<'_, '_> {
    /// Draws one frame: clear to `clear`, let `draw` record its passes, present.
    ///
    /// A frame the surface cannot provide is skipped. Only an unrecoverable surface
    /// error returns [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                return AppControl::exit_if(action.is_fatal());
            }
        };

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.window.viewport(),
        );

        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            drop(target.begin_pass("kiln clear", Some(clear.to_wgpu())));
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.present(frame);
        AppControl::Continue
    }
}
