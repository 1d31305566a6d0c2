use kiln_engine::core::{App, AppControl, FrameCtx};
use kiln_engine::paint::Color;
use winit::event::WindowEvent;
use winit::window::WindowId;

use super::is_escape;

/// Window that only clears to a solid color.
pub struct ClearWindow {
    clear: Color,
}

impl ClearWindow {
    pub fn new(clear: Color) -> Self {
        Self { clear }
    }
}

impl App for ClearWindow {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        AppControl::exit_if(is_escape(event))
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        ctx.render(self.clear, |_, _| {})
    }
}
