use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Whether the runtime keeps going after a callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

impl AppControl {
    #[inline]
    pub fn exit_if(exit: bool) -> Self {
        if exit { Self::Exit } else { Self::Continue }
    }
}

/// A program driven by [`Runtime`](crate::window::Runtime).
///
/// Exiting from either callback closes every window and ends the event loop.
pub trait App {
    /// Sees each window event before the runtime acts on it.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Draws one frame. With sleep pacing, the runtime paces right after this returns.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
