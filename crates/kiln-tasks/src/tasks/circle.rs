use kiln_engine::core::{App, AppControl, FrameCtx};
use kiln_engine::geometry::{circle_outline, VertexKind};
use kiln_engine::render::GpuMesh;
use winit::event::WindowEvent;
use winit::window::WindowId;

use super::{is_escape, LazyMeshes, TEAL};

const RADIUS: f32 = 0.5;

/// Orange circle outline, kept round as the window's aspect ratio changes.
pub struct Circle {
    segments: usize,
    aspect: Option<f32>,
    meshes: LazyMeshes,
}

impl Circle {
    pub fn new(segments: usize) -> Self {
        Self {
            segments,
            aspect: None,
            meshes: LazyMeshes::new(VertexKind::Position),
        }
    }
}

impl App for Circle {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        AppControl::exit_if(is_escape(event))
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let aspect = ctx.window.viewport().aspect_ratio();
        if self.aspect != Some(aspect) {
            log::debug!("circle outline rebuilt for aspect {aspect:.3}");
            self.aspect = Some(aspect);
            self.meshes.invalidate();
        }

        let segments = self.segments;
        let meshes = &mut self.meshes;

        ctx.render(TEAL, |rctx, target| {
            meshes.draw(rctx, target, |rctx| {
                let outline = circle_outline(segments, RADIUS, aspect);
                vec![GpuMesh::upload(rctx.device, "circle outline", &outline)]
            });
        })
    }
}
