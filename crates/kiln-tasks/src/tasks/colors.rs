use kiln_engine::core::{App, AppControl, FrameCtx};
use kiln_engine::geometry::{colored_triangle, VertexKind};
use kiln_engine::render::GpuMesh;
use winit::event::WindowEvent;
use winit::window::WindowId;

use super::{is_escape, LazyMeshes, TEAL};

/// Triangle with red, green and blue corners.
pub struct Colors {
    meshes: LazyMeshes,
}

impl Colors {
    pub fn new() -> Self {
        Self {
            meshes: LazyMeshes::new(VertexKind::Colored),
        }
    }
}

impl App for Colors {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        AppControl::exit_if(is_escape(event))
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let meshes = &mut self.meshes;
        ctx.render(TEAL, |rctx, target| {
            meshes.draw(rctx, target, |rctx| {
                vec![GpuMesh::upload(rctx.device, "colored triangle", &colored_triangle())]
            });
        })
    }
}
