use kiln_engine::core::{App, AppControl, FrameCtx};
use kiln_engine::geometry::{rectangle, triangle, VertexKind};
use kiln_engine::paint::Color;
use kiln_engine::render::GpuMesh;
use winit::event::WindowEvent;
use winit::window::WindowId;

use super::{is_escape, LazyMeshes, LIGHT_BLUE, TEAL};

/// Orange position-only shapes on a solid background.
pub struct Shapes {
    clear: Color,
    with_rectangle: bool,
    meshes: LazyMeshes,
}

impl Shapes {
    pub fn triangle() -> Self {
        Self::new(TEAL, false)
    }

    pub fn triangle_and_rectangle() -> Self {
        Self::new(LIGHT_BLUE, true)
    }

    fn new(clear: Color, with_rectangle: bool) -> Self {
        Self {
            clear,
            with_rectangle,
            meshes: LazyMeshes::new(VertexKind::Position),
        }
    }
}

impl App for Shapes {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        AppControl::exit_if(is_escape(event))
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let with_rectangle = self.with_rectangle;
        let meshes = &mut self.meshes;

        ctx.render(self.clear, |rctx, target| {
            meshes.draw(rctx, target, |rctx| {
                let mut out = vec![GpuMesh::upload(rctx.device, "triangle", &triangle())];
                if with_rectangle {
                    out.push(GpuMesh::upload(rctx.device, "rectangle", &rectangle()));
                }
                out
            });
        })
    }
}
