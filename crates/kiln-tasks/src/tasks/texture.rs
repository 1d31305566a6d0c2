use std::path::PathBuf;

use kiln_engine::core::{App, AppControl, FrameCtx};
use kiln_engine::geometry::{textured_triangle, VertexKind};
use kiln_engine::render::{GpuMesh, Texture};
use winit::event::WindowEvent;
use winit::window::WindowId;

use super::{is_escape, LazyMeshes, TEAL};

/// RGB triangle modulated by an image loaded from disk.
pub struct TextureTask {
    path: PathBuf,
    texture: Option<Texture>,
    meshes: LazyMeshes,
}

impl TextureTask {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            texture: None,
            meshes: LazyMeshes::new(VertexKind::Textured),
        }
    }
}

impl App for TextureTask {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        AppControl::exit_if(is_escape(event))
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Self {
            path,
            texture,
            meshes,
        } = self;

        ctx.render(TEAL, |rctx, target| {
            if texture.is_none() {
                let loaded = Texture::from_path(rctx.device, rctx.queue, path.as_path());
                let (w, h) = loaded.size();
                log::info!("texture {} bound ({w}x{h})", path.display());
                meshes.renderer_mut().set_texture(rctx, &loaded);
                *texture = Some(loaded);
            }

            meshes.draw(rctx, target, |rctx| {
                vec![GpuMesh::upload(rctx.device, "textured triangle", &textured_triangle())]
            });
        })
    }
}
