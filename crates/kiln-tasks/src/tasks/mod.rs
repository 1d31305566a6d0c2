//! One `App` per exercise.
//!
//! GPU resources are created on the first frame, inside the render closure, where the
//! device is available.

mod circle;
mod colors;
mod shapes;
mod texture;
mod transform;
mod window;

use anyhow::Result;
use kiln_engine::device::GpuInit;
use kiln_engine::geometry::VertexKind;
use kiln_engine::paint::Color;
use kiln_engine::render::{GpuMesh, MeshRenderer, RenderCtx, RenderTarget};
use kiln_engine::window::{Runtime, RuntimeConfig};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::cli::Task;

/// Clear color shared by most exercises.
pub const TEAL: Color = Color::from_premul(0.2, 0.3, 0.3, 1.0);

/// Clear color of the shapes exercise.
pub const LIGHT_BLUE: Color = Color::from_premul(0.6, 0.8, 1.0, 1.0);

/// GPU setup shared by every exercise: a linear swapchain, so the clear and vertex
/// colors above show exactly as authored.
pub fn gpu_init() -> GpuInit {
    GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    }
}

/// Runs `task` until its window closes.
pub fn run(task: Task, config: RuntimeConfig) -> Result<()> {
    let gpu = gpu_init();
    match task {
        // Frame-rate draws nothing; the runtime's pacer does the work.
        Task::Window | Task::FrameRate { .. } => Runtime::run(config, gpu, window::ClearWindow::new(TEAL)),
        Task::Triangle => Runtime::run(config, gpu, shapes::Shapes::triangle()),
        Task::Shapes => Runtime::run(config, gpu, shapes::Shapes::triangle_and_rectangle()),
        Task::Circle { segments } => Runtime::run(config, gpu, circle::Circle::new(segments as usize)),
        Task::Transform { animate, three_d } => {
            Runtime::run(config, gpu, transform::TransformTask::new(animate, three_d))
        }
        Task::Colors => Runtime::run(config, gpu, colors::Colors::new()),
        Task::Texture { path } => Runtime::run(config, gpu, texture::TextureTask::new(path)),
    }
}

/// True for a press of the Escape key.
pub fn is_escape(event: &WindowEvent) -> bool {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            event.state == ElementState::Pressed
                && event.logical_key == Key::Named(NamedKey::Escape)
        }
        _ => false,
    }
}

/// A renderer plus the meshes it draws, uploaded on first use.
pub struct LazyMeshes {
    renderer: MeshRenderer,
    meshes: Option<Vec<GpuMesh>>,
}

impl LazyMeshes {
    pub fn new(kind: VertexKind) -> Self {
        Self {
            renderer: MeshRenderer::new(kind),
            meshes: None,
        }
    }

    #[inline]
    pub fn renderer_mut(&mut self) -> &mut MeshRenderer {
        &mut self.renderer
    }

    /// Drops the uploaded meshes; the next draw uploads them again.
    pub fn invalidate(&mut self) {
        self.meshes = None;
    }

    /// Draws every mesh, calling `upload` first if nothing is uploaded yet.
    pub fn draw<F>(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, upload: F)
    where
        F: FnOnce(&RenderCtx<'_>) -> Vec<GpuMesh>,
    {
        let meshes = self.meshes.get_or_insert_with(|| upload(ctx));
        for mesh in meshes.iter() {
            self.renderer.draw(ctx, target, mesh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_colors_are_opaque() {
        assert_eq!(TEAL.to_array(), [0.2, 0.3, 0.3, 1.0]);
        assert_eq!(LIGHT_BLUE.to_array(), [0.6, 0.8, 1.0, 1.0]);
    }

    #[test]
    fn exercises_use_a_linear_swapchain() {
        let init = gpu_init();
        assert!(!init.prefer_srgb);
        assert_eq!(init.present_mode, GpuInit::default().present_mode);
    }

    #[test]
    fn unrelated_events_are_not_escape() {
        assert!(!is_escape(&WindowEvent::CloseRequested));
        assert!(!is_escape(&WindowEvent::Focused(true)));
    }
}
