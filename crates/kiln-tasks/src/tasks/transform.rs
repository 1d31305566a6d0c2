use glam::{Mat4, Vec3};
use kiln_engine::core::{App, AppControl, FrameCtx};
use kiln_engine::geometry::{triangle, VertexKind};
use kiln_engine::render::GpuMesh;
use kiln_engine::transform::{Camera, Transform};
use winit::event::WindowEvent;
use winit::window::WindowId;

use super::{is_escape, LazyMeshes, TEAL};

/// Axis the 3D variant spins around.
const SPIN_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);

/// Orange triangle placed by a model matrix.
pub struct TransformTask {
    animate: bool,
    three_d: bool,
    camera: Camera,
    meshes: LazyMeshes,
}

impl TransformTask {
    pub fn new(animate: bool, three_d: bool) -> Self {
        Self {
            animate,
            three_d,
            camera: Camera::default(),
            meshes: LazyMeshes::new(VertexKind::Position),
        }
    }

    /// Clip-space matrix for the triangle at `elapsed` seconds.
    fn matrix(&self, elapsed: f32, aspect: f32) -> Mat4 {
        if self.three_d {
            let model = Transform::IDENTITY.rotated_axis(SPIN_AXIS, elapsed);
            return self.camera.view_projection(aspect) * model.to_matrix();
        }

        let mut model = Transform::from_translation_2d(0.5, 0.5);
        if self.animate {
            model = model
                .rotated_z(elapsed)
                .scaled_uniform(0.75 + 0.25 * elapsed.sin());
        }
        model.to_matrix()
    }
}

impl App for TransformTask {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        AppControl::exit_if(is_escape(event))
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let aspect = ctx.window.viewport().aspect_ratio();
        let matrix = self.matrix(ctx.time.elapsed, aspect);
        self.meshes.renderer_mut().set_transform(matrix);

        let meshes = &mut self.meshes;
        ctx.render(TEAL, |rctx, target| {
            meshes.draw(rctx, target, |rctx| {
                vec![GpuMesh::upload(rctx.device, "triangle", &triangle())]
            });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-5;

    fn apex(m: Mat4) -> Vec3 {
        let clip = m * Vec4::new(0.0, 0.5, 0.0, 1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn static_transform_only_translates() {
        let task = TransformTask::new(false, false);
        for t in [0.0, 1.0, 10.0] {
            let p = apex(task.matrix(t, 4.0 / 3.0));
            assert!((p - Vec3::new(0.5, 1.0, 0.0)).length() < EPS, "{p:?}");
        }
    }

    #[test]
    fn animation_starts_at_three_quarter_scale() {
        let task = TransformTask::new(true, false);
        let p = apex(task.matrix(0.0, 1.0));
        assert!((p - Vec3::new(0.5, 0.875, 0.0)).length() < EPS, "{p:?}");
    }

    #[test]
    fn animation_rotates_over_time() {
        let task = TransformTask::new(true, false);
        let a = apex(task.matrix(0.0, 1.0));
        let b = apex(task.matrix(1.0, 1.0));
        assert!((a - b).length() > 0.1);
    }

    #[test]
    fn three_d_keeps_triangle_in_front_of_camera() {
        let task = TransformTask::new(false, true);
        for t in [0.0, 0.7, 2.5] {
            let p = apex(task.matrix(t, 4.0 / 3.0));
            assert!(p.z > 0.0 && p.z < 1.0, "{p:?}");
            assert!(p.x.abs() <= 1.0 && p.y.abs() <= 1.0, "{p:?}");
        }
    }
}
