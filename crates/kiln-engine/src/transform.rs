//! Model transforms and the camera used by the 3D variant of the transform task.
//!
//! Matrices are `glam::Mat4` (column-major), the layout WGSL `mat4x4<f32>` uniforms expect.

use glam::{Mat4, Quat, Vec3};

/// Translation, rotation and scale, applied as `T * R * S`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pure 2D translation in the XY plane.
    #[inline]
    pub fn from_translation_2d(x: f32, y: f32) -> Self {
        Self::IDENTITY.translated(Vec3::new(x, y, 0.0))
    }

    #[inline]
    pub fn translated(mut self, by: Vec3) -> Self {
        self.translation += by;
        self
    }

    /// Rotates about +Z (counter-clockwise in NDC).
    #[inline]
    pub fn rotated_z(self, radians: f32) -> Self {
        self.rotated(Quat::from_rotation_z(radians))
    }

    /// Rotates about an arbitrary axis.
    ///
    /// A zero-length axis leaves the rotation unchanged.
    pub fn rotated_axis(self, axis: Vec3, radians: f32) -> Self {
        match axis.try_normalize() {
            Some(axis) => self.rotated(Quat::from_axis_angle(axis, radians)),
            None => self,
        }
    }

    #[inline]
    pub fn rotated(mut self, by: Quat) -> Self {
        self.rotation = (by * self.rotation).normalize();
        self
    }

    #[inline]
    pub fn scaled(mut self, by: Vec3) -> Self {
        self.scale *= by;
        self
    }

    #[inline]
    pub fn scaled_uniform(self, by: f32) -> Self {
        self.scaled(Vec3::splat(by))
    }

    #[inline]
    pub fn to_matrix(self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Perspective camera looking at the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_y_radians: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            fov_y_radians: 45f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    /// Projection * view for a surface of the given aspect ratio.
    ///
    /// Uses wgpu's 0..1 clip-space depth range.
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        let projection = Mat4::perspective_rh(self.fov_y_radians, aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        projection * view
    }
}
