use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective camera orbiting the focal point around the Y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Distance from the focal point along -Z. Also the far clip plane.
    pub distance: f32,
    /// Rotation around the Y axis in degrees.
    pub angle_degrees: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip plane.
    pub near: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl OrbitCamera {
    pub fn new(distance: f32, fov_degrees: f32, near: f32) -> Self {
        Self {
            distance,
            angle_degrees: 0.0,
            fov_degrees,
            near,
        }
    }

    /// Move toward the focal point. Refused if it would reach or pass it.
    pub fn zoom_in(&mut self, step: f32) -> bool {
        if self.distance - step > 0.0 {
            self.distance -= step;
            true
        } else {
            false
        }
    }

    /// Move away from the focal point.
    pub fn zoom_out(&mut self, step: f32) {
        self.distance += step;
    }

    /// Rotate around Y. Positive turns left, negative right.
    pub fn rotate(&mut self, degrees: f32) {
        self.angle_degrees += degrees;
    }

    /// Translate back by `distance`, then spin around Y.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
            * Mat4::from_rotation_y(self.angle_degrees.to_radians())
    }

    /// Perspective projection with the far plane at the camera distance.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let far = self.distance.max(self.near + f32::EPSILON);
        Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), aspect, self.near, far)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj(aspect).to_cols_array_2d(),
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(1000.0, 45.0, 0.1)
    }
}
