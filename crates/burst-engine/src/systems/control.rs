//! Interactive mode flags and camera state.

use crate::renderer::camera::OrbitCamera;

/// What the simulation is currently showing. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Solid cube, no particle updates.
    #[default]
    Cube,
    /// Particles flying outward and fading.
    Exploding,
    /// Particles flying back toward the lattice and brightening.
    Reversing,
}

impl Phase {
    pub fn is_exploded(self) -> bool {
        self != Phase::Cube
    }

    /// Numeric code written into the shared header.
    pub fn code(self) -> f32 {
        match self {
            Phase::Cube => 0.0,
            Phase::Exploding => 1.0,
            Phase::Reversing => 2.0,
        }
    }
}

/// Mode flags and camera, owned by the top-level loop.
#[derive(Debug, Clone)]
pub struct ControlState {
    pub phase: Phase,
    /// Particle ticks are skipped while frozen.
    pub frozen: bool,
    /// The camera turns on its own every frame; manual rotation is locked out.
    pub auto_rotate: bool,
    pub gravity_on: bool,
    /// Scales draw-time displacement by each particle's damping factor.
    pub damping_on: bool,
    pub camera: OrbitCamera,
    /// Degrees per manual press or auto-rotate frame.
    pub rotation_step: f32,
    pub camera_step: f32,
}

impl ControlState {
    pub fn new(camera: OrbitCamera, rotation_step: f32, camera_step: f32) -> Self {
        Self {
            phase: Phase::Cube,
            frozen: false,
            auto_rotate: true,
            gravity_on: false,
            damping_on: false,
            camera,
            rotation_step,
            camera_step,
        }
    }

    pub fn toggle_freeze(&mut self) {
        self.frozen = !self.frozen;
    }

    /// Flip gravity and damping together. Only allowed while showing the cube.
    pub fn toggle_gravity_damping(&mut self) -> bool {
        if self.phase.is_exploded() {
            return false;
        }
        self.gravity_on = !self.gravity_on;
        self.damping_on = self.gravity_on;
        true
    }

    pub fn camera_in(&mut self) -> bool {
        self.camera.zoom_in(self.camera_step)
    }

    pub fn camera_out(&mut self) {
        self.camera.zoom_out(self.camera_step);
    }

    /// Manual rotation, refused while auto-rotating.
    pub fn rotate_right(&mut self) -> bool {
        if self.auto_rotate {
            return false;
        }
        self.camera.rotate(-self.rotation_step);
        true
    }

    pub fn rotate_left(&mut self) -> bool {
        if self.auto_rotate {
            return false;
        }
        self.camera.rotate(self.rotation_step);
        true
    }

    /// Per-frame idle work: auto-rotate the camera.
    pub fn idle(&mut self) {
        if self.auto_rotate {
            self.camera.rotate(self.rotation_step);
        }
    }
}
