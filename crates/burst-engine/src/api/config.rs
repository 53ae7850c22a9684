use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::core::lattice::Lattice;

/// Largest particle arena a config may ask for (a 100³ lattice).
pub const MAX_CAPACITY: usize = 1_000_000;

/// Configuration for a simulation, usually supplied by the host page as JSON.
/// Missing fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of particles. Must be a perfect cube (default: 9261 = 21³).
    pub capacity: usize,
    /// Seed for velocity randomization (default: 0).
    pub seed: u64,
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum fixed steps run for a single frame (default: 10).
    pub max_steps_per_frame: u32,
    /// Exclusive upper bound on each velocity component's magnitude (default: 30).
    pub velocity_limit: u32,
    /// Frames a particle lives before it goes inactive (default: 255).
    pub lifespan: u32,
    /// Per-particle mass (default: 1).
    pub mass: f32,
    /// Per-particle gravity (default: -1.3). Carried, not applied by the tick.
    pub gravity: f32,
    /// Per-particle damping factor (default: 0.88). Only scales draw-time displacement.
    pub damping: f32,
    /// Initial camera distance from the focal point (default: 1000).
    pub camera_distance: f32,
    /// Camera zoom step (default: 30).
    pub camera_step: f32,
    /// Rotation per manual key press or auto-rotate frame, in degrees (default: 0.3).
    pub rotation_step_degrees: f32,
    /// Vertical field of view in degrees (default: 45).
    pub field_of_view_degrees: f32,
    /// Near clip plane (default: 0.1).
    pub near_plane: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity: 9261,
            seed: 0,
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            velocity_limit: 30,
            lifespan: 255,
            mass: 1.0,
            gravity: -1.3,
            damping: 0.88,
            camera_distance: 1000.0,
            camera_step: 30.0,
            rotation_step_degrees: 0.3,
            field_of_view_degrees: 45.0,
            near_plane: 0.1,
        }
    }
}

impl SimConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every field and compute the particle lattice.
    pub fn validate(&self) -> Result<Lattice, ConfigError> {
        if self.velocity_limit == 0 || self.velocity_limit > 255 {
            return Err(ConfigError::InvalidValue {
                field: "velocity_limit",
                reason: "must be between 1 and 255",
            });
        }
        if self.lifespan == 0 {
            return Err(ConfigError::InvalidValue {
                field: "lifespan",
                reason: "must be at least one frame",
            });
        }
        if !(self.fixed_dt > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "fixed_dt",
                reason: "must be positive",
            });
        }
        if self.max_steps_per_frame == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_steps_per_frame",
                reason: "must be at least one",
            });
        }
        if !(self.camera_distance > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "camera_distance",
                reason: "must be positive",
            });
        }
        if !(self.camera_step > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "camera_step",
                reason: "must be positive",
            });
        }
        if !(self.near_plane > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "near_plane",
                reason: "must be positive",
            });
        }
        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::InvalidValue {
                field: "capacity",
                reason: "must be at most 1000000 (100³)",
            });
        }
        Lattice::from_capacity(self.capacity)
    }
}
