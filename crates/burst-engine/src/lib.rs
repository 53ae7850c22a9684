pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{SimConfig, MAX_CAPACITY};
pub use api::error::ConfigError;
pub use api::simulation::{Outcome, Simulation};
pub use components::particle::{Particle, ParticleParams};
pub use core::lattice::Lattice;
pub use core::time::FrameClock;
pub use systems::control::{ControlState, Phase};
pub use systems::particles::{ParticleSystem, SweepReport, TimeDirection, OCTANT_SIGNS};
pub use systems::rng::Rng;
pub use renderer::camera::{CameraUniform, OrbitCamera};
pub use renderer::instance::{CubeInstance, RenderBuffer};
pub use renderer::quads::{build_face_vertices, unit_cube_faces, unit_cube_triangles};
pub use input::command::Command;
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::{ProtocolLayout, HEADER_FLOATS};
