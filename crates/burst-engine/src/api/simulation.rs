use crate::api::config::SimConfig;
use crate::api::error::ConfigError;
use crate::components::particle::ParticleParams;
use crate::input::command::Command;
use crate::renderer::camera::OrbitCamera;
use crate::renderer::instance::RenderBuffer;
use crate::systems::control::{ControlState, Phase};
use crate::systems::particles::{ParticleSystem, SweepReport, TimeDirection};
use crate::systems::render::build_render_buffer;
use crate::systems::rng::Rng;

/// What the host loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// The whole simulation: particles, control state and random stream.
/// Owned by the top-level loop and passed by reference to tick and draw.
pub struct Simulation {
    pub particles: ParticleSystem,
    pub control: ControlState,
    rng: Rng,
    config: SimConfig,
}

impl Simulation {
    /// Validate the config and allocate the particle arena.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let lattice = config.validate()?;
        let params = ParticleParams {
            lifespan: config.lifespan,
            mass: config.mass,
            gravity: config.gravity,
            damping: config.damping,
        };
        let camera = OrbitCamera::new(
            config.camera_distance,
            config.field_of_view_degrees,
            config.near_plane,
        );
        log::debug!(
            "simulation: {} particles on a {}³ lattice, seed {}",
            lattice.capacity(),
            lattice.side(),
            config.seed
        );
        Ok(Self {
            particles: ParticleSystem::new(lattice, params, config.velocity_limit),
            control: ControlState::new(camera, config.rotation_step_degrees, config.camera_step),
            rng: Rng::new(config.seed),
            config,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.control.phase
    }

    /// Apply one user command.
    pub fn handle(&mut self, command: Command) -> Outcome {
        match command {
            Command::Explode => self.explode(),
            Command::ToggleFreeze => self.control.toggle_freeze(),
            Command::ToggleGravityDamping => {
                if !self.control.toggle_gravity_damping() {
                    log::debug!("gravity/damping can only change while showing the cube");
                }
            }
            Command::BeginReverse => self.begin_reverse(),
            Command::CameraIn => {
                if !self.control.camera_in() {
                    log::debug!("camera already at closest distance");
                }
            }
            Command::CameraOut => self.control.camera_out(),
            Command::RotateRight => {
                self.control.rotate_right();
            }
            Command::RotateLeft => {
                self.control.rotate_left();
            }
            Command::Quit => {
                log::info!("quit requested");
                return Outcome::Quit;
            }
        }
        Outcome::Continue
    }

    /// From the cube: lay out (first time) or re-randomize, then explode.
    /// Always: reactivate every particle, stop auto-rotating, unfreeze.
    fn explode(&mut self) {
        if self.control.phase == Phase::Cube {
            if self.particles.is_active() {
                self.particles.randomize_velocity(&mut self.rng);
            } else {
                self.particles.initialize(&mut self.rng);
            }
            self.control.phase = Phase::Exploding;
            log::info!("explode: {} particles", self.particles.len());
        }
        self.particles.reactivate();
        self.control.auto_rotate = false;
        self.control.frozen = false;
    }

    fn begin_reverse(&mut self) {
        if self.control.phase == Phase::Exploding {
            self.control.phase = Phase::Reversing;
            log::info!("reversing toward the cube");
        }
        self.particles.reactivate();
    }

    /// Idle callback work, once per frame regardless of freeze.
    pub fn idle(&mut self) {
        self.control.idle();
    }

    /// Advance the particles one frame. Skipped while frozen or showing the cube.
    /// Returns the sweep summary when particles were updated.
    pub fn tick(&mut self) -> Option<SweepReport> {
        if self.control.frozen {
            return None;
        }
        let direction = match self.control.phase {
            Phase::Cube => return None,
            Phase::Exploding => TimeDirection::Forward,
            Phase::Reversing => TimeDirection::Reverse,
        };
        let report = self.particles.update(direction);
        if direction == TimeDirection::Reverse && report.rewound() {
            self.control.phase = Phase::Cube;
            self.control.auto_rotate = true;
            log::info!("reverse complete, back to cube");
        }
        Some(report)
    }

    /// One full frame of simulation work: idle, then tick.
    pub fn step(&mut self) -> Option<SweepReport> {
        self.idle();
        self.tick()
    }

    /// Fill `buffer` with this frame's cubes.
    pub fn build_render(&self, buffer: &mut RenderBuffer) {
        build_render_buffer(&self.particles, &self.control, buffer);
    }
}
