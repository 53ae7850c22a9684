//! A single unit cube of the exploding lattice.

use glam::Vec3;

/// Physical constants stamped onto every particle at layout time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleParams {
    pub lifespan: u32,
    pub mass: f32,
    pub gravity: f32,
    pub damping: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            lifespan: 255,
            mass: 1.0,
            gravity: -1.3,
            damping: 0.88,
        }
    }
}

/// Kinematic and visual state of one cube.
///
/// `position` is the lattice coordinate and never changes; displacement is
/// derived from `velocity × time` when drawing (see [`Particle::display_position`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// RGB channels, 255 = white.
    pub color: [u8; 3],
    pub lifespan: u32,
    /// Frames elapsed since the explosion. Grows forward, shrinks in reverse.
    pub time: u32,
    pub mass: f32,
    /// Carried for completeness; the tick does not apply it.
    pub gravity: f32,
    pub damping: f32,
    pub active: bool,
}

impl Particle {
    pub const WHITE: [u8; 3] = [255, 255, 255];

    /// A fresh white particle at rest on the lattice.
    pub fn new(position: Vec3, params: ParticleParams) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            color: Self::WHITE,
            lifespan: params.lifespan,
            time: 0,
            mass: params.mass,
            gravity: params.gravity,
            damping: params.damping,
            active: true,
        }
    }

    /// Per-channel color change per frame: `|v| + 1`, whole units.
    fn color_step(&self) -> [u8; 3] {
        let step = |v: f32| (v.abs().min(u8::MAX as f32) as u8).saturating_add(1);
        [step(self.velocity.x), step(self.velocity.y), step(self.velocity.z)]
    }

    /// One forward frame: fade toward black, age, expire past the lifespan.
    pub fn advance(&mut self) {
        let step = self.color_step();
        for (channel, s) in self.color.iter_mut().zip(step) {
            *channel = channel.saturating_sub(s);
        }
        self.time += 1;
        if self.time > self.lifespan {
            self.active = false;
        }
    }

    /// One reverse frame: brighten toward white and walk time back.
    /// Does nothing once `time` is already zero. Returns whether time is still positive.
    pub fn rewind(&mut self) -> bool {
        if self.time == 0 {
            return false;
        }
        let step = self.color_step();
        for (channel, s) in self.color.iter_mut().zip(step) {
            *channel = channel.saturating_add(s);
        }
        self.time -= 1;
        self.time > 0
    }

    /// Draw-time offset of this particle from the system origin.
    /// With damping on, elapsed time is scaled by the damping factor.
    pub fn display_position(&self, origin: Vec3, damping_on: bool) -> Vec3 {
        let t = if damping_on {
            self.time as f32 * self.damping
        } else {
            self.time as f32
        };
        origin + self.velocity * t
    }

    /// Color normalized to [0, 1] for the renderer.
    pub fn normalized_color(&self) -> [f32; 3] {
        self.color.map(|c| c as f32 / 255.0)
    }
}
