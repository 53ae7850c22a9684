//! The fixed-size particle arena and its per-frame update rule.

use glam::Vec3;

use crate::components::particle::{Particle, ParticleParams};
use crate::core::lattice::Lattice;
use crate::systems::rng::Rng;

/// Sign pattern applied to a particle's velocity, selected by `index % 8`.
/// Spreads the explosion evenly over the eight octants.
pub const OCTANT_SIGNS: [[f32; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
];

/// Which way simulated time flows during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeDirection {
    Forward,
    Reverse,
}

/// Summary of one update sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Particles still active after the sweep.
    pub active: usize,
    /// Active particles whose `time` is still above zero.
    pub in_flight: usize,
}

impl SweepReport {
    /// A reverse sweep is complete once nothing is left in flight.
    pub fn rewound(&self) -> bool {
        self.in_flight == 0
    }
}

/// Fixed-capacity particle collection laid out on a cubic lattice.
pub struct ParticleSystem {
    particles: Vec<Particle>,
    lattice: Lattice,
    origin: Vec3,
    params: ParticleParams,
    velocity_limit: u32,
    active: bool,
}

impl ParticleSystem {
    /// Allocate every particle up front. Particles stay dormant until
    /// [`initialize`](Self::initialize) runs on the first explosion.
    pub fn new(lattice: Lattice, params: ParticleParams, velocity_limit: u32) -> Self {
        let particles = lattice
            .positions()
            .map(|pos| {
                let mut p = Particle::new(pos, params);
                p.active = false;
                p
            })
            .collect();
        Self {
            particles,
            lattice,
            origin: lattice.origin(),
            params,
            velocity_limit,
            active: false,
        }
    }

    /// Lay out every particle white and at rest on the lattice, then
    /// randomize velocities. Only the first call does anything; later
    /// explosions go through [`randomize_velocity`](Self::randomize_velocity).
    pub fn initialize(&mut self, rng: &mut Rng) {
        if self.active {
            log::warn!("particle system already initialized; ignoring");
            return;
        }
        for (i, p) in self.particles.iter_mut().enumerate() {
            *p = Particle::new(self.lattice.position(i), self.params);
        }
        self.randomize_velocity(rng);
        self.active = true;
    }

    /// Draw three magnitudes in [0, velocity_limit) per particle and sign
    /// them by octant. Consumes the stream in particle order, x then y then z.
    pub fn randomize_velocity(&mut self, rng: &mut Rng) {
        let limit = self.velocity_limit;
        for (i, p) in self.particles.iter_mut().enumerate() {
            let magnitude = Vec3::new(
                rng.magnitude(limit),
                rng.magnitude(limit),
                rng.magnitude(limit),
            );
            p.velocity = magnitude * Vec3::from_array(OCTANT_SIGNS[i % 8]);
        }
    }

    /// Mark every particle active again. Time and color are left alone.
    pub fn reactivate(&mut self) {
        for p in self.particles.iter_mut().filter(|p| !p.active) {
            p.active = true;
        }
    }

    /// Advance every active particle one frame in `direction`.
    ///
    /// Gravity and damping are not applied here: particles keep their
    /// velocity and lattice position, and displacement is computed at draw time.
    pub fn update(&mut self, direction: TimeDirection) -> SweepReport {
        let mut report = SweepReport::default();
        for p in self.particles.iter_mut().filter(|p| p.active) {
            match direction {
                TimeDirection::Forward => p.advance(),
                TimeDirection::Reverse => {
                    p.rewind();
                }
            }
            if p.active {
                report.active += 1;
                if p.time > 0 {
                    report.in_flight += 1;
                }
            }
        }
        report
    }

    /// Whether the lattice has been laid out (false until the first explosion).
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.active)
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    /// World-space offset of the lattice's minimum corner.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(capacity: usize) -> ParticleSystem {
        let lattice = Lattice::from_capacity(capacity).unwrap();
        ParticleSystem::new(lattice, ParticleParams::default(), 30)
    }

    #[test]
    fn count_fixed_at_construction() {
        let mut ps = system(27);
        assert_eq!(ps.len(), 27);
        assert_eq!(ps.active_count(), 0);
        ps.initialize(&mut Rng::new(0));
        assert_eq!(ps.len(), 27);
        assert_eq!(ps.active_count(), 27);
    }

    #[test]
    fn initialize_sets_defaults() {
        let mut ps = system(8);
        ps.initialize(&mut Rng::new(3));
        assert!(ps.is_active());
        for p in ps.particles() {
            assert_eq!(p.color, Particle::WHITE);
            assert_eq!(p.time, 0);
            assert_eq!(p.lifespan, 255);
            assert_eq!(p.mass, 1.0);
            assert_eq!(p.damping, 0.88);
            assert_eq!(p.gravity, -1.3);
            assert!(p.active);
        }
    }

    #[test]
    fn second_initialize_is_ignored() {
        let mut ps = system(8);
        let mut rng = Rng::new(3);
        ps.initialize(&mut rng);
        ps.update(TimeDirection::Forward);
        ps.initialize(&mut rng);
        assert!(ps.particles().iter().all(|p| p.time == 1));
    }

    #[test]
    fn velocities_follow_octant_signs() {
        let mut ps = system(64);
        ps.initialize(&mut Rng::new(11));
        for (i, p) in ps.particles().iter().enumerate() {
            let signs = OCTANT_SIGNS[i % 8];
            let v = p.velocity.to_array();
            for axis in 0..3 {
                assert!(v[axis].abs() < 30.0);
                if v[axis] != 0.0 {
                    assert_eq!(v[axis].signum(), signs[axis], "particle {} axis {}", i, axis);
                }
            }
        }
    }

    #[test]
    fn randomize_is_deterministic_per_seed() {
        let mut a = system(27);
        let mut b = system(27);
        a.initialize(&mut Rng::new(99));
        b.initialize(&mut Rng::new(99));
        let bits = |ps: &ParticleSystem| -> Vec<[u32; 3]> {
            ps.particles()
                .iter()
                .map(|p| p.velocity.to_array().map(f32::to_bits))
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn forward_sweep_counts_survivors() {
        let mut ps = system(8);
        ps.initialize(&mut Rng::new(1));
        let report = ps.update(TimeDirection::Forward);
        assert_eq!(report.active, 8);
        assert_eq!(report.in_flight, 8);
    }

    #[test]
    fn reverse_never_wraps_time() {
        let mut ps = system(27);
        ps.initialize(&mut Rng::new(5));
        for _ in 0..100 {
            ps.update(TimeDirection::Forward);
        }
        ps.reactivate();
        for _ in 0..150 {
            ps.update(TimeDirection::Reverse);
        }
        assert!(ps.particles().iter().all(|p| p.time == 0));
    }

    #[test]
    fn all_expire_after_lifespan() {
        let mut ps = system(8);
        ps.initialize(&mut Rng::new(0));
        for _ in 0..300 {
            ps.update(TimeDirection::Forward);
        }
        assert!(ps.particles().iter().all(|p| !p.active));
    }

    #[test]
    fn expired_particles_stay_expired() {
        let mut ps = system(8);
        ps.initialize(&mut Rng::new(0));
        for _ in 0..256 {
            ps.update(TimeDirection::Forward);
        }
        assert_eq!(ps.active_count(), 0);
        for _ in 0..50 {
            let report = ps.update(TimeDirection::Forward);
            assert_eq!(report.active, 0);
        }
        assert_eq!(ps.active_count(), 0);
    }

    #[test]
    fn reactivate_keeps_time_and_color() {
        let mut ps = system(8);
        ps.initialize(&mut Rng::new(0));
        for _ in 0..256 {
            ps.update(TimeDirection::Forward);
        }
        ps.reactivate();
        assert_eq!(ps.active_count(), 8);
        assert!(ps.particles().iter().all(|p| p.time == 256));
    }

    #[test]
    fn reverse_walks_time_to_zero() {
        let mut ps = system(8);
        ps.initialize(&mut Rng::new(4));
        for _ in 0..12 {
            ps.update(TimeDirection::Forward);
        }
        for i in 0..12 {
            let report = ps.update(TimeDirection::Reverse);
            assert_eq!(report.rewound(), i == 11);
        }
        assert!(ps.particles().iter().all(|p| p.time == 0 && p.color == Particle::WHITE));
    }

    #[test]
    fn reverse_on_untouched_explosion_is_already_rewound() {
        let mut ps = system(8);
        ps.initialize(&mut Rng::new(4));
        let report = ps.update(TimeDirection::Reverse);
        assert!(report.rewound());
    }
}
