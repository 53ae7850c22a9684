use crate::renderer::instance::{CubeInstance, RenderBuffer};
use crate::systems::control::{ControlState, Phase};
use crate::systems::particles::ParticleSystem;

/// Build this frame's cubes.
///
/// Showing the cube: one white cube of edge `side` at the system origin.
/// Otherwise: one unit cube per active particle, placed at its draw-time
/// displacement plus its lattice offset.
pub fn build_render_buffer(
    particles: &ParticleSystem,
    control: &ControlState,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    let origin = particles.origin();
    if control.phase == Phase::Cube {
        let side = particles.lattice().side() as f32;
        buffer.push(CubeInstance::new(origin, side, [1.0, 1.0, 1.0]));
        return;
    }

    for p in particles.iter_active() {
        let corner = p.display_position(origin, control.damping_on) + p.position;
        buffer.push(CubeInstance::new(corner, 1.0, p.normalized_color()));
    }
}
