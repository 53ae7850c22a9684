//! Shared buffer layout.
//! Must stay in sync with the host-side `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Instances: max_instances × 8 floats]
//! ```
//!
//! The header is rewritten every frame; capacities never change after init.

use crate::api::simulation::Simulation;
use crate::renderer::instance::CubeInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_PHASE: usize = 4;
pub const HEADER_FROZEN: usize = 5;
pub const HEADER_GRAVITY_ON: usize = 6;
pub const HEADER_DAMPING_ON: usize = 7;
pub const HEADER_CAMERA_DISTANCE: usize = 8;
pub const HEADER_CAMERA_ANGLE: usize = 9;
pub const HEADER_LATTICE_SIDE: usize = 10;
pub const HEADER_PROTOCOL_VERSION: usize = 11;
pub const HEADER_QUIT_REQUESTED: usize = 12;
pub const HEADER_AUTO_ROTATE: usize = 13;
pub const HEADER_FIELD_OF_VIEW: usize = 14;
pub const HEADER_NEAR_PLANE: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

fn flag(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

/// Buffer layout for a given instance capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub instance_data_floats: usize,
    pub instance_data_offset: usize,
    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize) -> Self {
        let instance_data_floats = max_instances * CubeInstance::FLOATS;
        let instance_data_offset = HEADER_FLOATS;
        let buffer_total_floats = instance_data_offset + instance_data_floats;
        Self {
            max_instances,
            instance_data_floats,
            instance_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// One instance per particle is the most a frame can produce.
    pub fn for_simulation(sim: &Simulation) -> Self {
        Self::new(sim.particles.len().max(1))
    }
}

/// Snapshot of per-frame state the host needs besides the instances.
pub fn write_header(
    header: &mut [f32; HEADER_FLOATS],
    layout: &ProtocolLayout,
    sim: &Simulation,
    frame: u64,
    instance_count: u32,
    quit_requested: bool,
) {
    let control = &sim.control;
    header[HEADER_LOCK] = 0.0;
    header[HEADER_FRAME_COUNTER] = frame as f32;
    header[HEADER_MAX_INSTANCES] = layout.max_instances as f32;
    header[HEADER_INSTANCE_COUNT] = instance_count as f32;
    header[HEADER_PHASE] = control.phase.code();
    header[HEADER_FROZEN] = flag(control.frozen);
    header[HEADER_GRAVITY_ON] = flag(control.gravity_on);
    header[HEADER_DAMPING_ON] = flag(control.damping_on);
    header[HEADER_CAMERA_DISTANCE] = control.camera.distance;
    header[HEADER_CAMERA_ANGLE] = control.camera.angle_degrees;
    header[HEADER_LATTICE_SIDE] = sim.particles.lattice().side() as f32;
    header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    header[HEADER_QUIT_REQUESTED] = flag(quit_requested);
    header[HEADER_AUTO_ROTATE] = flag(control.auto_rotate);
    header[HEADER_FIELD_OF_VIEW] = control.camera.fov_degrees;
    header[HEADER_NEAR_PLANE] = control.camera.near;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::SimConfig;
    use crate::input::command::Command;

    #[test]
    fn layout_sizes() {
        let layout = ProtocolLayout::new(100);
        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(layout.instance_data_floats, 800);
        assert_eq!(layout.buffer_total_floats, 816);
        assert_eq!(layout.buffer_total_bytes, 816 * 4);
    }

    #[test]
    fn layout_fits_every_particle() {
        let sim = Simulation::new(SimConfig { capacity: 27, ..SimConfig::default() }).unwrap();
        assert_eq!(ProtocolLayout::for_simulation(&sim).max_instances, 27);
    }

    #[test]
    fn header_reflects_state() {
        let mut sim = Simulation::new(SimConfig { capacity: 8, ..SimConfig::default() }).unwrap();
        sim.handle(Command::Explode);
        sim.handle(Command::ToggleFreeze);
        let layout = ProtocolLayout::for_simulation(&sim);

        let mut header = [0.0; HEADER_FLOATS];
        write_header(&mut header, &layout, &sim, 42, 8, false);

        assert_eq!(header[HEADER_FRAME_COUNTER], 42.0);
        assert_eq!(header[HEADER_MAX_INSTANCES], 8.0);
        assert_eq!(header[HEADER_INSTANCE_COUNT], 8.0);
        assert_eq!(header[HEADER_PHASE], 1.0);
        assert_eq!(header[HEADER_FROZEN], 1.0);
        assert_eq!(header[HEADER_GRAVITY_ON], 0.0);
        assert_eq!(header[HEADER_CAMERA_DISTANCE], 1000.0);
        assert_eq!(header[HEADER_LATTICE_SIDE], 2.0);
        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_QUIT_REQUESTED], 0.0);
        assert_eq!(header[HEADER_AUTO_ROTATE], 0.0);
    }
}
