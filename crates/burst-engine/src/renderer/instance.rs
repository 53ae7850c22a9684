use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Per-cube render data read by the external renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CubeInstance {
    /// Minimum corner in world space.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Edge length in world units (1.0 per particle).
    pub size: f32,
    /// Color, normalized to [0, 1].
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub _pad: f32,
}

impl CubeInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(corner: Vec3, size: f32, color: [f32; 3]) -> Self {
        Self {
            x: corner.x,
            y: corner.y,
            z: corner.z,
            size,
            r: color[0],
            g: color[1],
            b: color[2],
            _pad: 0.0,
        }
    }

    pub fn corner(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn color(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Cubes to draw this frame.
pub struct RenderBuffer {
    pub instances: Vec<CubeInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: CubeInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Flat float view of the instances.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for shared-memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
