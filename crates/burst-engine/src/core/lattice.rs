use glam::Vec3;

use crate::api::error::ConfigError;

/// Cubic lattice the unexploded particles sit on.
/// Validated once at construction; `side³` is always the particle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    side: usize,
}

impl Lattice {
    /// Build a lattice holding exactly `capacity` cells.
    /// Rejects capacities that are not a perfect cube instead of padding or truncating.
    pub fn from_capacity(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let side = integer_cbrt(capacity);
        if side.pow(3) == capacity {
            Ok(Self { side })
        } else {
            Err(ConfigError::CapacityNotCube {
                capacity,
                lower: side.pow(3),
                upper: (side + 1).checked_pow(3).unwrap_or(usize::MAX),
            })
        }
    }

    /// Number of cells along one edge.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells.
    pub fn capacity(&self) -> usize {
        self.side.pow(3)
    }

    /// Lattice coordinate of the cell at `index`.
    /// Cells are swept x first, then z, then y.
    pub fn position(&self, index: usize) -> Vec3 {
        let x = index % self.side;
        let z = (index / self.side) % self.side;
        let y = index / (self.side * self.side);
        Vec3::new(x as f32, y as f32, z as f32)
    }

    /// Iterate every cell coordinate in sweep order.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.capacity()).map(move |i| self.position(i))
    }

    /// Offset that centers the cube on the focal point.
    pub fn origin(&self) -> Vec3 {
        Vec3::splat(-(self.side as f32) / 2.0)
    }
}

/// Largest `r` with `r³ <= n`.
fn integer_cbrt(n: usize) -> usize {
    let mut r = (n as f64).cbrt().round() as usize;
    while r.checked_pow(3).map_or(true, |c| c > n) {
        r -= 1;
    }
    while (r + 1).checked_pow(3).is_some_and(|c| c <= n) {
        r += 1;
    }
    r
}
