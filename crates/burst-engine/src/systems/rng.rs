//! Seedable pseudo-random number generator (xorshift64).
//! The same seed always yields the same velocity assignment.

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // xorshift never leaves the all-zero state
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Random integer in [0, upper_bound). Returns 0 for an empty range.
    pub fn next_below(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Whole-unit speed magnitude in [0, limit), as a float.
    pub fn magnitude(&mut self, limit: u32) -> f32 {
        self.next_below(limit) as f32
    }
}
