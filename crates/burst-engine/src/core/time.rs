/// Fixed-rate frame clock.
/// Turns variable host frame deltas into a whole number of simulation ticks.
pub struct FrameClock {
    dt: f32,
    max_steps: u32,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
        }
    }

    /// Add elapsed frame time. Returns the number of ticks to run now.
    /// Backlog beyond `max_steps` ticks is dropped.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }
}
