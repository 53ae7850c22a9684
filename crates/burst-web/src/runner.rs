use burst_engine::bridge::protocol::{write_header, HEADER_FLOATS};
use burst_engine::{
    unit_cube_triangles, Command, FrameClock, InputEvent, InputQueue, Outcome, ProtocolLayout,
    RenderBuffer, SimConfig, Simulation,
};

/// Owns the simulation and everything the host reads back each frame.
///
/// The page keeps one runner in a `thread_local!` and drives it through the
/// free functions exported in `lib.rs`.
pub struct SimRunner {
    sim: Simulation,
    input: InputQueue,
    render_buffer: RenderBuffer,
    clock: FrameClock,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    /// Unit cube triangle list (x, y, z), shared by every instance.
    cube_template: Vec<f32>,
    frame: u64,
    quit_requested: bool,
}

impl SimRunner {
    pub fn new(sim: Simulation) -> Self {
        let config = sim.config();
        let clock = FrameClock::new(config.fixed_dt, config.max_steps_per_frame);
        let layout = ProtocolLayout::for_simulation(&sim);
        let render_buffer = RenderBuffer::with_capacity(layout.max_instances);

        let mut runner = Self {
            sim,
            input: InputQueue::new(),
            render_buffer,
            clock,
            layout,
            header: [0.0; HEADER_FLOATS],
            cube_template: unit_cube_triangles(),
            frame: 0,
            quit_requested: false,
        };
        runner.refresh_output();
        runner
    }

    /// Build from an optional JSON config. A bad config is logged and the
    /// defaults are used instead.
    pub fn from_json(config_json: Option<&str>) -> Self {
        let config = match config_json.map(SimConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::error!("config rejected, using defaults: {}", e);
                SimConfig::default()
            }
            None => SimConfig::default(),
        };
        match Simulation::new(config) {
            Ok(sim) => Self::new(sim),
            Err(e) => {
                log::error!("config invalid, using defaults: {}", e);
                Self::new(Self::default_simulation())
            }
        }
    }

    fn default_simulation() -> Simulation {
        Simulation::new(SimConfig::default()).expect("default config is valid")
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: apply queued commands, run the fixed ticks that
    /// fit in `dt`, then rebuild the render output.
    pub fn tick(&mut self, dt: f32) {
        if self.quit_requested {
            self.input.drain();
            return;
        }

        for event in self.input.drain() {
            let Some(command) = Command::from_event(&event) else {
                continue;
            };
            if self.sim.handle(command) == Outcome::Quit {
                self.quit_requested = true;
                break;
            }
        }

        if !self.quit_requested {
            let steps = self.clock.accumulate(dt);
            for _ in 0..steps {
                self.sim.step();
            }
        }

        self.frame += 1;
        self.refresh_output();
    }

    fn refresh_output(&mut self) {
        self.sim.build_render(&mut self.render_buffer);
        write_header(
            &mut self.header,
            &self.layout,
            &self.sim,
            self.frame,
            self.render_buffer.instance_count(),
            self.quit_requested,
        );
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn header(&self) -> &[f32] {
        &self.header
    }

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn cube_template(&self) -> &[f32] {
        &self.cube_template
    }

    /// Column-major view-projection matrix for the current camera.
    pub fn view_proj(&self, aspect: f32) -> [f32; 16] {
        self.sim.control.camera.view_proj(aspect).to_cols_array()
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
