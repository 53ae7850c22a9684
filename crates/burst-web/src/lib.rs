pub mod runner;

pub use runner::SimRunner;

use std::cell::RefCell;

use burst_engine::InputEvent;
use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SimRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut SimRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Simulation not initialized. Call sim_init() first.");
        f(runner)
    })
}

/// Create the simulation. `config_json` may be omitted to use defaults.
#[wasm_bindgen]
pub fn sim_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = SimRunner::from_json(config_json.as_deref());
    let particles = runner.simulation().particles.len();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("burst: initialized with {} particles", particles);
}

#[wasm_bindgen]
pub fn sim_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn sim_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn sim_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_header_ptr() -> *const f32 {
    with_runner(|r| r.header_ptr())
}

/// Copy of the header, for hosts that do not read wasm memory directly.
#[wasm_bindgen]
pub fn get_header() -> Float32Array {
    with_runner(|r| Float32Array::from(r.header()))
}

#[wasm_bindgen]
pub fn get_cube_template() -> Float32Array {
    with_runner(|r| Float32Array::from(r.cube_template()))
}

#[wasm_bindgen]
pub fn get_view_proj(aspect: f32) -> Float32Array {
    with_runner(|r| Float32Array::from(&r.view_proj(aspect)[..]))
}

#[wasm_bindgen]
pub fn get_quit_requested() -> bool {
    with_runner(|r| r.quit_requested())
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_instances() -> u32 {
    with_runner(|r| r.max_instances())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}
