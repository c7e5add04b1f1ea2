pub mod runner;

pub use runner::GestureRunner;

use std::cell::RefCell;
use glam::Vec2;
use touch_fx::{TouchPhase, TouchPoint};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<GestureRunner>> = RefCell::new(None);
}

/// Run `f` against the runner. Calls made before `fx_init` succeeded are
/// dropped, since no gesture processing is possible without a config.
fn with_runner<R: Default>(f: impl FnOnce(&mut GestureRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => R::default(),
    })
}

/// Load the effect config and start recognizing gestures.
/// A missing or malformed config is reported to JavaScript and leaves the
/// bridge inert.
#[wasm_bindgen]
pub fn fx_init(config_json: &str, world_width: f32, world_height: f32) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = GestureRunner::from_json(config_json, world_width, world_height).map_err(|e| {
        log::error!("touch-fx: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("touch-fx: initialized ({}x{})", world_width, world_height);
    Ok(())
}

/// Report a touch change. `phase`: 0 = began, 1 = moved, 2 = stationary,
/// 3 = ended, 4 = canceled.
#[wasm_bindgen]
pub fn fx_touch(id: u32, x: f32, y: f32, phase: u32, tap_count: u32) {
    let Some(phase) = TouchPhase::from_code(phase) else {
        log::warn!("touch-fx: unknown touch phase {}", phase);
        return;
    };
    let touch = TouchPoint::new(id, Vec2::new(x, y), phase).with_tap_count(tap_count);
    with_runner(|r| r.push_touch(touch));
}

#[wasm_bindgen]
pub fn fx_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

#[wasm_bindgen]
pub fn fx_reset() {
    with_runner(|r| r.reset());
}

#[wasm_bindgen]
pub fn fx_tick(dt: f32) {
    with_runner(|r| {
        r.tick(dt);
    });
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_effects_ptr() -> *const f32 {
    with_runner(|r| Some(r.effects_ptr())).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_effect_count() -> u32 {
    with_runner(|r| r.effect_count())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| Some(r.events_ptr())).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

#[wasm_bindgen]
pub fn get_max_effects() -> u32 {
    runner::MAX_EFFECTS as u32
}
