//! Browser smoke tests (`wasm-pack test --headless --chrome`)
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use dotclock_engine::DotClock;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str) {
    let document = web_sys::window().and_then(|w| w.document()).unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_attribute("style", "width: 640px; height: 360px").unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
}

#[wasm_bindgen_test]
fn clock_runs_frames_on_a_canvas() {
    dotclock_engine::init();
    mount_canvas("clock");

    let mut clock = DotClock::new("clock").unwrap();
    assert_eq!(clock.width(), 640.0);
    assert_eq!(clock.active_count(), 0);

    clock.enable_perf_metrics(true);
    for i in 0..5 {
        clock.frame(i as f64 * 16.0);
    }
    clock.activate(100.0, 100.0);
    clock.frame(96.0);
    assert_eq!(clock.frame_count(), 6);
    assert!(clock.active_count() >= 1);
    assert!(clock.get_perf_stats().trails_drawn() >= 1);
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    assert!(DotClock::new("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn bad_config_json_is_rejected() {
    mount_canvas("clock-config");
    let mut clock = DotClock::new("clock-config").unwrap();
    assert!(clock.load_config("{\"gravity_y\": \"down\"}".to_string()).is_err());
    clock.set_gravity_percent(10);
    assert!(clock.config_json().contains("500"));
}
