use wasm_bindgen::prelude::*;

use crate::clock::{ClockFace, ClockTime};
use crate::domain::config::{
    gravity_from_percent, restitution_from_percent, trail_alpha_from_position,
    velocity_from_percent, PhysicsConfig,
};
use crate::domain::glyphs::GlyphSet;
use crate::render::CanvasRenderer;

use super::perf_stats::PerfStats;
use super::Simulation;

/// Browser entry point: a clock face and its free dots on one canvas
#[wasm_bindgen]
pub struct DotClock {
    sim: Simulation,
    face: ClockFace,
    canvas: CanvasRenderer,
}

#[wasm_bindgen]
impl DotClock {
    /// Attach to `<canvas id=canvas_id>`; the scene takes the canvas' CSS size
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<DotClock, JsValue> {
        let canvas = CanvasRenderer::from_canvas_id(canvas_id)?;
        let (width, height) = (canvas.width(), canvas.height());
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
        Ok(Self {
            sim: Simulation::new(width, height).with_seed(seed),
            face: ClockFace::new(width, height),
            canvas,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.sim.scene().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.sim.scene().height }

    #[wasm_bindgen(getter)]
    pub fn active_count(&self) -> u32 { self.sim.active_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn tail(&self) -> u32 { self.sim.tail() as u32 }

    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> u32 { self.sim.capacity() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.sim.frame() }

    /// Render one animation frame (call from requestAnimationFrame)
    pub fn frame(&mut self, timestamp: f64) {
        let now = js_sys::Date::new_0();
        let seconds = now.get_hours() as u64 * 3600
            + now.get_minutes() as u64 * 60
            + now.get_seconds() as u64;
        self.face
            .frame(ClockTime::from_seconds(seconds), timestamp, &mut self.sim, &mut self.canvas);
    }

    /// Release a free dot at (x, y)
    pub fn activate(&mut self, x: f64, y: f64) {
        self.sim.activate(x, y);
    }

    pub fn clear(&mut self) {
        self.sim.clear();
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) {
        self.sim.set_gravity(x, y);
    }

    pub fn set_restitution(&mut self, restitution: f64) {
        self.sim.set_restitution(restitution);
    }

    pub fn set_max_velocity(&mut self, max_velocity: f64) {
        self.sim.set_max_velocity(max_velocity);
    }

    pub fn set_trail_fade_alpha(&mut self, alpha: f64) {
        self.sim.set_trail_fade_alpha(alpha);
    }

    // === Control panel sliders ===

    pub fn set_gravity_percent(&mut self, percent: u32) {
        let gx = self.sim.config().gravity_x;
        self.sim.set_gravity(gx, gravity_from_percent(percent));
    }

    pub fn set_restitution_percent(&mut self, percent: u32) {
        self.sim.set_restitution(restitution_from_percent(percent));
    }

    pub fn set_velocity_percent(&mut self, percent: u32) {
        self.sim.set_max_velocity(velocity_from_percent(percent));
    }

    pub fn set_trails_position(&mut self, position: f64) {
        self.sim.set_trail_fade_alpha(trail_alpha_from_position(position));
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        let config = PhysicsConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        self.sim.set_config(config);
        log::info!("physics config loaded");
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.sim.config().to_json()
    }

    pub fn load_glyphs(&mut self, json: String) -> Result<(), JsValue> {
        let glyphs = GlyphSet::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        self.face.set_glyphs(glyphs);
        log::debug!("digit glyphs replaced");
        Ok(())
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.sim.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.sim.get_perf_stats()
    }
}
