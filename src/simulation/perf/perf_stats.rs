use wasm_bindgen::prelude::*;

/// Snapshot of the last step (zeros while perf metrics are off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) trails_ms: f64,
    pub(super) active_particles: u32,
    pub(super) tail: u32,
    pub(super) processed: u32,
    pub(super) deactivated: u32,
    pub(super) pairs_tested: u32,
    pub(super) collisions_resolved: u32,
    pub(super) separating_skipped: u32,
    pub(super) trails_drawn: u32,
    pub(super) spawns: u32,
    pub(super) spawns_dropped: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn trails_ms(&self) -> f64 { self.trails_ms }
    #[wasm_bindgen(getter)]
    pub fn active_particles(&self) -> u32 { self.active_particles }
    #[wasm_bindgen(getter)]
    pub fn tail(&self) -> u32 { self.tail }
    #[wasm_bindgen(getter)]
    pub fn processed(&self) -> u32 { self.processed }
    #[wasm_bindgen(getter)]
    pub fn deactivated(&self) -> u32 { self.deactivated }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn collisions_resolved(&self) -> u32 { self.collisions_resolved }
    #[wasm_bindgen(getter)]
    pub fn separating_skipped(&self) -> u32 { self.separating_skipped }
    #[wasm_bindgen(getter)]
    pub fn trails_drawn(&self) -> u32 { self.trails_drawn }
    #[wasm_bindgen(getter)]
    pub fn spawns(&self) -> u32 { self.spawns }
    #[wasm_bindgen(getter)]
    pub fn spawns_dropped(&self) -> u32 { self.spawns_dropped }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
