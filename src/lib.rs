//! Dot Clock Engine - exploding dot-matrix clock in WASM
//!
//! Architecture:
//! - domain/      - Tunables, dot geometry, digit pixel masks
//! - spatial/     - Fixed-capacity particle pool
//! - systems/     - Integration, dot/dot collisions, trails
//! - render/      - Drawing seam (canvas + in-memory)
//! - clock/       - Clock face that frees dots on digit changes
//! - simulation/  - Frame orchestration and the JS facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod render;
pub mod clock;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init(log::LevelFilter::Info);
    log::info!("Dot clock engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use clock::{ClockFace, ClockTime};
pub use domain::config::{PhysicsConfig, Scene};
pub use render::{RecordingRenderer, Renderer, Rgba};
pub use simulation::{DotClock, PerfStats, Simulation};
pub use spatial::pool::ParticlePool;
