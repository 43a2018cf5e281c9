//! Simulation - owns the particle pool and drives one frame at a time
//!
//! A frame is strictly ordered:
//! 1. integrate every active dot (gravity, motion, walls)
//! 2. resolve dot/dot collisions on the integrated positions
//! 3. draw trails
//!
//! Spawns (`activate`) may arrive between frames or from the digit display
//! while the driver is building a frame, but never from inside a step.
//! Configuration is read at the start of each step, so changes land on the next one.
//!
//! Everything is single-threaded; the simulation is the sole owner of the pool.

use crate::domain::config::{PhysicsConfig, Scene};
use crate::domain::constants::POOL_CAPACITY;
use crate::render::{Renderer, Rgba};
use crate::spatial::pool::ParticlePool;
use crate::systems::physics::CollisionWorkspace;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::DotClock;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

pub struct Simulation {
    pool: ParticlePool,
    config: PhysicsConfig,
    scene: Scene,
    workspace: CollisionWorkspace,
    dot_color: Rgba,

    // State
    rng_state: u32,
    last_time_ms: Option<f64>,
    frame: u64,
    pending_spawns: u32,
    pending_dropped: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Simulation {
    /// Create a simulation over a `width` x `height` scene with the default pool size
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_capacity(width, height, POOL_CAPACITY)
    }

    pub fn with_capacity(width: f64, height: f64, capacity: usize) -> Self {
        init::create_simulation(Scene::new(width, height), capacity)
    }

    pub fn with_scene(scene: Scene, capacity: usize) -> Self {
        init::create_simulation(scene, capacity)
    }

    /// Replace the spawn-velocity seed (deterministic runs)
    pub fn with_seed(mut self, seed: u32) -> Self {
        init::reseed(&mut self, seed);
        self
    }

    pub fn with_config(mut self, config: PhysicsConfig) -> Self {
        settings::set_config(&mut self, config);
        self
    }

    pub fn pool(&self) -> &ParticlePool { &self.pool }

    pub fn config(&self) -> &PhysicsConfig { &self.config }

    pub fn scene(&self) -> &Scene { &self.scene }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn active_count(&self) -> usize { self.pool.active_count() }

    pub fn tail(&self) -> usize { self.pool.tail() }

    pub fn capacity(&self) -> usize { self.pool.capacity() }

    pub fn dot_color(&self) -> Rgba { self.dot_color }

    pub fn set_config(&mut self, config: PhysicsConfig) {
        settings::set_config(self, config);
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) {
        settings::set_gravity(self, x, y);
    }

    pub fn set_restitution(&mut self, restitution: f64) {
        settings::set_restitution(self, restitution);
    }

    pub fn set_max_velocity(&mut self, max_velocity: f64) {
        settings::set_max_velocity(self, max_velocity);
    }

    pub fn set_trail_fade_alpha(&mut self, alpha: f64) {
        settings::set_trail_fade_alpha(self, alpha);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        settings::resize(self, width, height);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Free a dot at `(x, y)` with a random velocity.
    /// Silently dropped when the pool has no free slot.
    pub fn activate(&mut self, x: f64, y: f64) {
        commands::activate(self, x, y)
    }

    /// Free a dot with an explicit velocity; returns the slot, `None` if dropped
    pub fn activate_with_velocity(&mut self, x: f64, y: f64, vx: f64, vy: f64) -> Option<usize> {
        commands::activate_with_velocity(self, x, y, vx, vy)
    }

    /// Deactivate every dot
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance by the time elapsed since the previous frame and draw.
    /// `timestamp_ms` must not decrease between calls.
    pub fn tick<R: Renderer + ?Sized>(&mut self, timestamp_ms: f64, renderer: &mut R) {
        step::tick(self, timestamp_ms, renderer);
    }

    /// Advance exactly `dt` seconds and draw
    pub fn step<R: Renderer + ?Sized>(&mut self, dt: f64, renderer: &mut R) {
        step::step(self, dt, renderer);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
