use crate::domain::config::{PhysicsConfig, Scene};
use crate::render::Rgba;
use crate::spatial::pool::ParticlePool;
use crate::systems::physics::CollisionWorkspace;

use super::perf_stats::PerfStats;
use super::random::sanitize_seed;
use super::Simulation;

pub(super) const DEFAULT_SEED: u32 = 12345;

pub(super) fn create_simulation(scene: Scene, capacity: usize) -> Simulation {
    Simulation {
        pool: ParticlePool::new(capacity),
        config: PhysicsConfig::default(),
        scene,
        workspace: CollisionWorkspace::new(),
        dot_color: Rgba::DOT,
        rng_state: sanitize_seed(DEFAULT_SEED),
        last_time_ms: None,
        frame: 0,
        pending_spawns: 0,
        pending_dropped: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn reseed(sim: &mut Simulation, seed: u32) {
    sim.rng_state = sanitize_seed(seed);
}
