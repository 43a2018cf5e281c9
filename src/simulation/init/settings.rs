use crate::domain::config::{PhysicsConfig, Scene};

use super::perf_stats::PerfStats;
use super::Simulation;

pub(super) fn enable_perf_metrics(sim: &mut Simulation, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &Simulation) -> PerfStats {
    sim.perf_stats.clone()
}

pub(super) fn set_config(sim: &mut Simulation, config: PhysicsConfig) {
    sim.config = config;
}

pub(super) fn set_gravity(sim: &mut Simulation, x: f64, y: f64) {
    sim.config.gravity_x = x;
    sim.config.gravity_y = y;
}

pub(super) fn set_restitution(sim: &mut Simulation, restitution: f64) {
    sim.config.restitution = restitution;
}

pub(super) fn set_max_velocity(sim: &mut Simulation, max_velocity: f64) {
    sim.config.max_velocity = max_velocity;
}

pub(super) fn set_trail_fade_alpha(sim: &mut Simulation, alpha: f64) {
    sim.config.trail_fade_alpha = alpha;
}

pub(super) fn resize(sim: &mut Simulation, width: f64, height: f64) {
    sim.scene = Scene { width, height, ..sim.scene };
}
