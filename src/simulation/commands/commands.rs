use super::random::spawn_velocity;
use super::Simulation;

/// Free a dot at `(x, y)` with a random velocity; dropped silently when full.
pub(super) fn activate(sim: &mut Simulation, x: f64, y: f64) {
    let max_velocity = sim.config.max_velocity;
    let vx = spawn_velocity(&mut sim.rng_state, max_velocity);
    let vy = spawn_velocity(&mut sim.rng_state, max_velocity);
    activate_with_velocity(sim, x, y, vx, vy);
}

pub(super) fn activate_with_velocity(
    sim: &mut Simulation,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
) -> Option<usize> {
    let slot = sim.pool.activate(x, y, vx, vy);
    match slot {
        Some(_) => sim.pending_spawns = sim.pending_spawns.saturating_add(1),
        None => {
            sim.pending_dropped = sim.pending_dropped.saturating_add(1);
            log::trace!("particle pool full ({}), spawn at ({}, {}) dropped", sim.pool.capacity(), x, y);
        }
    }
    slot
}

pub(super) fn clear(sim: &mut Simulation) {
    sim.pool.clear();
    sim.pending_spawns = 0;
    sim.pending_dropped = 0;
}
