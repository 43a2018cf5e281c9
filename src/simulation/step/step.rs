use crate::render::Renderer;
use crate::systems::physics::{integrate, resolve_collisions};
use crate::systems::trails::draw_trails;

use super::{PerfTimer, Simulation};

/// Seconds to advance for a frame stamped `timestamp_ms`.
///
/// The first frame only records the baseline. Backwards or non-finite stamps
/// advance nothing, and long gaps (tab in background) are capped.
pub(super) fn frame_delta(sim: &mut Simulation, timestamp_ms: f64) -> f64 {
    let dt = match sim.last_time_ms {
        Some(last) => (timestamp_ms - last) / 1000.0,
        None => 0.0,
    };
    if timestamp_ms.is_finite() {
        sim.last_time_ms = Some(timestamp_ms);
    }
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(sim.config.max_frame_delta.max(0.0))
}

pub(super) fn tick<R: Renderer + ?Sized>(sim: &mut Simulation, timestamp_ms: f64, renderer: &mut R) {
    let dt = frame_delta(sim, timestamp_ms);
    step(sim, dt, renderer);
}

pub(super) fn step<R: Renderer + ?Sized>(sim: &mut Simulation, dt: f64, renderer: &mut R) {
    let mut timer = if sim.perf_enabled { Some(PerfTimer::start()) } else { None };

    // === PHASE 1: integrate + boundaries ===
    let integrated = integrate(&mut sim.pool, &sim.config, &sim.scene, dt);
    let integrate_ms = timer.as_mut().map_or(0.0, |t| t.lap());

    // === PHASE 2: dot/dot collisions on the integrated positions ===
    let collisions = resolve_collisions(&mut sim.pool, &mut sim.workspace, sim.scene.radius, dt);
    let collide_ms = timer.as_mut().map_or(0.0, |t| t.lap());

    // === PHASE 3: trails (stroke = diameter of a drawn dot) ===
    let drawn = draw_trails(&mut sim.pool, renderer, sim.scene.radius, sim.dot_color);
    let trails_ms = timer.as_mut().map_or(0.0, |t| t.lap());

    if let Some(timer) = timer {
        let stats = &mut sim.perf_stats;
        stats.reset();
        stats.integrate_ms = integrate_ms;
        stats.collide_ms = collide_ms;
        stats.trails_ms = trails_ms;
        stats.processed = integrated.processed;
        stats.deactivated = integrated.deactivated;
        stats.pairs_tested = collisions.pairs_tested;
        stats.collisions_resolved = collisions.resolved;
        stats.separating_skipped = collisions.separating;
        stats.trails_drawn = drawn;
        stats.spawns = sim.pending_spawns;
        stats.spawns_dropped = sim.pending_dropped;
        stats.active_particles = sim.pool.active_count() as u32;
        stats.tail = sim.pool.tail() as u32;
        stats.memory_bytes = sim.pool.memory_bytes() as u32;
        stats.step_ms = timer.total_ms();
    }

    sim.pending_spawns = 0;
    sim.pending_dropped = 0;
    sim.frame += 1;
}
