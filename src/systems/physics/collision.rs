use crate::spatial::pool::ParticlePool;

use super::types::{CollisionStats, PairOutcome};

/// Reusable scratch for the collision pass.
///
/// Holds the compacted list of active slots so the pair loop does not rescan
/// holes. Cleared at the start of every pass; nothing carries over between ticks.
#[derive(Default)]
pub struct CollisionWorkspace {
    active: Vec<usize>,
}

impl CollisionWorkspace {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Test and resolve every unordered pair of active dots.
///
/// Quadratic in the number of active dots; the clock keeps a few hundred alive
/// at most, far below pool capacity.
pub fn resolve_collisions(
    pool: &mut ParticlePool,
    workspace: &mut CollisionWorkspace,
    radius: f64,
    dt: f64,
) -> CollisionStats {
    let mut stats = CollisionStats::default();
    let radius_sq = radius * radius;

    workspace.active.clear();
    workspace.active.extend(pool.active_indices());

    let live = &workspace.active;
    for (n, &i) in live.iter().enumerate() {
        for &j in &live[n + 1..] {
            stats.pairs_tested += 1;
            match resolve_pair(pool, i, j, radius_sq, dt) {
                PairOutcome::Resolved => stats.resolved += 1,
                PairOutcome::Separating => stats.separating += 1,
                PairOutcome::Apart | PairOutcome::Coincident => {}
            }
        }
    }

    stats
}

/// Equal-mass exchange along the line of centres for one pair.
///
/// The normal is built from absolute axis distances, and the impulse
/// `s = (v_i - v_j) . n` is taken from `i` and given to `j`, so `v_i + v_j`
/// is unchanged. Restitution does not apply between dots.
pub fn resolve_pair(
    pool: &mut ParticlePool,
    i: usize,
    j: usize,
    radius_sq: f64,
    dt: f64,
) -> PairOutcome {
    let dx = (pool.pos_x[i] - pool.pos_x[j]).abs();
    let dy = (pool.pos_y[i] - pool.pos_y[j]).abs();
    let dist_sq = dx * dx + dy * dy;

    if dist_sq >= radius_sq {
        return PairOutcome::Apart;
    }

    // Where will they be one step from now? Growing distance means the pair is
    // already flying apart; pushing again would glue them together.
    let next_dx = (pool.pos_x[i] + pool.vx[i] * dt) - (pool.pos_x[j] + pool.vx[j] * dt);
    let next_dy = (pool.pos_y[i] + pool.vy[i] * dt) - (pool.pos_y[j] + pool.vy[j] * dt);
    if next_dx * next_dx + next_dy * next_dy > dist_sq {
        return PairOutcome::Separating;
    }

    if dist_sq == 0.0 {
        return PairOutcome::Coincident;
    }

    let distance = dist_sq.sqrt();
    let nx = dx / distance;
    let ny = dy / distance;

    let rvx = pool.vx[i] - pool.vx[j];
    let rvy = pool.vy[i] - pool.vy[j];
    let impact_speed = rvx * nx + rvy * ny;

    pool.vx[i] -= nx * impact_speed;
    pool.vy[i] -= ny * impact_speed;
    pool.vx[j] += nx * impact_speed;
    pool.vy[j] += ny * impact_speed;

    PairOutcome::Resolved
}
