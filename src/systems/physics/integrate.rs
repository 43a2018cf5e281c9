use crate::domain::config::{PhysicsConfig, Scene};
use crate::domain::constants::FLOOR_EXIT_MARGIN;
use crate::spatial::pool::ParticlePool;

use super::types::IntegrateStats;

/// Advance every active dot by `dt` seconds.
///
/// Per dot, in this order:
/// 1. `v += g * dt`, `p += v * dt`
/// 2. wall hit: near the floor -> deactivate and skip the rest; otherwise clamp x
///    and reflect `vx` scaled by restitution
/// 3. floor hit: clamp y, reflect `vy`
/// 4. ceiling hit: clamp y, reflect `vy`
///
/// Steps 3 and 4 run even when step 2 clamped, so a dot can be pinned in a corner.
pub fn integrate(
    pool: &mut ParticlePool,
    config: &PhysicsConfig,
    scene: &Scene,
    dt: f64,
) -> IntegrateStats {
    let mut stats = IntegrateStats::default();
    let radius = scene.radius;
    let restitution = config.restitution;
    let end = pool.scan_end();

    for i in 0..end {
        if !pool.active[i] {
            continue;
        }
        stats.processed += 1;

        pool.vx[i] += config.gravity_x * dt;
        pool.vy[i] += config.gravity_y * dt;
        pool.pos_x[i] += pool.vx[i] * dt;
        pool.pos_y[i] += pool.vy[i] * dt;

        if pool.pos_x[i] <= radius || pool.pos_x[i] >= scene.width {
            if pool.pos_y[i] >= scene.height - FLOOR_EXIT_MARGIN {
                // Rolled off the end of the floor.
                pool.deactivate(i);
                stats.deactivated += 1;
                continue;
            }
            if pool.pos_x[i] <= radius {
                pool.pos_x[i] = radius;
            }
            if pool.pos_x[i] >= scene.width {
                pool.pos_x[i] = scene.width;
            }
            pool.vx[i] *= -restitution;
        }

        if pool.pos_y[i] >= scene.height {
            pool.pos_y[i] = scene.height;
            pool.vy[i] *= -restitution;
        }

        if pool.pos_y[i] <= radius {
            pool.pos_y[i] = radius;
            pool.vy[i] *= -restitution;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still() -> PhysicsConfig {
        PhysicsConfig { gravity_x: 0.0, gravity_y: 0.0, ..PhysicsConfig::default() }
    }

    #[test]
    fn gravity_then_translation() {
        let mut pool = ParticlePool::new(4);
        pool.activate(100.0, 100.0, 10.0, 0.0);
        let config = PhysicsConfig { gravity_y: 100.0, ..still() };
        let scene = Scene::new(400.0, 300.0);

        integrate(&mut pool, &config, &scene, 0.5);

        // v = (10, 50); p += v * dt (semi-implicit)
        assert_eq!(pool.velocity(0), (10.0, 50.0));
        assert_eq!(pool.position(0), (105.0, 125.0));
    }

    #[test]
    fn left_wall_bounce_clamps_and_damps() {
        let mut pool = ParticlePool::new(4);
        pool.activate(20.0, 100.0, -200.0, 0.0);
        let scene = Scene::new(400.0, 300.0);
        let config = still();

        integrate(&mut pool, &config, &scene, 0.1);

        assert_eq!(pool.pos_x[0], scene.radius);
        assert_eq!(pool.vx[0], 100.0);
        assert!(pool.is_active(0));
    }

    #[test]
    fn right_wall_clamps_to_width() {
        let mut pool = ParticlePool::new(4);
        pool.activate(390.0, 100.0, 400.0, 0.0);
        let scene = Scene::new(400.0, 300.0);

        integrate(&mut pool, &still(), &scene, 0.1);

        assert_eq!(pool.pos_x[0], 400.0);
        assert_eq!(pool.vx[0], -200.0);
    }

    #[test]
    fn floor_and_ceiling_bounce() {
        let mut pool = ParticlePool::new(4);
        pool.activate(100.0, 290.0, 0.0, 200.0);
        pool.activate(200.0, 20.0, 0.0, -200.0);
        let scene = Scene::new(400.0, 300.0);

        integrate(&mut pool, &still(), &scene, 0.1);

        assert_eq!(pool.pos_y[0], 300.0);
        assert_eq!(pool.vy[0], -100.0);
        assert_eq!(pool.pos_y[1], scene.radius);
        assert_eq!(pool.vy[1], 100.0);
    }

    #[test]
    fn corner_clamps_both_axes() {
        let mut pool = ParticlePool::new(4);
        pool.activate(20.0, 20.0, -100.0, -100.0);
        let scene = Scene::new(400.0, 300.0);

        integrate(&mut pool, &still(), &scene, 0.1);

        assert_eq!(pool.position(0), (scene.radius, scene.radius));
        assert_eq!(pool.velocity(0), (50.0, 50.0));
    }

    #[test]
    fn wall_contact_near_floor_rolls_off() {
        let mut pool = ParticlePool::new(4);
        pool.activate(50.0, 50.0, 0.0, 0.0);
        pool.activate(405.0, 299.0, 1.0, 0.0);
        let scene = Scene::new(400.0, 300.0);

        let stats = integrate(&mut pool, &still(), &scene, 0.016);

        assert_eq!(stats, IntegrateStats { processed: 2, deactivated: 1 });
        assert!(!pool.is_active(1));
        assert_eq!(pool.tail(), 0);
        // The dead slot keeps its stale position; nothing reads it.
        assert!(pool.pos_x[1] > 400.0);
    }

    #[test]
    fn amplifying_restitution_is_accepted() {
        let mut pool = ParticlePool::new(2);
        pool.activate(100.0, 295.0, 0.0, 100.0);
        let config = PhysicsConfig { restitution: 1.5, ..still() };
        let scene = Scene::new(400.0, 300.0);

        integrate(&mut pool, &config, &scene, 0.1);

        assert_eq!(pool.vy[0], -150.0);
    }
}
