//! Trail pass - draws each free dot as a round-capped segment from where it was
//! last drawn to where it is now, then moves the "last drawn" mark forward.
//!
//! The fading overlay that turns these segments into trails is painted by the
//! frame driver before any dot is drawn.

use crate::render::{Renderer, Rgba};
use crate::spatial::pool::ParticlePool;

/// Returns the number of segments drawn.
pub fn draw_trails<R: Renderer + ?Sized>(
    pool: &mut ParticlePool,
    renderer: &mut R,
    stroke_width: f64,
    color: Rgba,
) -> u32 {
    let mut drawn = 0;
    for i in 0..pool.scan_end() {
        if !pool.active[i] {
            continue;
        }
        renderer.draw_line(
            pool.last_x[i],
            pool.last_y[i],
            pool.pos_x[i],
            pool.pos_y[i],
            stroke_width,
            color,
        );
        pool.last_x[i] = pool.pos_x[i];
        pool.last_y[i] = pool.pos_y[i];
        drawn += 1;
    }
    drawn
}
