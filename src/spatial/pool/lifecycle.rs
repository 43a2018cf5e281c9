use super::ParticlePool;

impl ParticlePool {
    /// Bring the lowest free slot to life at `(x, y)` with the given velocity.
    ///
    /// Only `0..tail + 2` is searched: every slot above `tail` is free, so the
    /// first free slot can never lie further out than `tail + 1`.
    /// Returns the slot index, or `None` when the pool is full (the spawn is dropped).
    pub fn activate(&mut self, x: f64, y: f64, vx: f64, vy: f64) -> Option<usize> {
        let end = (self.tail + 2).min(self.capacity);
        let idx = (0..end).find(|&i| !self.active[i])?;

        self.pos_x[idx] = x;
        self.pos_y[idx] = y;
        self.last_x[idx] = x;
        self.last_y[idx] = y;
        self.vx[idx] = vx;
        self.vy[idx] = vy;
        self.active[idx] = true;
        self.active_count += 1;

        if idx > self.tail {
            self.tail = idx;
        }
        Some(idx)
    }

    /// Kill a slot. Shrinks `tail` by exactly one when `idx == tail`; never cascades.
    pub fn deactivate(&mut self, idx: usize) {
        if idx >= self.capacity {
            return;
        }
        if self.active[idx] {
            self.active[idx] = false;
            self.active_count -= 1;
        }
        if idx == self.tail {
            self.tail = self.tail.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_with(n: usize, capacity: usize) -> ParticlePool {
        let mut pool = ParticlePool::new(capacity);
        for i in 0..n {
            pool.activate(10.0 + i as f64, 20.0, 0.0, 0.0);
        }
        pool
    }

    #[test]
    fn activation_takes_lowest_free_slot() {
        let mut pool = pool_with(3, 8);
        assert_eq!(pool.tail(), 2);

        pool.deactivate(1);
        assert_eq!(pool.activate(99.0, 98.0, 1.0, 2.0), Some(1));
        assert_eq!(pool.position(1), (99.0, 98.0));
        assert_eq!(pool.last_position(1), (99.0, 98.0));
        assert_eq!(pool.velocity(1), (1.0, 2.0));
        assert_eq!(pool.tail(), 2);
    }

    #[test]
    fn activation_past_tail_raises_it() {
        let mut pool = pool_with(1, 8);
        assert_eq!(pool.tail(), 0);
        assert_eq!(pool.activate(1.0, 1.0, 0.0, 0.0), Some(1));
        assert_eq!(pool.tail(), 1);
    }

    #[test]
    fn deactivating_tail_shrinks_by_exactly_one() {
        let mut pool = pool_with(5, 8);
        pool.deactivate(3);
        assert_eq!(pool.tail(), 4);

        pool.deactivate(4);
        // Slot 3 is also dead but the watermark does not cascade.
        assert_eq!(pool.tail(), 3);
        assert_eq!(pool.active_count(), 3);
    }

    #[test]
    fn deactivating_below_tail_leaves_hole() {
        let mut pool = pool_with(4, 8);
        pool.deactivate(0);
        assert_eq!(pool.tail(), 3);
        let live: Vec<usize> = pool.active_indices().collect();
        assert_eq!(live, vec![1, 2, 3]);
    }

    #[test]
    fn full_pool_drops_spawns() {
        let mut pool = pool_with(4, 4);
        assert_eq!(pool.active_count(), 4);
        assert_eq!(pool.activate(5.0, 5.0, 0.0, 0.0), None);
        assert_eq!(pool.active_count(), 4);
        assert_eq!(pool.tail(), 3);
    }

    #[test]
    fn deactivate_out_of_range_is_ignored() {
        let mut pool = pool_with(2, 4);
        pool.deactivate(17);
        assert_eq!(pool.active_count(), 2);
        assert_eq!(pool.tail(), 1);
    }

    #[test]
    fn empty_pool_tail_stays_at_zero() {
        let mut pool = pool_with(1, 4);
        pool.deactivate(0);
        assert_eq!(pool.tail(), 0);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.active_indices().count(), 0);
        assert_eq!(pool.activate(3.0, 3.0, 0.0, 0.0), Some(0));
    }

    #[test]
    fn origin_is_a_valid_position() {
        let mut pool = ParticlePool::new(4);
        assert_eq!(pool.activate(0.0, 0.0, 0.0, 0.0), Some(0));
        assert!(pool.is_active(0));
        assert_eq!(pool.activate(0.0, 0.0, 0.0, 0.0), Some(1));
    }

    #[test]
    fn clear_resets_everything() {
        let mut pool = pool_with(6, 8);
        pool.clear();
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.tail(), 0);
        assert_eq!(pool.activate(1.0, 1.0, 0.0, 0.0), Some(0));
    }
}
