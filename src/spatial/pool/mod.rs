//! ParticlePool - fixed-capacity Structure of Arrays for free dots
//!
//! Instead of: Vec<Dot> grown and shrunk every frame
//! We have:    pos_x[], pos_y[], last_x[], last_y[], vx[], vy[], active[]
//!
//! All arrays are allocated once. A slot is born by flipping `active` on and
//! dies by flipping it off; nothing is ever pushed or removed, so a running
//! clock produces no allocations.
//!
//! `tail` is a high-watermark: every slot above it is inactive, so scans stop
//! at `tail`. It grows when an activation lands past it and shrinks by one
//! when the slot sitting exactly on it dies. Holes below `tail` are skipped.

mod iter;
mod lifecycle;

pub use iter::ActiveIndices;

use crate::domain::constants::POOL_CAPACITY;

pub struct ParticlePool {
    capacity: usize,
    tail: usize,
    active_count: usize,

    pub pos_x: Vec<f64>,
    pub pos_y: Vec<f64>,
    /// Position at the last trail draw
    pub last_x: Vec<f64>,
    pub last_y: Vec<f64>,
    pub vx: Vec<f64>,
    pub vy: Vec<f64>,
    /// Single source of truth for slot liveness
    pub active: Vec<bool>,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            tail: 0,
            active_count: 0,
            pos_x: vec![0.0; capacity],
            pos_y: vec![0.0; capacity],
            last_x: vec![0.0; capacity],
            last_y: vec![0.0; capacity],
            vx: vec![0.0; capacity],
            vy: vec![0.0; capacity],
            active: vec![false; capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    #[inline]
    pub fn is_active(&self, idx: usize) -> bool {
        self.active.get(idx).copied().unwrap_or(false)
    }

    /// Exclusive end of the scan range (`0..=tail`, clamped to capacity)
    #[inline]
    pub fn scan_end(&self) -> usize {
        (self.tail + 1).min(self.capacity)
    }

    /// Lazily walk the active slots in `0..=tail`.
    pub fn active_indices(&self) -> ActiveIndices<'_> {
        ActiveIndices::new(&self.active[..self.scan_end()])
    }

    #[inline]
    pub fn position(&self, idx: usize) -> (f64, f64) {
        (self.pos_x[idx], self.pos_y[idx])
    }

    #[inline]
    pub fn last_position(&self, idx: usize) -> (f64, f64) {
        (self.last_x[idx], self.last_y[idx])
    }

    #[inline]
    pub fn velocity(&self, idx: usize) -> (f64, f64) {
        (self.vx[idx], self.vy[idx])
    }

    #[inline]
    pub fn set_velocity(&mut self, idx: usize, vx: f64, vy: f64) {
        self.vx[idx] = vx;
        self.vy[idx] = vy;
    }

    /// Deactivate every slot and reset the watermark.
    pub fn clear(&mut self) {
        self.active.fill(false);
        self.tail = 0;
        self.active_count = 0;
    }

    /// Rough memory footprint of the SoA arrays (bytes)
    pub fn memory_bytes(&self) -> usize {
        self.capacity * (6 * std::mem::size_of::<f64>() + std::mem::size_of::<bool>())
    }
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new(POOL_CAPACITY)
    }
}
