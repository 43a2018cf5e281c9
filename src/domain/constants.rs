//! Dot geometry and pool sizing shared by the clock face and the particle core.

/// Fixed number of slots in the particle pool
pub const POOL_CAPACITY: usize = 10_000;

/// Collision radius of a free dot (scene units).
/// Two dots closer than this are considered touching.
pub const DOT_RADIUS: f64 = 14.0;

/// Horizontal pitch between dots of a digit
pub const DOT_WIDTH: f64 = 16.0;
/// Vertical pitch between dots of a digit
pub const DOT_HEIGHT: f64 = 16.0;
/// Gap between two neighbouring digits
pub const NUMBER_SPACING: f64 = 16.0;

/// Digit matrix columns
pub const MATRIX_WIDTH: usize = 4;
/// Digit matrix rows
pub const MATRIX_HEIGHT: usize = 7;

/// Distance above the floor at which a dot touching a side wall rolls off
pub const FLOOR_EXIT_MARGIN: f64 = 2.0;

/// Default dot colour (#44f)
pub const DOT_COLOR: (u8, u8, u8) = (0x44, 0x44, 0xff);
