//! Dot-matrix clock face
//!
//! Each digit is drawn from a pixel mask. When a digit changes, the dots it no
//! longer needs are released into the simulation and fly off as free particles.

mod digit;
mod face;
mod time;

pub use digit::ClockDigit;
pub use face::ClockFace;
pub use time::ClockTime;
