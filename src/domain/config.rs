//! Physics tunables and scene dimensions.
//!
//! `PhysicsConfig` is plain data. It is handed to every step explicitly and may be
//! replaced between frames; the next step picks up whatever values it holds.
//! Nothing here is range-checked: a restitution above 1.0 makes every bounce gain
//! energy, a negative gravity pulls dots to the ceiling.

use serde::{Deserialize, Serialize};

use super::constants::DOT_RADIUS;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Horizontal pull (positive = right)
    pub gravity_x: f64,
    /// Vertical pull (positive = down, towards the floor)
    pub gravity_y: f64,
    /// Velocity retained on a wall/floor/ceiling bounce
    pub restitution: f64,
    /// Scale of the random velocity given to a freshly freed dot
    pub max_velocity: f64,
    /// Opacity of the black overlay painted every frame (trail length)
    pub trail_fade_alpha: f64,
    /// Upper bound for a single tick's time step, in seconds
    pub max_frame_delta: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_x: 0.0,
            gravity_y: 750.0,
            restitution: 0.5,
            max_velocity: 750.0,
            trail_fade_alpha: 0.1,
            max_frame_delta: 0.1,
        }
    }
}

impl PhysicsConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: PhysicsConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.check_finite()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain f64 fields always serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    fn check_finite(&self) -> Result<(), String> {
        let fields = [
            ("gravity_x", self.gravity_x),
            ("gravity_y", self.gravity_y),
            ("restitution", self.restitution),
            ("max_velocity", self.max_velocity),
            ("trail_fade_alpha", self.trail_fade_alpha),
            ("max_frame_delta", self.max_frame_delta),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(format!("config field `{}` must be a finite number", name));
            }
        }
        Ok(())
    }
}

/// Bounds of the simulated area
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, radius: DOT_RADIUS }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

// === Control panel mappings (slider percent -> tunable) ===

pub fn gravity_from_percent(percent: u32) -> f64 {
    percent as f64 * 50.0
}

pub fn restitution_from_percent(percent: u32) -> f64 {
    percent as f64 * 0.01
}

pub fn velocity_from_percent(percent: u32) -> f64 {
    percent as f64 * 50.0
}

/// Map the trails slider (0..=100) onto an overlay alpha on a log scale.
///
/// 0 gives 0.5 (short trails), 100 gives 0.025 (long trails).
/// The result is rounded to two decimals.
pub fn trail_alpha_from_position(position: f64) -> f64 {
    let min_val = 0.5f64.ln();
    let max_val = 0.025f64.ln();
    let scale = (max_val - min_val) / 100.0;
    let alpha = (min_val + scale * position).exp();
    (alpha * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_clock_tuning() {
        let c = PhysicsConfig::default();
        assert_eq!(c.gravity_x, 0.0);
        assert_eq!(c.gravity_y, 750.0);
        assert_eq!(c.restitution, 0.5);
        assert_eq!(c.max_velocity, 750.0);
    }

    #[test]
    fn json_missing_fields_fall_back_to_defaults() {
        let c = PhysicsConfig::from_json(r#"{ "restitution": 1.5 }"#).unwrap();
        assert_eq!(c.restitution, 1.5);
        assert_eq!(c.gravity_y, 750.0);
    }

    #[test]
    fn json_rejects_garbage() {
        assert!(PhysicsConfig::from_json("{ not json").is_err());
        assert!(PhysicsConfig::from_json(r#"{ "gravity_y": "down" }"#).is_err());
    }

    #[test]
    fn json_roundtrip_keeps_values() {
        let mut c = PhysicsConfig::default();
        c.gravity_x = -20.0;
        let back = PhysicsConfig::from_json(&c.to_json()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn slider_mappings() {
        assert_eq!(gravity_from_percent(15), 750.0);
        assert!((restitution_from_percent(80) - 0.8).abs() < 1e-12);
        assert_eq!(velocity_from_percent(100), 5000.0);
    }

    #[test]
    fn slider_mappings_take_any_u32() {
        // A negative JS number arrives as a huge u32.
        assert_eq!(gravity_from_percent(u32::MAX), u32::MAX as f64 * 50.0);
        assert_eq!(velocity_from_percent(100_000_000), 5_000_000_000.0);
    }

    #[test]
    fn trail_alpha_endpoints() {
        assert_eq!(trail_alpha_from_position(0.0), 0.5);
        // 0.025 * 100 rounds half away from zero
        assert_eq!(trail_alpha_from_position(100.0), 0.03);
        assert_eq!(trail_alpha_from_position(50.0), 0.11);
    }
}
