//! Game balance and geometry
//!
//! Everything a level designer might tweak without touching the simulation.
//! Loaded from JSON by the host; any missing field falls back to `consts`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable engine parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Hook ===
    /// Swing length while idle
    pub hook_length: f32,
    /// Maximum swing angle from vertical (degrees)
    pub max_swing_degrees: f32,
    /// Pendulum frequency (Hz)
    pub swing_frequency: f32,
    /// Shooting speed (units/s)
    pub hook_speed: f32,
    /// Maximum extension before the hook is reeled back
    pub max_shoot_length: f32,

    // === Round ===
    /// Seconds on the clock at the start of every level
    pub round_seconds: f32,
    /// Delay between reaching the target and the level-up
    pub level_up_delay: f32,
    /// Seconds added by a diamond
    pub diamond_time_bonus: f32,
    /// Warnings are emitted at or below this many seconds
    pub low_time_threshold: f32,

    // === Driver ===
    /// Largest frame delta integrated in one call (spike guard)
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            hook_length: HOOK_LENGTH,
            max_swing_degrees: MAX_SWING_DEGREES,
            swing_frequency: SWING_FREQUENCY,
            hook_speed: HOOK_SPEED,
            max_shoot_length: MAX_SHOOT_LENGTH,

            round_seconds: ROUND_SECONDS,
            level_up_delay: LEVEL_UP_DELAY,
            diamond_time_bonus: DIAMOND_TIME_BONUS,
            low_time_threshold: LOW_TIME_THRESHOLD,

            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, then repair out-of-range values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace out-of-range values with their defaults
    ///
    /// Everything must be finite and positive, except `level_up_delay`
    /// (0 = level up on the banking frame) and `diamond_time_bonus`
    /// (0 = no bonus), which only have to be non-negative.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn repair(name: &str, value: &mut f32, fallback: f32, valid: bool) {
            if !valid {
                log::warn!("Tuning `{}` = {} is invalid, using {}", name, value, fallback);
                *value = fallback;
            }
        }
        fn fix(name: &str, value: &mut f32, fallback: f32) {
            let valid = value.is_finite() && *value > 0.0;
            repair(name, value, fallback, valid);
        }
        fn fix_non_negative(name: &str, value: &mut f32, fallback: f32) {
            let valid = value.is_finite() && *value >= 0.0;
            repair(name, value, fallback, valid);
        }

        fix("canvas_width", &mut self.canvas_width, defaults.canvas_width);
        fix("canvas_height", &mut self.canvas_height, defaults.canvas_height);
        fix("hook_length", &mut self.hook_length, defaults.hook_length);
        fix("max_swing_degrees", &mut self.max_swing_degrees, defaults.max_swing_degrees);
        fix("swing_frequency", &mut self.swing_frequency, defaults.swing_frequency);
        fix("hook_speed", &mut self.hook_speed, defaults.hook_speed);
        fix("max_shoot_length", &mut self.max_shoot_length, defaults.max_shoot_length);
        fix("round_seconds", &mut self.round_seconds, defaults.round_seconds);
        fix_non_negative("level_up_delay", &mut self.level_up_delay, defaults.level_up_delay);
        fix_non_negative("diamond_time_bonus", &mut self.diamond_time_bonus, defaults.diamond_time_bonus);
        fix("low_time_threshold", &mut self.low_time_threshold, defaults.low_time_threshold);
        fix("max_frame_dt", &mut self.max_frame_dt, defaults.max_frame_dt);

        if self.max_swing_degrees >= 90.0 {
            log::warn!("Tuning `max_swing_degrees` = {} would swing above the miner, clamping", self.max_swing_degrees);
            self.max_swing_degrees = 89.0;
        }

        self
    }

    /// Canvas size as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.canvas_width, self.canvas_height)
    }

    /// Where the hook hangs from (centered under the miner)
    pub fn hook_origin(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, MINER_Y)
    }

    /// Maximum swing angle in radians
    pub fn max_swing_angle(&self) -> f32 {
        self.max_swing_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.bounds(), Vec2::new(800.0, 600.0));
        assert_eq!(tuning.hook_origin(), Vec2::new(400.0, 50.0));
        assert!((tuning.max_swing_angle() - 75f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "canvas_width": 1024.0, "hook_speed": 450.0 }"#).unwrap();
        assert_eq!(tuning.canvas_width, 1024.0);
        assert_eq!(tuning.hook_speed, 450.0);
        assert_eq!(tuning.canvas_height, CANVAS_HEIGHT);
        assert_eq!(tuning.round_seconds, ROUND_SECONDS);
    }

    #[test]
    fn test_invalid_values_are_repaired() {
        let tuning = Tuning::from_json(
            r#"{ "hook_speed": -5.0, "max_swing_degrees": 120.0, "max_frame_dt": 0.0 }"#,
        )
        .unwrap();
        assert_eq!(tuning.hook_speed, HOOK_SPEED);
        assert_eq!(tuning.max_swing_degrees, 89.0);
        assert_eq!(tuning.max_frame_dt, MAX_FRAME_DT);
    }

    #[test]
    fn test_zero_delay_and_bonus_are_kept() {
        let tuning = Tuning::from_json(r#"{ "level_up_delay": 0.0, "diamond_time_bonus": 0.0 }"#).unwrap();
        assert_eq!(tuning.level_up_delay, 0.0);
        assert_eq!(tuning.diamond_time_bonus, 0.0);

        let tuning = Tuning::from_json(r#"{ "level_up_delay": -1.0, "diamond_time_bonus": -2.5 }"#).unwrap();
        assert_eq!(tuning.level_up_delay, LEVEL_UP_DELAY);
        assert_eq!(tuning.diamond_time_bonus, DIAMOND_TIME_BONUS);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_values() {
        let mut tuning = Tuning::default();
        tuning.swing_frequency = 1.25;
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
