//! Round countdown
//!
//! Elapsed time is collected in a fractional accumulator and taken off the
//! clock one whole second at a time, so the HUD counts down in integer steps
//! without dropping the fractions between frames.

use serde::{Deserialize, Serialize};

/// Result of one clock tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTick {
    /// Whole seconds left, when a second boundary was crossed inside the warning window
    pub warning: Option<u32>,
    /// Clock has run out
    pub expired: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundClock {
    time_left: f32,
    accumulator: f32,
    low_time_threshold: f32,
}

impl RoundClock {
    pub fn new(seconds: f32, low_time_threshold: f32) -> Self {
        Self {
            time_left: seconds.max(0.0),
            accumulator: 0.0,
            low_time_threshold,
        }
    }

    /// Refill the clock and drop any partial second
    pub fn reset(&mut self, seconds: f32) {
        self.time_left = seconds.max(0.0);
        self.accumulator = 0.0;
    }

    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Add (or with a negative delta, remove) time; never goes below zero
    pub fn add_time(&mut self, delta: f32) {
        self.time_left = (self.time_left + delta).max(0.0);
    }

    /// Whole seconds to show on the HUD
    pub fn display_seconds(&self) -> u32 {
        self.time_left.ceil() as u32
    }

    pub fn is_low(&self) -> bool {
        self.time_left > 0.0 && self.time_left <= self.low_time_threshold
    }

    pub fn is_expired(&self) -> bool {
        self.time_left <= 0.0
    }

    /// Accumulate `dt` seconds and take whole seconds off the clock
    pub fn tick(&mut self, dt: f32) -> ClockTick {
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt;
        }

        let mut warning = None;
        if self.accumulator >= 1.0 && self.time_left > 0.0 {
            let whole = self.accumulator.floor();
            self.time_left = (self.time_left - whole).max(0.0);
            self.accumulator -= whole;

            if self.is_low() {
                warning = Some(self.display_seconds());
            }
        }

        ClockTick {
            warning,
            expired: self.is_expired(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractions_carry_over() {
        let mut clock = RoundClock::new(60.0, 10.0);
        clock.tick(0.6);
        assert_eq!(clock.time_left(), 60.0);
        clock.tick(0.6);
        assert_eq!(clock.time_left(), 59.0);
        assert!((clock.accumulator() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_large_delta_takes_whole_seconds() {
        let mut clock = RoundClock::new(60.0, 10.0);
        clock.tick(2.5);
        assert_eq!(clock.time_left(), 58.0);
        assert!((clock.accumulator() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_zero_and_invalid_deltas_do_nothing() {
        let mut clock = RoundClock::new(60.0, 10.0);
        for dt in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            assert_eq!(clock.tick(dt), ClockTick::default());
        }
        assert_eq!(clock.time_left(), 60.0);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn test_warning_once_per_second_in_window() {
        let mut clock = RoundClock::new(12.0, 10.0);
        assert_eq!(clock.tick(1.0).warning, None); // 11
        assert_eq!(clock.tick(1.0).warning, Some(10));
        assert_eq!(clock.tick(0.5).warning, None);
        assert_eq!(clock.tick(0.5).warning, Some(9));
    }

    #[test]
    fn test_runs_out() {
        let mut clock = RoundClock::new(1.0, 10.0);
        let tick = clock.tick(1.0);
        assert!(tick.expired);
        assert_eq!(tick.warning, None);
        assert_eq!(clock.time_left(), 0.0);
    }

    #[test]
    fn test_time_penalty_floors_at_zero() {
        let mut clock = RoundClock::new(5.0, 10.0);
        clock.add_time(-10.0);
        assert_eq!(clock.time_left(), 0.0);
        // Any tick afterwards reports expiry
        assert!(clock.tick(1.0 / 60.0).expired);
    }

    #[test]
    fn test_reset_clears_partial_second() {
        let mut clock = RoundClock::new(30.0, 10.0);
        clock.tick(0.7);
        clock.reset(60.0);
        assert_eq!(clock.time_left(), 60.0);
        assert_eq!(clock.accumulator(), 0.0);
        assert_eq!(clock.display_seconds(), 60);
    }
}
