//! Simulation clock: the explicit time value the host loop advances each frame.

use crate::clock::Clock;
use crate::error::TimeError;
use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000, JulianDate, SECONDS_PER_DAY};

/// Earliest instant covered by the secular element tables (3000 BC).
const MIN_CENTURIES: f64 = -50.0;
/// Latest instant covered by the secular element tables (AD 3000).
const MAX_CENTURIES: f64 = 10.0;

/// Simulated time with variable-rate playback.
///
/// Created once at startup, advanced once per frame by the host loop, and
/// passed explicitly into the body registry. Nothing reads it implicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationClock {
    current: JulianDate,
    /// Simulated seconds per real second. Negative runs time backwards.
    rate: f64,
    paused: bool,
}

impl SimulationClock {
    /// Start at an explicit Julian Date, running in real time.
    pub fn at(jd: JulianDate) -> Self {
        Self {
            current: clamp(jd),
            rate: rates::REALTIME,
            paused: false,
        }
    }

    /// Start at the instant reported by `clock`.
    pub fn from_clock(clock: &impl Clock) -> Result<Self, TimeError> {
        Ok(Self::at(clock.now()?))
    }

    /// Current simulated instant.
    pub fn current(&self) -> JulianDate {
        self.current
    }

    /// Current simulated instant in Julian centuries since J2000.0.
    pub fn centuries(&self) -> f64 {
        self.current.centuries_since_j2000()
    }

    /// Jump to an absolute instant.
    pub fn set_time(&mut self, jd: JulianDate) {
        self.current = clamp(jd);
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Set the playback rate in simulated seconds per real second.
    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate.clamp(-rates::MAX, rates::MAX);
    }

    /// Set the playback rate in simulated days per real second.
    pub fn set_rate_days_per_second(&mut self, days: f64) {
        self.set_rate(days * SECONDS_PER_DAY);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance by a real-world frame delta. Returns the new instant.
    pub fn advance(&mut self, real_dt_seconds: f64) -> JulianDate {
        if !self.paused {
            let sim_days = real_dt_seconds * self.rate / SECONDS_PER_DAY;
            self.current = clamp(self.current + sim_days);
        }
        self.current
    }
}

fn clamp(jd: JulianDate) -> JulianDate {
    let min = J2000 + MIN_CENTURIES * DAYS_PER_JULIAN_CENTURY;
    let max = J2000 + MAX_CENTURIES * DAYS_PER_JULIAN_CENTURY;
    JulianDate(jd.0.clamp(min, max))
}

/// Preset playback rates, in simulated seconds per real second.
pub mod rates {
    /// Real time.
    pub const REALTIME: f64 = 1.0;
    /// 1 hour per second.
    pub const HOUR_PER_SEC: f64 = 3600.0;
    /// 1 day per second.
    pub const DAY_PER_SEC: f64 = 86_400.0;
    /// 1 week per second.
    pub const WEEK_PER_SEC: f64 = 7.0 * 86_400.0;
    /// 1 Julian year per second.
    pub const YEAR_PER_SEC: f64 = 365.25 * 86_400.0;
    /// Fastest allowed rate (a Julian century per second).
    pub const MAX: f64 = 100.0 * YEAR_PER_SEC;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    struct UnreadableClock;

    impl Clock for UnreadableClock {
        fn now(&self) -> Result<JulianDate, TimeError> {
            Err(TimeError::ClockUnavailable("RTC offline".to_string()))
        }
    }

    #[test]
    fn test_unavailable_clock_reaches_caller() {
        assert_eq!(
            SimulationClock::from_clock(&UnreadableClock),
            Err(TimeError::ClockUnavailable("RTC offline".to_string()))
        );
    }

    #[test]
    fn test_starts_at_clock_time() {
        let clock = FixedClock(JulianDate(2_460_000.5));
        let sim = SimulationClock::from_clock(&clock).unwrap();
        assert_eq!(sim.current(), JulianDate(2_460_000.5));
        assert_eq!(sim.rate(), rates::REALTIME);
        assert!(!sim.is_paused());
    }

    #[test]
    fn test_advance_at_day_per_second() {
        let mut sim = SimulationClock::at(JulianDate::J2000);
        sim.set_rate(rates::DAY_PER_SEC);
        for _ in 0..60 {
            sim.advance(1.0 / 60.0);
        }
        assert!((sim.current().days_since_j2000() - 1.0).abs() < 1e-7);
    }

    #[test]
    fn test_centuries_after_one_century() {
        let mut sim = SimulationClock::at(JulianDate::J2000);
        sim.set_rate_days_per_second(DAYS_PER_JULIAN_CENTURY);
        sim.advance(1.0);
        assert!((sim.centuries() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_paused_clock_does_not_move() {
        let mut sim = SimulationClock::at(JulianDate::J2000);
        sim.set_rate(rates::YEAR_PER_SEC);
        sim.pause();
        assert_eq!(sim.advance(10.0), JulianDate::J2000);
        sim.toggle_pause();
        assert!(sim.advance(1.0) > JulianDate::J2000);
    }

    #[test]
    fn test_negative_rate_runs_backwards() {
        let mut sim = SimulationClock::at(JulianDate::J2000);
        sim.set_rate(-rates::DAY_PER_SEC);
        sim.advance(2.0);
        assert!((sim.current().days_since_j2000() + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_to_table_validity() {
        let mut sim = SimulationClock::at(JulianDate::from_centuries(500.0));
        assert!((sim.centuries() - MAX_CENTURIES).abs() < 1e-12);

        sim.set_time(JulianDate::from_centuries(-80.0));
        assert!((sim.centuries() - MIN_CENTURIES).abs() < 1e-12);
    }

    #[test]
    fn test_rate_is_bounded() {
        let mut sim = SimulationClock::at(JulianDate::J2000);
        sim.set_rate(1e20);
        assert_eq!(sim.rate(), rates::MAX);
    }
}
