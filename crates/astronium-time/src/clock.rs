//! Wall-clock access behind a trait so conversions stay testable.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

use crate::error::TimeError;
use crate::julian::JulianDate;

/// A source of "now" expressed as a Julian Date.
pub trait Clock {
    /// Read the current instant.
    fn now(&self) -> Result<JulianDate, TimeError>;
}

/// The operating system's UTC wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<JulianDate, TimeError> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TimeError::ClockUnavailable(e.to_string()))?;

        let secs = i64::try_from(since_epoch.as_secs())
            .map_err(|e| TimeError::ClockUnavailable(e.to_string()))?;
        let dt = DateTime::<Utc>::from_timestamp(secs, since_epoch.subsec_nanos()).ok_or_else(
            || TimeError::ClockUnavailable(format!("timestamp {secs}s out of range")),
        )?;

        Ok(JulianDate::from(dt))
    }
}

/// A clock frozen at a fixed instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedClock(pub JulianDate);

impl Clock for FixedClock {
    fn now(&self) -> Result<JulianDate, TimeError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A clock that always fails, standing in for an unavailable OS clock.
    struct BrokenClock;

    impl Clock for BrokenClock {
        fn now(&self) -> Result<JulianDate, TimeError> {
            Err(TimeError::ClockUnavailable("no RTC".to_string()))
        }
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        let jd = SystemClock.now().unwrap();
        // 2020-01-01T00:00:00Z
        assert!(jd.days() > 2_458_849.5, "jd = {jd}");
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock(JulianDate::J2000);
        assert_eq!(clock.now().unwrap(), clock.now().unwrap());
    }

    #[test]
    fn test_clock_unavailable_surfaces() {
        let err = BrokenClock.now().unwrap_err();
        assert_eq!(err.to_string(), "wall clock unavailable: no RTC");
    }
}
