//! Julian Date arithmetic and the Gregorian calendar conversion.

use std::fmt;
use std::ops::{Add, Sub};

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000: f64 = 2_451_545.0;

/// Days in one Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// A continuous day count in the Julian Date scale.
///
/// UTC is used directly as the ephemeris time argument; the difference to TT
/// (about a minute) is far below the accuracy of the secular element tables.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct JulianDate(pub f64);

impl JulianDate {
    /// The J2000.0 reference epoch.
    pub const J2000: JulianDate = JulianDate(J2000);

    /// Build a Julian Date from Julian centuries since J2000.0.
    pub fn from_centuries(t: f64) -> Self {
        Self(J2000 + t * DAYS_PER_JULIAN_CENTURY)
    }

    /// The raw day count.
    pub fn days(self) -> f64 {
        self.0
    }

    /// Days elapsed since J2000.0 (negative before the epoch).
    pub fn days_since_j2000(self) -> f64 {
        self.0 - J2000
    }

    /// Julian centuries since J2000.0, the `T` argument of the element tables.
    pub fn centuries_since_j2000(self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }
}

impl Add<f64> for JulianDate {
    type Output = JulianDate;

    /// Offset by a number of days.
    fn add(self, days: f64) -> JulianDate {
        JulianDate(self.0 + days)
    }
}

impl Sub<JulianDate> for JulianDate {
    type Output = f64;

    /// Difference in days.
    fn sub(self, rhs: JulianDate) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6}", self.0)
    }
}

/// A UTC calendar instant in the proleptic Gregorian calendar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalendarInstant {
    pub year: i32,
    /// 1 = January.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Seconds including the fractional part.
    pub second: f64,
}

impl CalendarInstant {
    /// Midnight at the start of the given date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0.0,
        }
    }

    /// Set the time of day.
    pub fn at(mut self, hour: u32, minute: u32, second: f64) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    /// Day of month with the time of day folded in as a fraction.
    fn fractional_day(&self) -> f64 {
        self.day as f64
            + (self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second) / SECONDS_PER_DAY
    }

    /// Convert to a Julian Date (Meeus, *Astronomical Algorithms*, ch. 7).
    pub fn to_julian_date(&self) -> JulianDate {
        let (mut y, mut m) = (self.year as f64, self.month as f64);
        if self.month <= 2 {
            y -= 1.0;
            m += 12.0;
        }

        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor()
            + self.fractional_day()
            + b
            - 1524.5;
        JulianDate(jd)
    }
}

/// Julian Date of a UTC calendar instant.
pub fn julian_date(instant: &CalendarInstant) -> JulianDate {
    instant.to_julian_date()
}

impl From<DateTime<Utc>> for CalendarInstant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            // Leap seconds surface as nanoseconds >= 1e9 and simply spill over.
            second: dt.second() as f64 + dt.nanosecond() as f64 * 1e-9,
        }
    }
}

impl From<DateTime<Utc>> for JulianDate {
    fn from(dt: DateTime<Utc>) -> Self {
        CalendarInstant::from(dt).to_julian_date()
    }
}
