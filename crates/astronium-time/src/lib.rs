//! Astronomical time for the Astronium simulation.
//!
//! Converts wall-clock instants into Julian Dates and Julian centuries since
//! J2000.0, the time argument every orbital element polynomial is written in.
//! Clock access sits behind the [`Clock`] trait so the conversion itself stays
//! pure and testable.

mod clock;
mod error;
mod julian;
mod simulation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::TimeError;
pub use julian::{CalendarInstant, DAYS_PER_JULIAN_CENTURY, J2000, JulianDate, SECONDS_PER_DAY, julian_date};
pub use simulation::{SimulationClock, rates};
