//! Orbital propagation for the Astronium solar system.
//!
//! Positions follow analytic two-body ellipses whose six classical elements
//! drift linearly in time (JPL "Keplerian Elements for Approximate Positions of
//! the Major Planets", 3000 BC to AD 3000). Outer planets add a small
//! perturbation correction to the mean anomaly.
//!
//! All angles cross the public API in degrees; radians only appear where a
//! trigonometric function is applied.

mod elements;
mod error;
mod kepler;
mod planets;
mod propagator;

pub use elements::{ElementRates, OrbitalElements, PerturbationTerms, SecularElement};
pub use error::OrbitError;
pub use kepler::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, KeplerSolver};
pub use planets::PlanetId;
pub use propagator::{EllipticalOrbit, Propagator, perifocal_to_ecliptic};
