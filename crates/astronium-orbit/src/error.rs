//! Orbit propagation error types.

/// Errors produced while solving or propagating an orbit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrbitError {
    /// Kepler's equation did not converge within the iteration cap.
    #[error(
        "Kepler solver did not converge after {iterations} iterations (M = {mean_anomaly}°, e = {eccentricity})"
    )]
    NonConvergent {
        /// Mean anomaly in degrees.
        mean_anomaly: f64,
        eccentricity: f64,
        iterations: u32,
    },

    /// Eccentricity outside the bound-ellipse range `[0, 1)`.
    #[error("eccentricity {0} is outside [0, 1)")]
    InvalidEccentricity(f64),

    /// No element table exists for the named body.
    #[error("no element table for body {0:?}")]
    UnknownPlanet(String),
}
