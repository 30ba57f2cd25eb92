//! Body registry error types.

use astronium_orbit::OrbitError;

use crate::registry::BodyId;

/// Errors raised while building or advancing the registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BodyError {
    /// The body has no element table, so its orbit cannot be propagated.
    #[error("no element table for body {0:?}")]
    UnknownBody(String),

    /// A planet refers to a handle that is not a star in this registry.
    #[error("{0} is not a star in this registry")]
    UnknownStar(BodyId),

    /// Propagation failed (for example, Kepler's equation did not converge).
    #[error(transparent)]
    Orbit(#[from] OrbitError),
}
