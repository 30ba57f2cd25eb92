//! Celestial bodies, the registry that owns them, and the boundary to the
//! renderer.
//!
//! One star and any number of planets live in a [`BodyRegistry`]. Each
//! simulation step the registry re-propagates every planet from its element
//! table at the current time and stores the position relative to its star.
//! A [`RenderAdapter`] receives positions and scales in render units.

mod body;
mod error;
mod registry;
mod render;
mod snapshot;
mod solar_system;

pub use body::{CelestialBody, Planet, Star, spherical_to_cartesian};
pub use error::BodyError;
pub use registry::{BodyId, BodyRegistry, TickReport};
pub use render::{
    AU_PER_LIGHT_YEAR, BodyVisual, RENDER_UNITS_PER_AU, RENDER_UNITS_PER_LIGHT_YEAR,
    RecordingAdapter, RenderAdapter, SOLAR_RADIUS_KM,
};
pub use snapshot::{BodyKind, BodySnapshot, RegistrySnapshot};
pub use solar_system::{solar_system, solar_system_with};
