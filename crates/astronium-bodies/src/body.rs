//! Stars and planets.

use astronium_orbit::{EllipticalOrbit, PlanetId};
use glam::DVec3;

use crate::registry::BodyId;
use crate::render::AU_PER_LIGHT_YEAR;

/// Convert right ascension / declination (degrees) and a distance into
/// Cartesian coordinates in the distance's unit.
pub fn spherical_to_cartesian(ra_deg: f64, dec_deg: f64, distance: f64) -> DVec3 {
    let (sin_ra, cos_ra) = ra_deg.to_radians().sin_cos();
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();
    DVec3::new(
        distance * cos_dec * cos_ra,
        distance * cos_dec * sin_ra,
        distance * sin_dec,
    )
}

/// A star. Its position never changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub name: String,
    /// Mean radius (km).
    pub radius_km: f64,
    /// Mass (kg).
    pub mass_kg: f64,
    /// Opaque texture reference handed to the renderer.
    pub texture: Option<String>,
    /// Right ascension (degrees).
    pub right_ascension: f64,
    /// Declination (degrees).
    pub declination: f64,
    /// Distance (light-years).
    pub distance_ly: f64,
    pub spectral_type: String,
    pub apparent_magnitude: Option<f64>,
    pub absolute_magnitude: Option<f64>,
    position: DVec3,
}

impl Star {
    /// A star at the given sky position and distance.
    pub fn new(
        name: impl Into<String>,
        radius_km: f64,
        mass_kg: f64,
        right_ascension: f64,
        declination: f64,
        distance_ly: f64,
        spectral_type: impl Into<String>,
    ) -> Self {
        let position = spherical_to_cartesian(
            right_ascension,
            declination,
            distance_ly * AU_PER_LIGHT_YEAR,
        );
        Self {
            name: name.into(),
            radius_km,
            mass_kg,
            texture: None,
            right_ascension,
            declination,
            distance_ly,
            spectral_type: spectral_type.into(),
            apparent_magnitude: None,
            absolute_magnitude: None,
            position,
        }
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }

    pub fn with_apparent_magnitude(mut self, magnitude: f64) -> Self {
        self.apparent_magnitude = Some(magnitude);
        self
    }

    pub fn with_absolute_magnitude(mut self, magnitude: f64) -> Self {
        self.absolute_magnitude = Some(magnitude);
        self
    }

    /// Cartesian position (AU), fixed at construction.
    pub fn position_au(&self) -> DVec3 {
        self.position
    }
}

/// A planet orbiting a star in the same registry.
#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    pub name: String,
    /// Equatorial radius (km).
    pub radius_km: f64,
    /// Mass (kg).
    pub mass_kg: f64,
    pub texture: Option<String>,
    /// Oblateness; only shrinks the rendered vertical scale.
    pub flattening: f64,
    /// The star this planet orbits. A handle, never ownership.
    pub star: BodyId,
    /// Element table, resolved once from the name.
    source: Option<PlanetId>,
    orbit: Option<EllipticalOrbit>,
    /// Position relative to the star (AU).
    position: DVec3,
}

impl Planet {
    /// A planet orbiting `star`. The element table is looked up by name; bodies
    /// without one keep their initial position.
    pub fn new(name: impl Into<String>, radius_km: f64, mass_kg: f64, star: BodyId) -> Self {
        let name = name.into();
        let source = PlanetId::from_name(&name);
        Self {
            name,
            radius_km,
            mass_kg,
            texture: None,
            flattening: 0.0,
            star,
            source,
            orbit: None,
            position: DVec3::ZERO,
        }
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }

    pub fn with_flattening(mut self, flattening: f64) -> Self {
        self.flattening = flattening;
        self
    }

    /// Starting position (AU, relative to the star) for bodies that are never
    /// propagated.
    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    /// The element table driving this planet, if any.
    pub fn source(&self) -> Option<PlanetId> {
        self.source
    }

    /// The orbit solved on the most recent successful step.
    pub fn orbit(&self) -> Option<&EllipticalOrbit> {
        self.orbit.as_ref()
    }

    /// Position relative to the star (AU).
    pub fn position_au(&self) -> DVec3 {
        self.position
    }

    /// Store a freshly solved orbit.
    pub(crate) fn apply(&mut self, orbit: EllipticalOrbit, star_position: DVec3) {
        self.position = orbit.ecliptic - star_position;
        self.orbit = Some(orbit);
    }
}

/// Either kind of body the registry holds.
#[derive(Clone, Debug, PartialEq)]
pub enum CelestialBody {
    Star(Star),
    Planet(Planet),
}

impl CelestialBody {
    pub fn name(&self) -> &str {
        match self {
            Self::Star(s) => &s.name,
            Self::Planet(p) => &p.name,
        }
    }

    pub fn radius_km(&self) -> f64 {
        match self {
            Self::Star(s) => s.radius_km,
            Self::Planet(p) => p.radius_km,
        }
    }

    pub fn mass_kg(&self) -> f64 {
        match self {
            Self::Star(s) => s.mass_kg,
            Self::Planet(p) => p.mass_kg,
        }
    }

    pub fn texture(&self) -> Option<&str> {
        match self {
            Self::Star(s) => s.texture.as_deref(),
            Self::Planet(p) => p.texture.as_deref(),
        }
    }

    /// Stars: fixed Cartesian position. Planets: position relative to their star.
    pub fn position_au(&self) -> DVec3 {
        match self {
            Self::Star(s) => s.position_au(),
            Self::Planet(p) => p.position_au(),
        }
    }

    /// Oblateness applied to the vertical render scale.
    pub fn flattening(&self) -> f64 {
        match self {
            Self::Star(_) => 0.0,
            Self::Planet(p) => p.flattening,
        }
    }

    pub fn as_star(&self) -> Option<&Star> {
        match self {
            Self::Star(s) => Some(s),
            Self::Planet(_) => None,
        }
    }

    pub fn as_planet(&self) -> Option<&Planet> {
        match self {
            Self::Planet(p) => Some(p),
            Self::Star(_) => None,
        }
    }
}

impl From<Star> for CelestialBody {
    fn from(star: Star) -> Self {
        Self::Star(star)
    }
}

impl From<Planet> for CelestialBody {
    fn from(planet: Planet) -> Self {
        Self::Planet(planet)
    }
}
