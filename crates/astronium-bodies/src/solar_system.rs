//! The Sun and its nine classical planets.

use tracing::error;

use crate::body::{Planet, Star};
use crate::registry::BodyRegistry;

/// Physical data per planet: name, equatorial radius (km), mass (kg),
/// flattening, texture.
const PLANETS: [(&str, f64, f64, f64, &str); 9] = [
    ("Mercury", 2439.7, 3.3011e23, 0.0, "mercury_placeholder.jpg"),
    ("Venus", 6051.8, 4.8675e24, 0.0, "venus_placeholder.jpg"),
    ("Earth", 6378.1, 5.97237e24, 0.0033528, "earth_placeholder.jpg"),
    ("Mars", 3396.2, 6.4171e23, 0.00589, "mars_placeholder.jpg"),
    ("Jupiter", 71492.0, 1.8982e27, 0.06487, "jupiter_placeholder.jpg"),
    ("Saturn", 60268.0, 5.6834e26, 0.09796, "saturn_placeholder.jpg"),
    ("Uranus", 25559.0, 8.6810e25, 0.0229, "uranus_placeholder.jpg"),
    ("Neptune", 24764.0, 1.02413e26, 0.0171, "neptune_placeholder.jpg"),
    ("Pluto", 1188.3, 1.303e22, 0.0, "pluto_placeholder.jpg"),
];

/// A registry holding the Sun at the origin and the nine planets.
///
/// Positions are not computed yet; call [`BodyRegistry::spawn`] or
/// [`BodyRegistry::tick`].
pub fn solar_system() -> BodyRegistry {
    solar_system_with(BodyRegistry::default())
}

/// Populate an existing (usually empty) registry with the solar system.
pub fn solar_system_with(mut registry: BodyRegistry) -> BodyRegistry {
    let sun = registry.add_star(
        Star::new("Sun", 695_990.0, 1.9891e30, 0.0, 0.0, 0.0, "G2V")
            .with_absolute_magnitude(4.83)
            .with_texture("sun_placeholder.jpg"),
    );

    for (name, radius_km, mass_kg, flattening, texture) in PLANETS {
        let planet = Planet::new(name, radius_km, mass_kg, sun)
            .with_flattening(flattening)
            .with_texture(texture);
        if let Err(err) = registry.add_planet(planet) {
            error!(name, %err, "failed to register planet");
        }
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use astronium_orbit::PlanetId;

    #[test]
    fn test_every_planet_has_an_element_table() {
        let registry = solar_system();
        assert_eq!(registry.len(), 10);

        let planets: Vec<_> = registry
            .iter()
            .filter_map(|(_, b)| b.as_planet())
            .map(|p| p.source())
            .collect();
        let expected: Vec<_> = PlanetId::ALL.into_iter().map(Some).collect();
        assert_eq!(planets, expected);
    }

    #[test]
    fn test_sun_properties() {
        let registry = solar_system();
        let (_, sun) = registry.find("Sun").unwrap();
        let star = sun.as_star().unwrap();
        assert_eq!(star.spectral_type, "G2V");
        assert_eq!(star.absolute_magnitude, Some(4.83));
        assert_eq!(star.apparent_magnitude, None);
    }

    #[test]
    fn test_full_tick_is_clean() {
        let mut registry = solar_system();
        let report = registry.tick(0.26);
        assert!(report.is_clean(), "{:?}", report.skipped);
        assert_eq!(report.updated, 9);
    }
}
