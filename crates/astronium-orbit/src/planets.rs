//! Planet identifiers and their element tables.
//!
//! Coefficients: E M Standish, "Keplerian Elements for Approximate Positions
//! of the Major Planets", JPL, Table 2a (3000 BC to AD 3000) and Table 2b.

use std::fmt;
use std::str::FromStr;

use crate::elements::{ElementRates, OrbitalElements, PerturbationTerms, SecularElement as S};
use crate::error::OrbitError;

/// A body with a published element table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlanetId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl PlanetId {
    /// Every planet, ordered outward from the Sun.
    pub const ALL: [PlanetId; 9] = [
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
        Self::Pluto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }

    /// The element table row for this planet.
    pub fn rates(self) -> &'static ElementRates {
        match self {
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::Earth => &EARTH,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
            Self::Uranus => &URANUS,
            Self::Neptune => &NEPTUNE,
            Self::Pluto => &PLUTO,
        }
    }

    /// Osculating elements at `t` Julian centuries since J2000.0.
    pub fn elements(self, t: f64) -> OrbitalElements {
        self.rates().evaluate(t)
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlanetId {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| OrbitError::UnknownPlanet(s.to_string()))
    }
}

// Columns: a, e, I, L, ϖ, Ω; value then rate per Julian century.

static MERCURY: ElementRates = ElementRates {
    a: S::fixed(0.38709843),
    e: S::new(0.20563661, 0.00002123),
    i: S::new(7.00559432, -0.00590158),
    l: S::new(252.25166724, 149472.67486623),
    long_peri: S::new(77.45771895, 0.15940013),
    long_node: S::new(48.33961819, -0.12214182),
    perturbation: None,
};

static VENUS: ElementRates = ElementRates {
    a: S::new(0.72332102, -0.00000026),
    e: S::new(0.00676399, -0.00005107),
    i: S::new(3.39777545, 0.00043494),
    l: S::new(181.97970850, 58517.81560260),
    long_peri: S::new(131.76755713, 0.05679648),
    long_node: S::new(76.67261496, -0.27274174),
    perturbation: None,
};

static EARTH: ElementRates = ElementRates {
    a: S::new(1.00000018, -0.00000003),
    e: S::new(0.01673163, -0.00003661),
    i: S::new(-0.00054346, -0.01337178),
    l: S::new(100.46691572, 35999.37306329),
    long_peri: S::new(102.93005885, 0.31795260),
    long_node: S::new(-5.11260389, -0.24123856),
    perturbation: None,
};

static MARS: ElementRates = ElementRates {
    a: S::new(1.52371243, 0.00000097),
    e: S::new(0.09336511, 0.00009149),
    i: S::new(1.85181869, -0.00724757),
    l: S::new(-4.56813164, 19140.29934243),
    long_peri: S::new(-23.91744784, 0.45223625),
    long_node: S::new(49.71320984, -0.26852431),
    perturbation: None,
};

static JUPITER: ElementRates = ElementRates {
    a: S::new(5.20248019, -0.00002864),
    e: S::new(0.04853590, 0.00018026),
    i: S::new(1.29861416, -0.00322699),
    l: S::new(34.33479152, 3034.90371757),
    long_peri: S::new(14.27495244, 0.18199196),
    long_node: S::new(100.29282654, 0.13024619),
    perturbation: Some(PerturbationTerms::new(-0.00012452, 0.06064060, -0.35635438, 38.35125000)),
};

static SATURN: ElementRates = ElementRates {
    a: S::new(9.54149883, -0.00003065),
    e: S::new(0.05550825, -0.00032044),
    i: S::new(2.49424102, 0.00451969),
    l: S::new(50.07571329, 1222.11494724),
    long_peri: S::new(92.86136063, 0.54179478),
    long_node: S::new(113.63998702, -0.25015002),
    perturbation: Some(PerturbationTerms::new(0.00025899, -0.13434469, 0.87320147, 38.35125000)),
};

static URANUS: ElementRates = ElementRates {
    a: S::new(19.18797948, -0.00020455),
    e: S::new(0.04685740, -0.00001550),
    i: S::new(0.77298127, -0.00180155),
    l: S::new(314.20276625, 428.49512595),
    long_peri: S::new(172.43404441, 0.09266985),
    long_node: S::new(73.96250215, 0.05739699),
    perturbation: Some(PerturbationTerms::new(0.00058331, -0.97731848, 0.17689245, 7.67025000)),
};

static NEPTUNE: ElementRates = ElementRates {
    a: S::new(30.06952752, 0.00006447),
    e: S::new(0.00895439, 0.00000818),
    i: S::new(1.77005520, 0.00022400),
    l: S::new(304.22289287, 218.46515314),
    long_peri: S::new(46.68158724, 0.01009938),
    long_node: S::new(131.78635853, -0.00606302),
    perturbation: Some(PerturbationTerms::new(-0.00041348, 0.68346318, -0.10162547, 7.67025000)),
};

static PLUTO: ElementRates = ElementRates {
    a: S::new(39.48686035, 0.00449751),
    e: S::new(0.24885238, 0.00006016),
    i: S::new(17.14104260, 0.00000501),
    l: S::new(238.96535011, 145.18042903),
    long_peri: S::new(224.09702598, -0.00968827),
    long_node: S::new(110.30167986, -0.00809981),
    perturbation: Some(PerturbationTerms::quadratic(-0.01262724)),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_reproduces_published_elements() {
        let earth = PlanetId::Earth.elements(0.0);
        assert_eq!(earth.a, 1.00000018);
        assert_eq!(earth.e, 0.01673163);
        assert_eq!(earth.i, -0.00054346);
        assert_eq!(earth.l, 100.46691572);
        assert_eq!(earth.long_peri, 102.93005885);
        assert_eq!(earth.long_node, -5.11260389);
        assert_eq!(earth.perturbation, 0.0);

        let mars = PlanetId::Mars.elements(0.0);
        // L is wrapped into [0, 360)
        assert!((mars.l - (360.0 - 4.56813164)).abs() < 1e-12);
    }

    #[test]
    fn test_outer_planets_carry_perturbation() {
        for planet in PlanetId::ALL {
            let has_terms = planet.rates().perturbation.is_some();
            assert_eq!(has_terms, planet >= PlanetId::Jupiter, "{planet}");
        }
        // At T = 0 only the cosine amplitude survives.
        assert_eq!(PlanetId::Jupiter.elements(0.0).perturbation, 0.06064060);
        assert_eq!(PlanetId::Pluto.elements(0.0).perturbation, 0.0);
    }

    #[test]
    fn test_all_planets_are_bound_ellipses() {
        for planet in PlanetId::ALL {
            for t in [-50.0, -1.0, 0.0, 0.26, 10.0] {
                let el = planet.elements(t);
                assert!((0.0..0.3).contains(&el.e), "{planet} at T={t}: e = {}", el.e);
                assert!(el.a > 0.3, "{planet} at T={t}: a = {}", el.a);
            }
        }
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(PlanetId::from_name("earth"), Some(PlanetId::Earth));
        assert_eq!(PlanetId::from_name(" Neptune "), Some(PlanetId::Neptune));
        assert_eq!(PlanetId::from_name("Vulcan"), None);
        assert_eq!("PLUTO".parse::<PlanetId>(), Ok(PlanetId::Pluto));
        assert_eq!(
            "Sun".parse::<PlanetId>(),
            Err(OrbitError::UnknownPlanet("Sun".to_string()))
        );
        assert_eq!(
            "Vulcan".parse::<PlanetId>().unwrap_err().to_string(),
            "no element table for body \"Vulcan\""
        );
        for planet in PlanetId::ALL {
            assert_eq!(planet.name().parse::<PlanetId>(), Ok(planet));
            assert_eq!(planet.to_string(), planet.name());
        }
    }
}
