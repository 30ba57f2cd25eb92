//! Elements → position: Kepler solve, then the perifocal-to-ecliptic rotation.

use glam::{DVec2, DVec3};

use crate::elements::{ElementRates, OrbitalElements};
use crate::error::OrbitError;
use crate::kepler::KeplerSolver;
use crate::planets::PlanetId;

/// A solved ellipse at one instant.
///
/// A pure function of the elements it was computed from: propagating the same
/// elements twice yields bit-identical values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipticalOrbit {
    /// The elements this orbit was solved from.
    pub elements: OrbitalElements,
    /// ω (degrees).
    pub argument_of_periapsis: f64,
    /// M (degrees, wrapped to `[-180, 180)`).
    pub mean_anomaly: f64,
    /// E (degrees).
    pub eccentric_anomaly: f64,
    /// b (AU).
    pub semi_minor_axis: f64,
    /// Position in the orbital plane, x toward periapsis (AU).
    pub perifocal: DVec2,
    /// Heliocentric ecliptic position (AU).
    pub ecliptic: DVec3,
}

impl EllipticalOrbit {
    /// Distance from the focus (AU).
    pub fn radius(&self) -> f64 {
        self.perifocal.length()
    }
}

/// Turns orbital elements into positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Propagator {
    solver: KeplerSolver,
}

impl Propagator {
    pub fn new(solver: KeplerSolver) -> Self {
        Self { solver }
    }

    pub fn solver(&self) -> &KeplerSolver {
        &self.solver
    }

    /// Evaluate a table row at `t` Julian centuries and solve it.
    pub fn propagate(&self, rates: &ElementRates, t: f64) -> Result<EllipticalOrbit, OrbitError> {
        self.propagate_elements(&rates.evaluate(t))
    }

    /// Position of a tabulated planet at `t` Julian centuries.
    pub fn propagate_planet(&self, planet: PlanetId, t: f64) -> Result<EllipticalOrbit, OrbitError> {
        self.propagate(planet.rates(), t)
    }

    /// Solve already-evaluated elements.
    pub fn propagate_elements(
        &self,
        elements: &OrbitalElements,
    ) -> Result<EllipticalOrbit, OrbitError> {
        let a = elements.a;
        let e = elements.e;

        let arg_peri = elements.argument_of_periapsis();
        let mean_anomaly = elements.mean_anomaly();
        let eccentric_anomaly = self.solver.solve_eccentric_anomaly(mean_anomaly, e)?;
        let b = elements.semi_minor_axis();

        let ea = eccentric_anomaly.to_radians();
        let perifocal = DVec2::new(a * (ea.cos() - e), b * ea.sin());

        let ecliptic = perifocal_to_ecliptic(
            perifocal,
            arg_peri.to_radians(),
            elements.long_node.to_radians(),
            elements.i.to_radians(),
        );

        Ok(EllipticalOrbit {
            elements: *elements,
            argument_of_periapsis: arg_peri,
            mean_anomaly,
            eccentric_anomaly,
            semi_minor_axis: b,
            perifocal,
            ecliptic,
        })
    }
}

/// Rotate orbital-plane coordinates into the ecliptic frame: `R_z(Ω)·R_x(I)·R_z(ω)`
/// applied to `(x', y', 0)`. Angles in radians.
pub fn perifocal_to_ecliptic(perifocal: DVec2, arg_peri: f64, long_node: f64, incl: f64) -> DVec3 {
    let (x, y) = (perifocal.x, perifocal.y);
    let (sin_w, cos_w) = arg_peri.sin_cos();
    let (sin_o, cos_o) = long_node.sin_cos();
    let (sin_i, cos_i) = incl.sin_cos();

    let xecl = (cos_w * cos_o - sin_w * sin_o * cos_i) * x + (-sin_w * cos_o - cos_w * sin_o * cos_i) * y;
    let yecl = (cos_w * sin_o + sin_w * cos_o * cos_i) * x + (-sin_w * sin_o + cos_w * cos_o * cos_i) * y;
    let zecl = (sin_w * sin_i) * x + (cos_w * sin_i) * y;

    DVec3::new(xecl, yecl, zecl)
}
