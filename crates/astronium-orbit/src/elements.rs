//! Classical orbital elements and their secular (time-varying) rates.

/// One element expressed as `value + rate·T`, with `T` in Julian centuries
/// since J2000.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SecularElement {
    /// Value at J2000.0.
    pub value: f64,
    /// Change per Julian century.
    pub rate: f64,
}

impl SecularElement {
    pub const fn new(value: f64, rate: f64) -> Self {
        Self { value, rate }
    }

    /// An element that does not drift.
    pub const fn fixed(value: f64) -> Self {
        Self { value, rate: 0.0 }
    }

    /// Evaluate at `t` Julian centuries since J2000.0.
    pub fn at(self, t: f64) -> f64 {
        self.value + self.rate * t
    }
}

/// Additional mean-anomaly correction for Jupiter through Pluto:
/// `b·T² + c·cos(f·T) + s·sin(f·T)`, where `f·T` is in degrees and the result
/// is in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerturbationTerms {
    pub b: f64,
    pub c: f64,
    pub s: f64,
    /// Frequency in degrees per Julian century.
    pub f: f64,
}

impl PerturbationTerms {
    pub const fn new(b: f64, c: f64, s: f64, f: f64) -> Self {
        Self { b, c, s, f }
    }

    /// A purely quadratic drift with no periodic part.
    pub const fn quadratic(b: f64) -> Self {
        Self {
            b,
            c: 0.0,
            s: 0.0,
            f: 0.0,
        }
    }

    /// Correction in degrees at `t` Julian centuries.
    pub fn at(&self, t: f64) -> f64 {
        let ft = (self.f * t).to_radians();
        self.b * t * t + self.c * ft.cos() + self.s * ft.sin()
    }
}

/// The element table row for one body: J2000.0 values and their rates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementRates {
    /// Semi-major axis (AU).
    pub a: SecularElement,
    /// Eccentricity.
    pub e: SecularElement,
    /// Inclination to the ecliptic (degrees).
    pub i: SecularElement,
    /// Mean longitude (degrees).
    pub l: SecularElement,
    /// Longitude of periapsis ϖ (degrees).
    pub long_peri: SecularElement,
    /// Longitude of the ascending node Ω (degrees).
    pub long_node: SecularElement,
    pub perturbation: Option<PerturbationTerms>,
}

impl ElementRates {
    /// Osculating elements at `t` Julian centuries since J2000.0.
    ///
    /// The mean longitude is wrapped to `[0, 360)`.
    pub fn evaluate(&self, t: f64) -> OrbitalElements {
        OrbitalElements {
            a: self.a.at(t),
            e: self.e.at(t),
            i: self.i.at(t),
            l: self.l.at(t).rem_euclid(360.0),
            long_peri: self.long_peri.at(t),
            long_node: self.long_node.at(t),
            arg_peri: None,
            mean_anomaly: None,
            perturbation: self.perturbation.map_or(0.0, |p| p.at(t)),
        }
    }
}

/// The six classical elements of an ellipse at one instant.
///
/// Angles are in degrees. Values are fresh per evaluation; nothing mutates them
/// between ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (AU).
    pub a: f64,
    /// Eccentricity, `0 <= e < 1`.
    pub e: f64,
    /// Inclination (degrees).
    pub i: f64,
    /// Mean longitude (degrees).
    pub l: f64,
    /// Longitude of periapsis ϖ (degrees).
    pub long_peri: f64,
    /// Longitude of the ascending node Ω (degrees).
    pub long_node: f64,
    /// Explicit argument of periapsis ω; derived as `ϖ - Ω` when absent.
    pub arg_peri: Option<f64>,
    /// Explicit mean anomaly; derived as `L - ϖ + perturbation` when absent.
    pub mean_anomaly: Option<f64>,
    /// Mean-anomaly correction (degrees), zero for the inner planets.
    pub perturbation: f64,
}

impl OrbitalElements {
    /// Elements with everything but the ellipse shape zeroed.
    pub fn new(a: f64, e: f64) -> Self {
        Self {
            a,
            e,
            i: 0.0,
            l: 0.0,
            long_peri: 0.0,
            long_node: 0.0,
            arg_peri: None,
            mean_anomaly: None,
            perturbation: 0.0,
        }
    }

    pub fn with_inclination(mut self, i: f64) -> Self {
        self.i = i;
        self
    }

    pub fn with_mean_longitude(mut self, l: f64) -> Self {
        self.l = l;
        self
    }

    pub fn with_longitude_of_periapsis(mut self, long_peri: f64) -> Self {
        self.long_peri = long_peri;
        self
    }

    pub fn with_ascending_node(mut self, long_node: f64) -> Self {
        self.long_node = long_node;
        self
    }

    pub fn with_argument_of_periapsis(mut self, arg_peri: f64) -> Self {
        self.arg_peri = Some(arg_peri);
        self
    }

    pub fn with_mean_anomaly(mut self, mean_anomaly: f64) -> Self {
        self.mean_anomaly = Some(mean_anomaly);
        self
    }

    /// Argument of periapsis ω in degrees.
    pub fn argument_of_periapsis(&self) -> f64 {
        self.arg_peri.unwrap_or(self.long_peri - self.long_node)
    }

    /// Mean anomaly in degrees, wrapped to `[-180, 180)` to keep precision
    /// over long spans of `T`.
    pub fn mean_anomaly(&self) -> f64 {
        let m = self
            .mean_anomaly
            .unwrap_or(self.l - self.long_peri + self.perturbation);
        (m + 180.0).rem_euclid(360.0) - 180.0
    }

    /// Semi-minor axis `b = a·√(1 - e²)`.
    pub fn semi_minor_axis(&self) -> f64 {
        self.a * (1.0 - self.e * self.e).sqrt()
    }
}
