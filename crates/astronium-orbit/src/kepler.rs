//! Kepler's equation `M = E - e·sin(E)` solved by fixed-point iteration.

use crate::error::OrbitError;

/// Convergence threshold on successive iterates, in radians.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Hard cap on iterations so degenerate inputs terminate.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Solver for the eccentric anomaly.
///
/// Iterates `E_{n+1} = M + e·sin(E_n)` from `E_0 = M`. The map contracts by
/// roughly `e·cos(E)` per step, so it converges quickly for the planets
/// (e < 0.25) but slows to a crawl as `e` approaches 1, where it gives up with
/// [`OrbitError::NonConvergent`] after `max_iterations` steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolver {
    /// Stop once `|E_{n+1} - E_n|` falls below this (radians).
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl KeplerSolver {
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Eccentric anomaly (degrees) for a mean anomaly (degrees) and eccentricity.
    pub fn solve_eccentric_anomaly(
        &self,
        mean_anomaly_deg: f64,
        eccentricity: f64,
    ) -> Result<f64, OrbitError> {
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitError::InvalidEccentricity(eccentricity));
        }

        let m = mean_anomaly_deg.to_radians();
        let mut ea = m;
        for _ in 0..self.max_iterations {
            let next = m + eccentricity * ea.sin();
            if (next - ea).abs() < self.tolerance {
                return Ok(next.to_degrees());
            }
            ea = next;
        }

        Err(OrbitError::NonConvergent {
            mean_anomaly: mean_anomaly_deg,
            eccentricity,
            iterations: self.max_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(mean_anomaly_deg: f64, e: f64, ea_deg: f64) -> f64 {
        let ea = ea_deg.to_radians();
        (ea - e * ea.sin() - mean_anomaly_deg.to_radians()).abs()
    }

    #[test]
    fn test_circular_orbit_is_identity() {
        let solver = KeplerSolver::default();
        for m in [-170.0, -45.0, 0.0, 30.0, 90.0, 179.0] {
            let ea = solver.solve_eccentric_anomaly(m, 0.0).unwrap();
            assert!((ea - m).abs() < 1e-12, "M = {m}, E = {ea}");
        }
    }

    #[test]
    fn test_apsides_are_fixed_points() {
        let solver = KeplerSolver::default();
        assert_eq!(solver.solve_eccentric_anomaly(0.0, 0.2).unwrap(), 0.0);
        let ea = solver.solve_eccentric_anomaly(180.0, 0.2).unwrap();
        assert!((ea - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_kepler_residual_within_tolerance() {
        let solver = KeplerSolver::default();
        for e_pct in (0..90).step_by(3) {
            let e = e_pct as f64 / 100.0;
            for m_step in -36..=36 {
                let m = m_step as f64 * 5.0 + 0.001;
                let ea = solver
                    .solve_eccentric_anomaly(m, e)
                    .unwrap_or_else(|err| panic!("M = {m}, e = {e}: {err}"));
                let r = residual(m, e, ea);
                assert!(r < solver.tolerance, "M = {m}, e = {e}, residual = {r}");
            }
        }
    }

    #[test]
    fn test_earth_at_j2000() {
        let solver = KeplerSolver::default();
        let ea = solver
            .solve_eccentric_anomaly(-2.46314313, 0.01673163)
            .unwrap();
        assert!((ea - -2.505_043_234_546).abs() < 1e-9, "E = {ea}");
    }

    #[test]
    fn test_near_parabolic_hits_iteration_cap() {
        let solver = KeplerSolver::new(1e-15, 1000);
        let err = solver.solve_eccentric_anomaly(0.001, 0.999_999).unwrap_err();
        assert_eq!(
            err,
            OrbitError::NonConvergent {
                mean_anomaly: 0.001,
                eccentricity: 0.999_999,
                iterations: 1000,
            }
        );
    }

    #[test]
    fn test_zero_iteration_cap_never_converges() {
        let solver = KeplerSolver::new(DEFAULT_TOLERANCE, 0);
        assert!(matches!(
            solver.solve_eccentric_anomaly(10.0, 0.1),
            Err(OrbitError::NonConvergent { iterations: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_unbound_eccentricity() {
        let solver = KeplerSolver::default();
        assert_eq!(
            solver.solve_eccentric_anomaly(10.0, 1.0),
            Err(OrbitError::InvalidEccentricity(1.0))
        );
        assert!(solver.solve_eccentric_anomaly(10.0, -0.1).is_err());
        assert!(solver.solve_eccentric_anomaly(10.0, f64::NAN).is_err());
    }
}
