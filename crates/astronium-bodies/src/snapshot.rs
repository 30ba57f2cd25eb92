//! Serializable view of the registry for logs and dumps.

use serde::Serialize;

use crate::body::CelestialBody;
use crate::registry::BodyRegistry;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Star,
    Planet,
}

/// One body's state at the snapshot time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub name: String,
    pub kind: BodyKind,
    /// Position (AU); relative to the parent star for planets.
    pub position_au: [f64; 3],
    /// Distance from the parent star (AU); zero for stars.
    pub distance_au: f64,
    pub radius_km: f64,
    /// Eccentric anomaly of the last solved orbit (degrees).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eccentric_anomaly: Option<f64>,
}

/// Every body's state at one instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegistrySnapshot {
    /// Julian centuries since J2000.0.
    pub centuries: f64,
    pub bodies: Vec<BodySnapshot>,
}

impl RegistrySnapshot {
    pub fn capture(registry: &BodyRegistry, centuries: f64) -> Self {
        let bodies = registry
            .iter()
            .map(|(_, body)| {
                let position = body.position_au();
                let (kind, distance_au, eccentric_anomaly) = match body {
                    CelestialBody::Star(_) => (BodyKind::Star, 0.0, None),
                    CelestialBody::Planet(p) => (
                        BodyKind::Planet,
                        position.length(),
                        p.orbit().map(|o| o.eccentric_anomaly),
                    ),
                };
                BodySnapshot {
                    name: body.name().to_string(),
                    kind,
                    position_au: position.to_array(),
                    distance_au,
                    radius_km: body.radius_km(),
                    eccentric_anomaly,
                }
            })
            .collect();

        Self { centuries, bodies }
    }
}
