//! The boundary to the scene graph: positions and scales in render units.

use std::collections::BTreeMap;

use glam::DVec3;

use crate::body::CelestialBody;
use crate::registry::BodyId;

/// Render units per astronomical unit (one render unit is one solar radius).
pub const RENDER_UNITS_PER_AU: f64 = 214.942_557_651_690_38;

/// Solar radius (km); body radii are divided by this to get render scale.
pub const SOLAR_RADIUS_KM: f64 = 695_990.0;

/// Render units per light-year, for stellar distances.
pub const RENDER_UNITS_PER_LIGHT_YEAR: f64 = 13_593_198.857_139_902;

/// Astronomical units per light-year.
pub const AU_PER_LIGHT_YEAR: f64 = RENDER_UNITS_PER_LIGHT_YEAR / RENDER_UNITS_PER_AU;

/// What the renderer needs to place one body for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyVisual {
    pub id: BodyId,
    pub name: String,
    /// Position (render units).
    pub position: DVec3,
    /// Per-axis scale (render units); z is the body's polar axis.
    pub scale: DVec3,
    pub texture: Option<String>,
}

impl BodyVisual {
    /// Convert a body's physical state into render units.
    pub fn from_body(id: BodyId, body: &CelestialBody) -> Self {
        let s = body.radius_km() / SOLAR_RADIUS_KM;
        Self {
            id,
            name: body.name().to_string(),
            position: body.position_au() * RENDER_UNITS_PER_AU,
            scale: DVec3::new(s, s, s - s * body.flattening()),
            texture: body.texture().map(str::to_string),
        }
    }
}

/// A consumer of body positions, typically a scene graph.
pub trait RenderAdapter {
    /// Called once per body when the scene is first built.
    fn spawn_body(&mut self, visual: &BodyVisual);

    /// Called once per body per presented frame.
    fn update_body(&mut self, visual: &BodyVisual);
}

/// Keeps the most recent visual per body. Used by the headless host and tests.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    visuals: BTreeMap<BodyId, BodyVisual>,
    spawned: usize,
    updates: usize,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: BodyId) -> Option<&BodyVisual> {
        self.visuals.get(&id)
    }

    /// Look up the latest visual by body name.
    pub fn find(&self, name: &str) -> Option<&BodyVisual> {
        self.visuals.values().find(|v| v.name == name)
    }

    pub fn visuals(&self) -> impl Iterator<Item = &BodyVisual> {
        self.visuals.values()
    }

    /// Number of `spawn_body` calls received.
    pub fn spawned(&self) -> usize {
        self.spawned
    }

    /// Number of `update_body` calls received.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl RenderAdapter for RecordingAdapter {
    fn spawn_body(&mut self, visual: &BodyVisual) {
        self.spawned += 1;
        self.visuals.insert(visual.id, visual.clone());
    }

    fn update_body(&mut self, visual: &BodyVisual) {
        self.updates += 1;
        self.visuals.insert(visual.id, visual.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Planet, Star};

    #[test]
    fn test_light_year_in_au() {
        assert!((AU_PER_LIGHT_YEAR - 63_241.077_084).abs() < 1e-5);
    }

    #[test]
    fn test_sun_has_unit_scale() {
        let sun: CelestialBody = Star::new("Sun", SOLAR_RADIUS_KM, 1.9891e30, 0.0, 0.0, 0.0, "G2V")
            .with_texture("sun_placeholder.jpg")
            .into();
        let visual = BodyVisual::from_body(BodyId(0), &sun);
        assert_eq!(visual.scale, DVec3::ONE);
        assert_eq!(visual.position, DVec3::ZERO);
        assert_eq!(visual.texture.as_deref(), Some("sun_placeholder.jpg"));
    }

    #[test]
    fn test_oblateness_only_shrinks_vertical_scale() {
        let jupiter: CelestialBody = Planet::new("Jupiter", 71_492.0, 1.8982e27, BodyId(0))
            .with_flattening(0.06487)
            .with_position(DVec3::new(1.0, 2.0, 0.5))
            .into();
        let visual = BodyVisual::from_body(BodyId(1), &jupiter);

        let s = 71_492.0 / SOLAR_RADIUS_KM;
        assert_eq!(visual.scale.x, s);
        assert_eq!(visual.scale.y, s);
        assert!((visual.scale.z - s * (1.0 - 0.06487)).abs() < 1e-15);
        // Position is unaffected by flattening.
        assert_eq!(visual.position, DVec3::new(1.0, 2.0, 0.5) * RENDER_UNITS_PER_AU);
    }

    #[test]
    fn test_recording_adapter_keeps_latest() {
        let mut adapter = RecordingAdapter::new();
        let planet: CelestialBody = Planet::new("Mars", 3396.2, 6.4171e23, BodyId(0)).into();
        let mut visual = BodyVisual::from_body(BodyId(1), &planet);

        adapter.spawn_body(&visual);
        visual.position = DVec3::X;
        adapter.update_body(&visual);

        assert_eq!(adapter.spawned(), 1);
        assert_eq!(adapter.updates(), 1);
        assert_eq!(adapter.get(BodyId(1)).unwrap().position, DVec3::X);
        assert_eq!(adapter.find("Mars").unwrap().id, BodyId(1));
        assert_eq!(adapter.visuals().count(), 1);
    }
}
