//! Ownership of all bodies and the per-step update.

use std::fmt;

use astronium_orbit::Propagator;
use glam::DVec3;
use tracing::{debug, info, warn};

use crate::body::{CelestialBody, Planet, Star};
use crate::error::BodyError;
use crate::render::{BodyVisual, RenderAdapter};

/// Handle to a body in a [`BodyRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "body #{}", self.0)
    }
}

/// Outcome of one registry step.
#[derive(Debug, Default, PartialEq)]
pub struct TickReport {
    /// Planets whose position was recomputed.
    pub updated: usize,
    /// Planets left where they were, and why.
    pub skipped: Vec<(BodyId, BodyError)>,
}

impl TickReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Owns every body for the lifetime of the simulation.
#[derive(Clone, Debug, Default)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
    propagator: Propagator,
}

impl BodyRegistry {
    pub fn new(propagator: Propagator) -> Self {
        Self {
            bodies: Vec::new(),
            propagator,
        }
    }

    pub fn propagator(&self) -> &Propagator {
        &self.propagator
    }

    pub fn add_star(&mut self, star: Star) -> BodyId {
        let id = BodyId(self.bodies.len());
        debug!(name = %star.name, %id, "registered star");
        self.bodies.push(star.into());
        id
    }

    /// Register a planet. Its star must already be in the registry.
    pub fn add_planet(&mut self, planet: Planet) -> Result<BodyId, BodyError> {
        self.star(planet.star)?;
        if planet.source().is_none() {
            warn!(name = %planet.name, "no element table; position will stay fixed");
        }

        let id = BodyId(self.bodies.len());
        debug!(name = %planet.name, %id, "registered planet");
        self.bodies.push(planet.into());
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.0)
    }

    /// Find a body by exact name.
    pub fn find(&self, name: &str) -> Option<(BodyId, &CelestialBody)> {
        self.iter().find(|(_, body)| body.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    fn star(&self, id: BodyId) -> Result<&Star, BodyError> {
        self.get(id)
            .and_then(CelestialBody::as_star)
            .ok_or(BodyError::UnknownStar(id))
    }

    /// Compute initial positions at `t` Julian centuries and hand every body to
    /// the renderer.
    pub fn spawn(&mut self, adapter: &mut dyn RenderAdapter, t: f64) -> TickReport {
        let report = self.tick(t);
        for (id, body) in self.iter() {
            adapter.spawn_body(&BodyVisual::from_body(id, body));
            info!(name = body.name(), "spawned");
        }
        report
    }

    /// Re-propagate every planet at `t` Julian centuries.
    ///
    /// A planet that fails keeps its previous position; the rest still update.
    pub fn tick(&mut self, t: f64) -> TickReport {
        let mut report = TickReport::default();
        for index in 0..self.bodies.len() {
            let id = BodyId(index);
            match self.advance(id, t) {
                Ok(true) => report.updated += 1,
                Ok(false) => {}
                Err(err @ BodyError::UnknownBody(_)) => {
                    debug!(%id, %err, "skipping body");
                    report.skipped.push((id, err));
                }
                Err(err) => {
                    warn!(%id, %err, t, "skipping body for this step");
                    report.skipped.push((id, err));
                }
            }
        }
        report
    }

    /// Send every body's current state to the renderer.
    pub fn present(&self, adapter: &mut dyn RenderAdapter) {
        for (id, body) in self.iter() {
            adapter.update_body(&BodyVisual::from_body(id, body));
        }
    }

    /// Returns `Ok(false)` for bodies that never move.
    fn advance(&mut self, id: BodyId, t: f64) -> Result<bool, BodyError> {
        let (source, star_id) = match &self.bodies[id.0] {
            CelestialBody::Star(_) => return Ok(false),
            CelestialBody::Planet(p) => (
                p.source().ok_or_else(|| BodyError::UnknownBody(p.name.clone()))?,
                p.star,
            ),
        };

        let star_position: DVec3 = self.star(star_id)?.position_au();
        let orbit = self.propagator.propagate_planet(source, t)?;

        if let CelestialBody::Planet(p) = &mut self.bodies[id.0] {
            p.apply(orbit, star_position);
        }
        Ok(true)
    }
}
