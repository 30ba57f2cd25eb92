//! The running simulation: clock, bodies and renderer wired together.

use std::time::{Duration, Instant};

use astronium_bodies::{BodyRegistry, RegistrySnapshot, RenderAdapter, TickReport, solar_system_with};
use astronium_config::{Config, SimulationConfig};
use astronium_orbit::{KeplerSolver, Propagator};
use astronium_time::{Clock, JulianDate, SimulationClock};
use tracing::{debug, info};

use crate::error::AppError;
use crate::game_loop::{FIXED_DT, GameLoop};

/// Owns the simulated time, the bodies and the renderer.
///
/// Time only reaches the bodies through [`Simulation::update`], which passes the
/// clock's current `T` into [`BodyRegistry::tick`].
pub struct Simulation<A: RenderAdapter> {
    clock: SimulationClock,
    registry: BodyRegistry,
    adapter: A,
    last_report: TickReport,
}

impl<A: RenderAdapter> Simulation<A> {
    pub fn new(clock: SimulationClock, registry: BodyRegistry, adapter: A) -> Self {
        Self {
            clock,
            registry,
            adapter,
            last_report: TickReport::default(),
        }
    }

    /// The solar system set up from `config`. Falls back to `wall_clock` when
    /// no start date is configured.
    pub fn from_config(
        config: &Config,
        wall_clock: &impl Clock,
        adapter: A,
    ) -> Result<Self, AppError> {
        let sim = &config.simulation;
        let mut clock = match sim.start_jd {
            Some(jd) => SimulationClock::at(JulianDate(jd)),
            None => SimulationClock::from_clock(wall_clock)?,
        };
        clock.set_rate(sim.time_rate);
        if sim.paused {
            clock.pause();
        }

        let solver = KeplerSolver::new(config.solver.tolerance, config.solver.max_iterations);
        let registry = solar_system_with(BodyRegistry::new(Propagator::new(solver)));
        info!(start = %clock.current(), rate = clock.rate(), bodies = registry.len(), "simulation ready");

        Ok(Self::new(clock, registry, adapter))
    }

    /// Compute positions at the current time and spawn every body.
    pub fn start(&mut self) -> &TickReport {
        self.last_report = self.registry.spawn(&mut self.adapter, self.clock.centuries());
        &self.last_report
    }

    /// One fixed step: advance time by `real_dt` seconds and re-propagate.
    pub fn update(&mut self, real_dt: f64) -> &TickReport {
        let now = self.clock.advance(real_dt);
        self.last_report = self.registry.tick(now.centuries_since_j2000());
        debug!(jd = now.days(), updated = self.last_report.updated, "step");
        &self.last_report
    }

    /// Hand every body's current state to the renderer.
    pub fn present(&mut self) {
        self.registry.present(&mut self.adapter);
    }

    /// Run `frames` frames of exactly one fixed step each, presenting after
    /// every frame.
    pub fn run_headless(&mut self, game_loop: &mut GameLoop, frames: u64) {
        for _ in 0..frames {
            game_loop.advance(FIXED_DT, |dt, _| {
                self.update(dt);
            });
            self.present();
        }
    }

    /// Run `frames` frames paced against the wall clock, calling `between_frames`
    /// after each one is presented.
    ///
    /// Simulated time follows measured real time through [`GameLoop::tick`].
    pub fn run_realtime(
        &mut self,
        game_loop: &mut GameLoop,
        frames: u64,
        mut between_frames: impl FnMut(&mut Self),
    ) {
        let frame_budget = Duration::from_secs_f64(FIXED_DT);
        for _ in 0..frames {
            let started = Instant::now();
            game_loop.tick(|dt, _| {
                self.update(dt);
            });
            self.present();
            between_frames(self);

            if let Some(rest) = frame_budget.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    /// Apply playback settings changed while running. The current instant is
    /// kept; `start_jd` only matters at startup.
    pub fn apply_settings(&mut self, settings: &SimulationConfig) {
        self.clock.set_rate(settings.time_rate);
        if settings.paused {
            self.clock.pause();
        } else {
            self.clock.resume();
        }
        info!(rate = self.clock.rate(), paused = self.clock.is_paused(), "playback settings applied");
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot::capture(&self.registry, self.clock.centuries())
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Outcome of the most recent start or update.
    pub fn last_report(&self) -> &TickReport {
        &self.last_report
    }
}
