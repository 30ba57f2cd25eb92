//! Settings structs, their defaults, and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub solver: SolverConfig,
    pub debug: DebugConfig,
}

/// Where simulated time starts and how fast it runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Julian Date to start at. `None` reads the wall clock.
    pub start_jd: Option<f64>,
    /// Simulated seconds per real second; negative runs backwards.
    pub time_rate: f64,
    /// Start with the clock paused.
    pub paused: bool,
    /// Frames to run before the host exits.
    pub frames: u64,
    /// Pace frames against the wall clock and pick up edits to `config.ron`
    /// while running. Off: run every frame back to back as one fixed step.
    pub realtime: bool,
}

/// Kepler solver settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// Convergence threshold on successive iterates (radians).
    pub tolerance: f64,
    pub max_iterations: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "debug", "info,astronium_bodies=trace").
    pub log_level: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_jd: None,
            time_rate: 1.0,
            paused: false,
            frames: 600,
            realtime: false,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 1000,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the given directory, or write a default one there.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)
    }

    /// Re-read the file; `Some` only if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject values the solver or clock cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.solver.tolerance.is_finite() && self.solver.tolerance > 0.0) {
            return Err(ConfigError::Invalid {
                field: "solver.tolerance",
                reason: format!("must be a positive number, got {}", self.solver.tolerance),
            });
        }
        if !self.simulation.time_rate.is_finite() {
            return Err(ConfigError::Invalid {
                field: "simulation.time_rate",
                reason: "must be finite".to_string(),
            });
        }
        if let Some(jd) = self.simulation.start_jd
            && !jd.is_finite()
        {
            return Err(ConfigError::Invalid {
                field: "simulation.start_jd",
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
