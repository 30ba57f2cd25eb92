//! Runtime settings for the simulation host.
//!
//! Settings persist to disk as `config.ron`. Missing fields fall back to their
//! defaults and unknown fields are ignored, so older and newer files both load.
//! Command-line flags override whatever was loaded.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE, Config, DebugConfig, SimulationConfig, SolverConfig};
pub use error::ConfigError;
