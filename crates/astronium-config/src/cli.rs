//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Headless solar-system propagation.
///
/// Flags override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "astronium", about = "Solar-system orbital propagation")]
pub struct CliArgs {
    /// Julian Date to start at (default: now).
    #[arg(long)]
    pub start_jd: Option<f64>,

    /// Simulated seconds per real second.
    #[arg(long, allow_negative_numbers = true)]
    pub time_rate: Option<f64>,

    /// Number of frames to run before exiting.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Run at wall-clock pace and reload `config.ron` while running.
    #[arg(long)]
    pub realtime: bool,

    /// Kepler solver convergence tolerance (radians).
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(jd) = args.start_jd {
            self.simulation.start_jd = Some(jd);
        }
        if let Some(rate) = args.time_rate {
            self.simulation.time_rate = rate;
        }
        if let Some(frames) = args.frames {
            self.simulation.frames = frames;
        }
        if args.realtime {
            self.simulation.realtime = true;
        }
        if let Some(tolerance) = args.tolerance {
            self.solver.tolerance = tolerance;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            start_jd: Some(2_451_545.0),
            frames: Some(5),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.simulation.start_jd, Some(2_451_545.0));
        assert_eq!(config.simulation.frames, 5);
        // Non-overridden fields retain defaults
        assert_eq!(config.simulation.time_rate, 1.0);
        assert_eq!(config.solver.max_iterations, 1000);
    }

    #[test]
    fn test_cli_no_override() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "astronium",
            "--time-rate",
            "-86400",
            "--tolerance",
            "1e-10",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.time_rate, Some(-86_400.0));
        assert_eq!(args.tolerance, Some(1e-10));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.start_jd.is_none());
        assert!(!args.realtime);
    }

    #[test]
    fn test_realtime_flag_only_enables() {
        let args = CliArgs::try_parse_from(["astronium", "--realtime"]).unwrap();
        let mut config = Config::default();
        config.apply_cli_overrides(&args);
        assert!(config.simulation.realtime);

        config.apply_cli_overrides(&CliArgs::default());
        assert!(config.simulation.realtime);
    }
}
