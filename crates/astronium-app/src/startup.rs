//! Directory, config and CLI resolution before the first frame.

use std::path::PathBuf;

use astronium_config::{CONFIG_FILE, CliArgs, Config};
use tracing::info;

use crate::error::AppError;
use crate::platform::PlatformDirs;

/// The resolved environment for one run.
#[derive(Debug, Clone)]
pub struct Startup {
    pub dirs: PlatformDirs,
    /// Effective settings: `config.ron` with CLI overrides applied.
    pub config: Config,
    pub config_path: PathBuf,
    /// `config.ron` did not exist and a default one was written.
    pub created_config: bool,
    /// Settings exactly as read from disk, for change detection on reload.
    file_config: Config,
}

impl Startup {
    /// Create directories, load or create `config.ron`, apply `args` and
    /// validate the result.
    ///
    /// Logging is usually not installed yet; call [`Startup::log_summary`]
    /// once it is.
    pub fn prepare(args: &CliArgs, dirs: PlatformDirs) -> Result<Self, AppError> {
        let dirs = match &args.config {
            Some(config_dir) => dirs.with_config_dir(config_dir.clone()),
            None => dirs,
        };
        dirs.create_dirs()?;

        let config_path = dirs.config_dir.join(CONFIG_FILE);
        let created_config = !config_path.exists();
        let file_config = Config::load_or_create(&dirs.config_dir)?;

        let mut config = file_config.clone();
        config.apply_cli_overrides(args);
        config.validate()?;

        Ok(Self {
            dirs,
            config,
            config_path,
            created_config,
            file_config,
        })
    }

    pub fn log_summary(&self) {
        if self.created_config {
            info!(path = %self.config_path.display(), "created default config");
        } else {
            info!(path = %self.config_path.display(), "loaded config");
        }
        info!(
            log_dir = %self.dirs.log_dir.display(),
            frames = self.config.simulation.frames,
            realtime = self.config.simulation.realtime,
            "startup"
        );
    }

    /// Re-read `config.ron`. Returns the new effective settings if the file
    /// changed; CLI overrides still win.
    pub fn reload_config(&mut self, args: &CliArgs) -> Result<Option<&Config>, AppError> {
        let Some(file_config) = self.file_config.reload(&self.dirs.config_dir)? else {
            return Ok(None);
        };

        let mut config = file_config.clone();
        config.apply_cli_overrides(args);
        config.validate()?;

        self.file_config = file_config;
        self.config = config;
        Ok(Some(&self.config))
    }
}
