//! Per-user directories for config and logs.

use std::io;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "astronium";

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("could not determine OS configuration directory")]
    NoConfigDir,

    #[error("platform I/O error: {0}")]
    Io(#[from] io::Error),
}

/// OS-specific directories, following XDG on Linux, Known Folders on Windows
/// and `Library` on macOS.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Holds the JSON log written by debug builds.
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Resolve directories without creating them.
    pub fn resolve() -> Result<Self, PlatformError> {
        let app_dir = dirs::config_dir()
            .ok_or(PlatformError::NoConfigDir)?
            .join(APP_NAME);
        Ok(Self::under(app_dir))
    }

    /// Resolve directories under `root` instead of the OS location.
    pub fn resolve_with_root(root: &Path) -> Self {
        Self::under(root.join(APP_NAME))
    }

    /// Use `config_dir` as given, with logs beside it.
    pub fn with_config_dir(mut self, config_dir: PathBuf) -> Self {
        self.log_dir = config_dir.join("logs");
        self.config_dir = config_dir;
        self
    }

    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }

    fn under(app_dir: PathBuf) -> Self {
        Self {
            config_dir: app_dir.join("config"),
            log_dir: app_dir.join("logs"),
        }
    }
}
