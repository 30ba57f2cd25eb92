use astronium_config::ConfigError;
use astronium_time::TimeError;

use crate::platform::PlatformError;

/// Anything that stops the host from starting or finishing a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not determine start time: {0}")]
    Time(#[from] TimeError),

    #[error("failed to write snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
