//! Time error types.

/// Errors that can occur while reading or converting time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeError {
    /// The operating system clock could not provide the current instant.
    #[error("wall clock unavailable: {0}")]
    ClockUnavailable(String),
}
