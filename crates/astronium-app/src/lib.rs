//! Host for the solar-system simulation.
//!
//! Drives a [`Simulation`] from a fixed-timestep [`GameLoop`]: every fixed
//! update advances simulated time and re-propagates the planets, every frame
//! hands positions to the render adapter.

mod error;
pub mod game_loop;
pub mod platform;
mod simulation;
mod startup;

pub use error::AppError;
pub use game_loop::{FIXED_DT, GameLoop, MAX_FRAME_TIME};
pub use platform::{PlatformDirs, PlatformError};
pub use simulation::Simulation;
pub use startup::Startup;
