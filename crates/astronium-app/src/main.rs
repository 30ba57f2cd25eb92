//! Solar-system run: load config, propagate for a number of frames, print the
//! final state as JSON.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use astronium_app::{AppError, GameLoop, PlatformDirs, Simulation, Startup};
use astronium_bodies::RecordingAdapter;
use astronium_config::CliArgs;
use astronium_time::SystemClock;
use clap::Parser;
use tracing::{info, warn};

/// How often a realtime run checks `config.ron` for edits.
const CONFIG_POLL_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("astronium: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let mut startup = Startup::prepare(args, PlatformDirs::resolve()?)?;

    astronium_log::init_logging(
        Some(&startup.dirs.log_dir),
        cfg!(debug_assertions),
        Some(&startup.config),
    );
    startup.log_summary();

    let mut sim = Simulation::from_config(&startup.config, &SystemClock, RecordingAdapter::new())?;
    sim.start();

    let mut game_loop = GameLoop::new();
    let frames = startup.config.simulation.frames;
    if startup.config.simulation.realtime {
        let mut last_poll = Instant::now();
        sim.run_realtime(&mut game_loop, frames, |sim| {
            if last_poll.elapsed() < CONFIG_POLL_INTERVAL {
                return;
            }
            last_poll = Instant::now();
            match startup.reload_config(args) {
                Ok(Some(config)) => sim.apply_settings(&config.simulation),
                Ok(None) => {}
                Err(e) => warn!(error = %e, "config reload failed; keeping current settings"),
            }
        });
    } else {
        sim.run_headless(&mut game_loop, frames);
    }

    info!(
        frames = game_loop.frame_count(),
        steps = game_loop.update_count(),
        end = %sim.clock().current(),
        "run complete"
    );

    for visual in sim.adapter().visuals() {
        info!(
            name = %visual.name,
            x = visual.position.x,
            y = visual.position.y,
            z = visual.position.z,
            "final position"
        );
    }

    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    Ok(())
}
