use astronium_app::{GameLoop, Simulation};
use astronium_bodies::{BodyKind, RecordingAdapter};
use astronium_config::Config;
use astronium_time::{FixedClock, JulianDate, rates};

fn config(rate: f64) -> Config {
    let mut config = Config::default();
    config.simulation.start_jd = Some(JulianDate::J2000.days());
    config.simulation.time_rate = rate;
    config
}

#[test]
fn two_simulated_days_in_two_real_seconds() {
    let mut sim = Simulation::from_config(
        &config(rates::DAY_PER_SEC),
        &FixedClock(JulianDate::J2000),
        RecordingAdapter::new(),
    )
    .unwrap();
    sim.start();

    let mut game_loop = GameLoop::new();
    sim.run_headless(&mut game_loop, 120);

    assert_eq!(game_loop.frame_count(), 120);
    assert_eq!(game_loop.update_count(), 120);
    assert!((sim.clock().current().days() - (JulianDate::J2000.days() + 2.0)).abs() < 1e-6);
    assert!(sim.last_report().is_clean());
    assert_eq!(sim.adapter().updates(), 120 * 10);
}

#[test]
fn snapshot_lists_sun_then_planets() {
    let mut sim = Simulation::from_config(
        &config(rates::REALTIME),
        &FixedClock(JulianDate::J2000),
        RecordingAdapter::new(),
    )
    .unwrap();
    sim.start();

    let snapshot = sim.snapshot();
    let names: Vec<_> = snapshot.bodies.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(
        names,
        ["Sun", "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto"]
    );
    assert_eq!(snapshot.bodies[0].kind, BodyKind::Star);

    let earth = &snapshot.bodies[3];
    assert!((earth.position_au[0] - -0.177_210_661).abs() < 1e-6);
    assert!((earth.position_au[1] - 0.967_183_985).abs() < 1e-6);
}

#[test]
fn reversed_time_runs_backwards() {
    let mut sim = Simulation::from_config(
        &config(-rates::YEAR_PER_SEC),
        &FixedClock(JulianDate::J2000),
        RecordingAdapter::new(),
    )
    .unwrap();
    sim.start();
    sim.run_headless(&mut GameLoop::new(), 60);

    let elapsed = sim.clock().current().days() - JulianDate::J2000.days();
    assert!((elapsed + 365.25).abs() < 1e-6, "elapsed {elapsed} days");
}
