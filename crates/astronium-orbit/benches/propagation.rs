use astronium_orbit::*;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_kepler_solve(c: &mut Criterion) {
    let solver = KeplerSolver::default();
    c.bench_function("kepler_solve_e0.2", |bencher| {
        bencher.iter(|| solver.solve_eccentric_anomaly(black_box(174.79), black_box(0.2056)))
    });
}

fn bench_propagate_earth(c: &mut Criterion) {
    let propagator = Propagator::default();
    c.bench_function("propagate_earth", |bencher| {
        bencher.iter(|| propagator.propagate_planet(PlanetId::Earth, black_box(0.2417)))
    });
}

fn bench_propagate_all_planets(c: &mut Criterion) {
    let propagator = Propagator::default();
    c.bench_function("propagate_all_planets", |bencher| {
        bencher.iter(|| {
            for planet in PlanetId::ALL {
                let _ = black_box(propagator.propagate_planet(planet, black_box(0.2417)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_kepler_solve,
    bench_propagate_earth,
    bench_propagate_all_planets
);
criterion_main!(benches);
