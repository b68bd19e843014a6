use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nataly::aspects::{AspectCalculator, AspectSettings, MatchPolicy};
use nataly::bodies::Body;

const CUSPS: [f64; 12] = [
    0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
];

const NAMES: [&str; 10] = [
    "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

fn sample_bodies() -> Vec<Body> {
    NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Body::new(*name, (i as f64) * 37.3, 1.0 - i as f64 * 0.1, &CUSPS))
        .collect()
}

fn bench_calculate_aspect(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let settings = AspectSettings::default();
    let sun = Body::new("Sun", 100.0, 1.0, &CUSPS);
    let moon = Body::new("Moon", 102.0, 13.0, &CUSPS);

    c.bench_function("calculate_aspect", |b| {
        b.iter(|| calculator.calculate_aspect(black_box(&sun), black_box(&moon), &settings))
    });
}

fn bench_compute_chart_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let bodies = sample_bodies();
    let refs: Vec<&Body> = bodies.iter().collect();
    let nearest = AspectSettings::default();
    let in_orb = AspectSettings::default().with_policy(MatchPolicy::InOrb);

    c.bench_function("compute_chart_aspects_nearest", |b| {
        b.iter(|| calculator.compute_chart_aspects(black_box(&refs), black_box(&nearest)))
    });
    c.bench_function("compute_chart_aspects_in_orb", |b| {
        b.iter(|| calculator.compute_chart_aspects(black_box(&refs), black_box(&in_orb)))
    });
}

criterion_group!(benches, bench_calculate_aspect, bench_compute_chart_aspects);
criterion_main!(benches);
