use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cometa::curve::sample_orbit;
use cometa::heliocentric::position_at;
use cometa::keplerian_element::KeplerianElements;
use cometa::scene_frame::SceneFrame;

/// Uniform random angle in [0, 360)
#[inline]
fn rand_angle_deg(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * 360.0
}

/// Build a random closed-ellipse element set in the given eccentricity range.
#[inline]
fn make_elements(rng: &mut StdRng, ecc_range: std::ops::Range<f64>) -> KeplerianElements {
    KeplerianElements {
        semi_major_axis: rng.random_range(0.5..40.0),
        eccentricity: rng.random_range(ecc_range),
        inclination: rand_angle_deg(rng),
        ascending_node_longitude: rand_angle_deg(rng),
        periapsis_argument: rand_angle_deg(rng),
        true_anomaly: rand_angle_deg(rng),
    }
}

/// Single position solves across random anomalies.
fn bench_position_at(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("position_at/random_elements", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (make_elements(&mut rng, 0.0..0.95), rand_angle_deg(&mut rng)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (elements, anomaly) in cases {
                    let pos = position_at(black_box(&elements), black_box(anomaly)).unwrap();
                    black_box(pos);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Full 200-sample curve, the per-submission workload of the scene assembler.
fn bench_sample_curve_stock(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let frame = SceneFrame::default();

    c.bench_function("sample_orbit/stock_200_samples", |b| {
        b.iter_batched(
            || make_elements(&mut rng, 0.0..0.95),
            |elements| {
                let curve = sample_orbit(black_box(&elements), 200, &frame).unwrap();
                black_box(curve);
            },
            BatchSize::SmallInput,
        )
    });
}

/// High-eccentricity (still elliptic) curves: e ∈ [0.9, 0.99]
fn bench_sample_curve_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let frame = SceneFrame::default();

    c.bench_function("sample_orbit/high_e_0.9..0.99", |b| {
        b.iter_batched(
            || make_elements(&mut rng, 0.9..0.99),
            |elements| {
                let curve = sample_orbit(black_box(&elements), 200, &frame).unwrap();
                black_box(curve);
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_position_at, bench_sample_curve_stock, bench_sample_curve_high_e
);
criterion_main!(benches);
