//! Benchmarks for the sizing and growth calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kelly_sizer::growth::{FixedFractionalQuery, FixedFractionalSolver, GrowthProjectionInput, GrowthProjector};
use kelly_sizer::profile::RiskProfileName;
use kelly_sizer::sizing::{PositionSizeRecommender, PositionSizingInput};
use rust_decimal_macros::dec;

fn benchmark_fixed_fractional_solve(c: &mut Criterion) {
    let solver = FixedFractionalSolver::default();
    let query = FixedFractionalQuery::new(1.2, 0.5, 1.5, 50);

    c.bench_function("fixed_fractional_solve", |b| {
        b.iter(|| solver.solve(black_box(&query)))
    });
}

fn benchmark_fixed_fractional_unreachable(c: &mut Criterion) {
    let solver = FixedFractionalSolver::default();
    // Runs every iteration before giving up
    let query = FixedFractionalQuery::new(10.0, 0.5, 1.5, 5);

    c.bench_function("fixed_fractional_unreachable", |b| {
        b.iter(|| solver.solve(black_box(&query)))
    });
}

fn benchmark_growth_projection(c: &mut Criterion) {
    let projector = GrowthProjector::default();
    let input = GrowthProjectionInput::new(1000.0, 1056.25, 27).with_time_horizon(1.0);

    c.bench_function("growth_projection", |b| {
        b.iter(|| projector.project(black_box(&input)))
    });
}

fn benchmark_recommend(c: &mut Criterion) {
    let recommender = PositionSizeRecommender::default();
    let input = PositionSizingInput::new(dec!(10000), 55.0, 150.0, 100.0, RiskProfileName::Moderate)
        .with_vix(20.0);

    c.bench_function("recommend", |b| {
        b.iter(|| recommender.recommend(black_box(&input)))
    });
}

criterion_group!(
    benches,
    benchmark_fixed_fractional_solve,
    benchmark_fixed_fractional_unreachable,
    benchmark_growth_projection,
    benchmark_recommend
);
criterion_main!(benches);
