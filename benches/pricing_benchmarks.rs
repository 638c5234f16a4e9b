//! Criterion benchmarks for the pricing engines.
//!
//! Measures closed-form pricing, Monte Carlo simulation across path
//! counts, and implied volatility inversion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use optpricer::analytical::BlackScholes;
use optpricer::implied_vol::ImpliedVolSolver;
use optpricer::mc::{MonteCarloConfig, MonteCarloPricer};
use optpricer::types::{MarketInputs, OptionType};

fn atm_call() -> MarketInputs {
    MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
        .expect("valid benchmark inputs")
}

/// Benchmark closed-form price and Greeks evaluation.
fn bench_analytical(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytical");
    let inputs = atm_call();
    let pricer = BlackScholes::new(inputs).expect("valid inputs");

    group.bench_function("price", |b| {
        b.iter(|| black_box(&pricer).price());
    });

    group.bench_function("greeks", |b| {
        b.iter(|| black_box(&pricer).greeks());
    });

    group.finish();
}

/// Benchmark Monte Carlo pricing across path counts.
fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(20);
    let inputs = atm_call();

    for n_paths in [10_000, 100_000, 1_000_000] {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .seed(42)
            .build()
            .expect("valid config");
        let mut pricer = MonteCarloPricer::new(config).expect("valid config");

        group.bench_with_input(BenchmarkId::new("price", n_paths), &inputs, |b, inputs| {
            b.iter(|| pricer.price(black_box(inputs)).expect("valid inputs"));
        });
    }

    // Greeks re-price eleven times with matched draws.
    let config = MonteCarloConfig::builder()
        .n_paths(100_000)
        .seed(42)
        .build()
        .expect("valid config");
    let mut pricer = MonteCarloPricer::new(config).expect("valid config");
    group.bench_with_input(
        BenchmarkId::new("greeks", 100_000),
        &inputs,
        |b, inputs| {
            b.iter(|| pricer.greeks(black_box(inputs)).expect("valid inputs"));
        },
    );

    group.finish();
}

/// Benchmark implied volatility inversion.
fn bench_implied_vol(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_vol");
    let solver = ImpliedVolSolver::with_defaults();

    // Newton path: liquid at-the-money quote.
    let atm = atm_call();
    let atm_price = BlackScholes::new(atm).expect("valid inputs").price();
    group.bench_function("newton_atm", |b| {
        b.iter(|| {
            solver
                .solve(black_box(&atm), black_box(atm_price))
                .expect("solvable quote")
        });
    });

    // Bisection path: short-dated, far out of the money.
    let otm = MarketInputs::new(100.0, 300.0, 0.1, 0.05, 0.2, OptionType::Call)
        .expect("valid benchmark inputs");
    let otm_price = BlackScholes::new(MarketInputs {
        volatility: 0.9,
        ..otm
    })
    .expect("valid inputs")
    .price();
    group.bench_function("bisection_deep_otm", |b| {
        b.iter(|| {
            solver
                .solve(black_box(&otm), black_box(otm_price))
                .expect("solvable quote")
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_analytical,
    bench_monte_carlo,
    bench_implied_vol
);
criterion_main!(benches);
