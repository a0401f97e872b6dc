//! Criterion benchmarks for reference water balance runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use loam_bench::{reference_profile, stress_profile};
use loam_engine::{BalanceConfig, BatchedRuns, WaterBalanceEngine};
use loam_forcing::DailyInput;

fn bench_step_day(c: &mut Criterion) {
    let profile = reference_profile(42).unwrap();
    let mut engine = WaterBalanceEngine::new(profile.config).unwrap();
    let input = DailyInput::new(5.0, 3.0);

    c.bench_function("step_day_6_layers", |b| {
        b.iter(|| {
            let outcome = engine.step_day(black_box(&input)).unwrap();
            black_box(outcome);
        });
    });
}

fn bench_annual_run(c: &mut Criterion) {
    let profile = reference_profile(42).unwrap();
    let mut engine = WaterBalanceEngine::new(profile.config).unwrap();

    c.bench_function("annual_run_365_days", |b| {
        b.iter(|| {
            engine.reset();
            black_box(engine.run(&profile.forcing));
        });
    });
}

fn bench_decade_stress(c: &mut Criterion) {
    let profile = stress_profile(42).unwrap();
    let mut engine = WaterBalanceEngine::new(profile.config).unwrap();

    c.bench_function("stress_run_3650_days", |b| {
        b.iter(|| {
            engine.reset();
            black_box(engine.run(&profile.forcing));
        });
    });
}

fn bench_beta_sweep(c: &mut Criterion) {
    let profile = reference_profile(42).unwrap();
    let configs: Vec<BalanceConfig> = (0..16)
        .map(|i| {
            let beta = 0.85 + 0.008 * i as f64;
            let column = loam_bench::reference_column(beta).unwrap();
            BalanceConfig {
                column,
                ..profile.config.clone()
            }
        })
        .collect();
    let mut batch = BatchedRuns::new(configs).unwrap();

    c.bench_function("beta_sweep_16_sequential", |b| {
        b.iter(|| {
            batch.reset();
            black_box(batch.run(&profile.forcing));
        });
    });
    c.bench_function("beta_sweep_16_parallel", |b| {
        b.iter(|| {
            batch.reset();
            black_box(batch.run_parallel(&profile.forcing));
        });
    });
}

criterion_group!(
    benches,
    bench_step_day,
    bench_annual_run,
    bench_decade_stress,
    bench_beta_sweep
);
criterion_main!(benches);
