//! Criterion benchmarks for the autocall Monte Carlo engine.
//!
//! Measures full pricing throughput as path count and asset count grow, and
//! the incremental cost of the Greek engine's bump-and-reprice pass over a
//! single base-case pricing run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pricer_core::types::time::Date;
use pricer_pricing::autocall::config::{BumpConfig, RunConfig};
use pricer_pricing::autocall::term_sheet::{
    Correlation, DiscountCurveSpec, DividendModel, KiBarrier, KiRedemptionPolicy, Meta,
    Monitoring, Payoff, Schedule, Settlement, TermSheet, Underlying, VolModel,
};
use pricer_pricing::autocall::{price, risk};

/// A worst-of autocallable on `n_assets` equally correlated underlyings,
/// observed quarterly over two years.
fn term_sheet(n_assets: usize) -> TermSheet {
    let valuation_date = Date::from_ymd(2024, 1, 2).unwrap();
    let observation_dates: Vec<Date> = (1..=8)
        .map(|q| Date::from_ymd(2024 + (q / 4), 1 + 3 * (q % 4), 2).unwrap())
        .collect();
    let maturity_date = *observation_dates.last().unwrap();

    let underlyings = (0..n_assets)
        .map(|i| Underlying {
            id: format!("A{i}"),
            spot: 100.0,
            currency: "USD".into(),
            dividend_model: DividendModel::Continuous { continuous_yield: 0.02 },
            vol_model: VolModel::Flat { flat_vol: 0.25 },
        })
        .collect();

    let mut pairwise = std::collections::HashMap::new();
    for i in 0..n_assets {
        for j in (i + 1)..n_assets {
            pairwise.insert(format!("A{i}|A{j}"), 0.4);
        }
    }

    TermSheet {
        meta: Meta {
            product_id: "BENCH".into(),
            currency: "USD".into(),
            notional: 1_000_000.0,
            trade_date: None,
            valuation_date,
            settlement_date: None,
            maturity_date,
            maturity_payment_date: maturity_date,
        },
        underlyings,
        discount_curve: DiscountCurveSpec::Flat { flat_rate: 0.03 },
        correlation: Correlation { pairwise },
        schedules: Schedule {
            payment_dates: observation_dates.clone(),
            autocall_levels: vec![1.0; observation_dates.len()],
            coupon_barriers: vec![0.7; observation_dates.len()],
            coupon_rates: vec![0.02; observation_dates.len()],
            observation_dates,
        },
        ki_barrier: KiBarrier {
            level: 0.6,
            monitoring: Monitoring::Continuous,
        },
        payoff: Payoff {
            worst_of: true,
            coupon_memory: true,
            settlement: Settlement::Cash,
            redemption_if_autocall: 1.0,
            redemption_if_no_ki: 1.0,
            redemption_if_ki: KiRedemptionPolicy::WorstPerformance,
            ki_redemption_floor: 0.0,
        },
    }
}

fn bench_price_by_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_by_paths");
    group.sample_size(20);

    let ts = term_sheet(3);
    for num_paths in [1_000, 10_000, 50_000] {
        let cfg = RunConfig {
            num_paths,
            seed: 42,
            block_size: 1_000,
            antithetic: true,
            n_steps_per_year: None,
            memory_ceiling_bytes: None,
        };
        group.bench_with_input(BenchmarkId::new("paths", num_paths), &cfg, |b, cfg| {
            b.iter(|| price(black_box(&ts), black_box(cfg)).unwrap());
        });
    }

    group.finish();
}

fn bench_price_by_assets(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_by_assets");
    group.sample_size(20);

    let cfg = RunConfig {
        num_paths: 10_000,
        seed: 42,
        block_size: 1_000,
        antithetic: true,
        n_steps_per_year: None,
        memory_ceiling_bytes: None,
    };
    for n_assets in [1, 3, 5, 10] {
        let ts = term_sheet(n_assets);
        group.bench_with_input(BenchmarkId::new("assets", n_assets), &ts, |b, ts| {
            b.iter(|| price(black_box(ts), black_box(&cfg)).unwrap());
        });
    }

    group.finish();
}

fn bench_risk(c: &mut Criterion) {
    let mut group = c.benchmark_group("risk");
    group.sample_size(10);

    let ts = term_sheet(3);
    let cfg = RunConfig {
        num_paths: 10_000,
        seed: 42,
        block_size: 1_000,
        antithetic: true,
        n_steps_per_year: None,
        memory_ceiling_bytes: None,
    };
    let bump_cfg = BumpConfig::default();
    group.bench_function("delta_vega_rho", |b| {
        b.iter(|| risk(black_box(&ts), black_box(&cfg), black_box(&bump_cfg)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_price_by_paths, bench_price_by_assets, bench_risk);
criterion_main!(benches);
