//! Criterion benchmarks for the Black-Scholes call kernel.
//!
//! Compares one shared d₁/d₂ evaluation against separate price and Greeks
//! calls, and measures the distribution functions on their own.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::analytical::{greeks, norm_cdf, norm_pdf, price, BlackScholesCall};
use pricer_core::types::PricingInputs;

/// Benchmark a full valuation across moneyness levels.
fn bench_valuation(c: &mut Criterion) {
    let mut group = c.benchmark_group("call_valuation");

    for strike in [80.0, 100.0, 120.0] {
        let inputs = PricingInputs::new(100.0, strike, 1.0, 0.05, 0.2);

        group.bench_with_input(BenchmarkId::new("shared_terms", strike), &inputs, |b, inputs| {
            b.iter(|| BlackScholesCall::new(black_box(*inputs)).map(|call| call.valuation()));
        });

        group.bench_with_input(BenchmarkId::new("separate_calls", strike), &inputs, |b, i| {
            b.iter(|| {
                let p = price(black_box(i.spot), i.strike, i.expiry, i.rate, i.volatility);
                let g = greeks(black_box(i.spot), i.strike, i.expiry, i.rate, i.volatility);
                (p, g)
            });
        });
    }

    group.finish();
}

/// Benchmark the standard normal CDF and PDF.
fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");
    let xs: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.08).collect();

    group.bench_function("norm_cdf_201", |b| {
        b.iter(|| xs.iter().map(|&x| norm_cdf(black_box(x))).sum::<f64>());
    });

    group.bench_function("norm_pdf_201", |b| {
        b.iter(|| xs.iter().map(|&x| norm_pdf(black_box(x))).sum::<f64>());
    });

    group.finish();
}

criterion_group!(benches, bench_valuation, bench_distributions);
criterion_main!(benches);
