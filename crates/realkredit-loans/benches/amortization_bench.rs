//! Benchmarks for schedule generation and yield solving.
//!
//! Run with: cargo bench -p realkredit-loans

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use realkredit_core::types::LoanTerms;
use realkredit_loans::amortization::build_schedule;
use realkredit_loans::loan::MortgageLoan;

fn bench_build_schedule(c: &mut Criterion) {
    let monthly = LoanTerms::new(1_000_000.0, 0.04, 30, 12).unwrap();
    c.bench_function("build_schedule_360_periods", |b| {
        b.iter(|| build_schedule(black_box(&monthly)).unwrap());
    });

    let quarterly = LoanTerms::new(1_000_000.0, 0.04, 30, 4).unwrap();
    c.bench_function("build_schedule_120_periods", |b| {
        b.iter(|| build_schedule(black_box(&quarterly)).unwrap());
    });
}

fn bench_yield_to_maturity(c: &mut Criterion) {
    let terms = LoanTerms::new(1_000_000.0, 0.04, 30, 4).unwrap();
    let loan = MortgageLoan::with_price(terms, 0.0045, 98.5).unwrap();

    c.bench_function("yield_to_maturity_120_periods", |b| {
        b.iter(|| black_box(&loan).yield_to_maturity().unwrap());
    });
}

criterion_group!(benches, bench_build_schedule, bench_yield_to_maturity);
criterion_main!(benches);
