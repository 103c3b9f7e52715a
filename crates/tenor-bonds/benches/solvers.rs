//! Benchmarks for the yield, par coupon and breakeven solvers.
//!
//! Run with: cargo bench -p tenor-bonds

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tenor_bonds::prelude::*;

fn zero_curve() -> ZeroCurve {
    ZeroCurve::new(
        vec![0.0, 1.0, 2.0, 5.0, 10.0, 30.0],
        vec![0.030, 0.035, 0.038, 0.045, 0.050, 0.055],
    )
    .unwrap()
}

fn bench_yield_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("yield_solver");

    for maturity in [2.0, 10.0, 30.0] {
        let bond = CouponBond::new(maturity, 0.05, Frequency::SemiAnnual).unwrap();
        let price = bond
            .price(0.045, 0.0, PriceType::Dirty, YieldConvention::Bond)
            .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(maturity), &price, |b, &price| {
            b.iter(|| {
                bond.yield_from_price(
                    black_box(0.0),
                    black_box(price),
                    PriceType::Dirty,
                    YieldConvention::Bond,
                )
            });
        });
    }

    group.finish();
}

fn bench_par_coupon(c: &mut Criterion) {
    let curve = zero_curve();

    c.bench_function("par_coupon_10y", |b| {
        b.iter(|| curve.par_coupon(black_box(10.0), Frequency::Annual));
    });
}

fn bench_breakeven(c: &mut Criterion) {
    let curve = zero_curve();
    let mut group = c.benchmark_group("breakeven");

    for maturity in [5.0, 10.0, 30.0] {
        let linker = InflationLinkedBond::new(maturity, 0.01, Frequency::Annual, 0.0).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(maturity), &linker, |b, linker| {
            b.iter(|| {
                linker.economic_breakeven(
                    black_box(0.0),
                    black_box(100.0),
                    PriceType::Dirty,
                    &curve,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(solvers, bench_yield_solver, bench_par_coupon, bench_breakeven);
criterion_main!(solvers);
