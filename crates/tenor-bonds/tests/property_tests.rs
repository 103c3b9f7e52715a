//! Property-based tests for the pricing solvers.
//!
//! - Pricing at a yield and solving back recovers the yield
//! - Linker value strictly increases with assumed inflation
//! - A flat curve's par coupon is the flat rate
//! - Price falls as yield rises

use approx::assert_relative_eq;
use proptest::prelude::*;

use tenor_bonds::prelude::*;

const DIRTY: PriceType = PriceType::Dirty;
const BOND: YieldConvention = YieldConvention::Bond;

fn frequency() -> impl Strategy<Value = Frequency> {
    prop_oneof![Just(Frequency::Annual), Just(Frequency::SemiAnnual)]
}

proptest! {
    #[test]
    fn yield_round_trip(
        maturity in 1u32..30,
        coupon in 0.0f64..0.12,
        yield_value in 0.005f64..0.20,
        frequency in frequency(),
    ) {
        let bond = CouponBond::new(f64::from(maturity), coupon, frequency).unwrap();
        let price = bond.price(yield_value, 0.0, DIRTY, BOND).unwrap();

        let solved = YieldSolver::new()
            .with_tolerance(1e-10)
            .solve(&bond, 0.0, price, DIRTY, BOND)
            .unwrap();
        prop_assert!((solved.yield_value - yield_value).abs() < 1e-7);
    }

    #[test]
    fn price_decreasing_in_yield(
        maturity in 1u32..30,
        coupon in 0.0f64..0.12,
        y1 in 0.0f64..0.25,
        y2 in 0.0f64..0.25,
    ) {
        prop_assume!((y1 - y2).abs() > 1e-6);
        let bond = CouponBond::new(f64::from(maturity), coupon, Frequency::Annual).unwrap();
        let (lo, hi) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
        let p_lo = bond.price(lo, 0.0, DIRTY, BOND).unwrap();
        let p_hi = bond.price(hi, 0.0, DIRTY, BOND).unwrap();
        prop_assert!(p_lo > p_hi);
    }

    #[test]
    fn breakeven_value_increasing_in_inflation(
        maturity in 1u32..10,
        coupon in 0.0f64..0.06,
        r1 in -0.05f64..0.10,
        r2 in -0.05f64..0.10,
    ) {
        prop_assume!((r1 - r2).abs() > 1e-6);
        let curve = ZeroCurve::new(vec![0.0, 10.0], vec![0.04, 0.06]).unwrap();
        let linker =
            InflationLinkedBond::new(f64::from(maturity), coupon, Frequency::Annual, 0.0).unwrap();

        let (lo, hi) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
        let v_lo = linker.nominal_value(0.0, &curve, lo).unwrap();
        let v_hi = linker.nominal_value(0.0, &curve, hi).unwrap();
        prop_assert!(v_hi > v_lo);
    }

    #[test]
    fn flat_curve_par_coupon(rate in 0.0f64..0.10, maturity in 1u32..30) {
        let curve = ZeroCurve::flat(rate, 30.0).unwrap();
        let par = curve.par_coupon(f64::from(maturity), Frequency::Annual).unwrap();
        prop_assert!((par - rate).abs() < 1e-5);
    }
}

#[test]
fn breakeven_solves_own_price() {
    let curve = ZeroCurve::new(vec![0.0, 10.0], vec![0.04, 0.06]).unwrap();
    let linker = InflationLinkedBond::new(8.0, 0.015, Frequency::Annual, 0.0).unwrap();

    for inflation in [-0.02, 0.0, 0.01, 0.025, 0.05, 0.08] {
        let price = linker.nominal_value(0.0, &curve, inflation).unwrap();
        let solved = BreakevenSolver::new()
            .with_tolerance(1e-10)
            .solve(&linker, 0.0, price, DIRTY, &curve)
            .unwrap();
        assert_relative_eq!(solved.rate, inflation, epsilon = 1e-8);
    }
}
