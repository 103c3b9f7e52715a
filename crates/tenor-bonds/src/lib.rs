//! # Tenor Bonds
//!
//! Bond valuation for the Tenor fixed income library.
//!
//! This crate provides:
//!
//! - **Instruments**: Coupon bonds, consols and inflation-linked bonds
//! - **Pricing**: Price from a yield or a zero curve, yield from a price,
//!   economic breakeven inflation
//! - **Risk**: Effective duration and convexity
//!
//! Prices are per 100 face and dirty; dates are year fractions.
//!
//! ## Example
//!
//! ```rust
//! use tenor_bonds::prelude::*;
//!
//! let curve = ZeroCurve::new(vec![0.0, 10.0], vec![0.04, 0.06]).unwrap();
//! let bond = CouponBond::new(10.0, 0.08, Frequency::Annual).unwrap();
//!
//! let price = bond.price_from_curve(0.0, &curve, PriceType::Dirty).unwrap();
//! let ytm = bond
//!     .yield_from_price(0.0, price, PriceType::Dirty, YieldConvention::Bond)
//!     .unwrap();
//! assert!((ytm - 0.0576).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod instruments;
pub mod pricing;
pub mod risk;
pub mod traits;

pub use error::{BondError, BondResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::{Consol, CouponBond, InflationLinkedBond};
    pub use crate::pricing::{BreakevenResult, BreakevenSolver, YieldResult, YieldSolver};
    pub use crate::risk::RiskMetrics;
    pub use crate::traits::Bond;
    pub use tenor_core::types::{Frequency, PriceType, YieldConvention};
    pub use tenor_curves::{ExtrapolationPolicy, IndexCurve, ZeroCurve};
}
