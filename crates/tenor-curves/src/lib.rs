//! # Tenor Curves
//!
//! Term structures for the Tenor fixed income library.
//!
//! - [`ZeroCurve`]: Annually compounded zero rates on maturity pillars,
//!   linearly interpolated, with discount factors and a par coupon solver
//! - [`IndexCurve`]: Inflation index levels on dates, linearly interpolated,
//!   with an explicit [`ExtrapolationPolicy`] for dates past the last fixing
//!
//! Both curves are immutable during lookups and are `Send + Sync`, so one
//! instance can be shared across threads.
//!
//! ## Example
//!
//! ```rust
//! use tenor_curves::ZeroCurve;
//!
//! let curve = ZeroCurve::new(vec![0.0, 10.0], vec![0.04, 0.06]).unwrap();
//! assert!((curve.rate_at(5.0).unwrap() - 0.05).abs() < 1e-12);
//! assert!((curve.discount_factor_at(5.0).unwrap() - 1.05_f64.powf(-5.0)).abs() < 1e-12);
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

pub mod error;
pub mod index;
pub mod zero;

pub use error::{CurveError, CurveResult};
pub use index::IndexCurve;
pub use tenor_math::extrapolation::ExtrapolationPolicy;
pub use zero::ZeroCurve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::index::IndexCurve;
    pub use crate::zero::ZeroCurve;
    pub use tenor_math::extrapolation::ExtrapolationPolicy;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_curves_are_send_sync() {
        assert_send_sync::<ZeroCurve>();
        assert_send_sync::<IndexCurve>();
    }
}
