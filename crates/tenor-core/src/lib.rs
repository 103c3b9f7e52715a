//! # Tenor Core
//!
//! Core types and closed-form building blocks for the Tenor fixed income library.
//!
//! This crate provides the foundational pieces used throughout Tenor:
//!
//! - **Types**: Coupon [`Frequency`], rate [`Compounding`], [`PriceType`] and
//!   [`YieldConvention`]
//! - **Discounting**: Periodic and exponential discount factors, rate conversion
//! - **Calendar**: A toy 360-day calendar where `1.0` is one year
//! - **Cash Flows**: Time grids and coupon bond cash-flow schedules
//!
//! Times are plain `f64` year fractions throughout. There are no day-count
//! conventions; a date is simply a point on the year axis.
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let schedule = CashFlowSchedule::generate(2.0, 0.05, Frequency::Annual, 0.0).unwrap();
//! assert_eq!(schedule.dates(), &[1.0, 2.0]);
//! assert_eq!(schedule.amounts(), &[5.0, 105.0]);
//!
//! let df = discount_factor(1.0, 0.05);
//! assert!((df - 0.952381).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod calendar;
pub mod cashflows;
pub mod discounting;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendar::SimpleCalendar360;
    pub use crate::cashflows::{create_grid, CashFlowSchedule, PRICE_BASE};
    pub use crate::discounting::{
        convert_rate, discount_factor, discount_factor_exponential, discount_factors,
        discount_factors_exponential, zero_rate_from_discount_factor,
    };
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Compounding, Frequency, PriceType, YieldConvention};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Compounding, Frequency, PriceType, YieldConvention};
