//! Domain types for fixed income valuation.
//!
//! - [`Frequency`]: Coupon payment frequency
//! - [`Compounding`]: Interest compounding convention of a quoted rate
//! - [`PriceType`]: Dirty or clean price quotation
//! - [`YieldConvention`]: How a yield is quoted

mod conventions;
mod frequency;

pub use conventions::{PriceType, YieldConvention};
pub use frequency::{Compounding, Frequency};
