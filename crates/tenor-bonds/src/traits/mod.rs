//! Core bond traits.
//!
//! - [`Bond`]: Price from a yield, with duration and convexity derived from it

mod bond;

pub use bond::Bond;
pub(crate) use bond::check_quote;
