//! # Tenor Math
//!
//! Numerical building blocks for the Tenor fixed income library.
//!
//! This crate provides:
//!
//! - **Solvers**: A bracketing bisection root-finder for monotone objectives
//! - **Interpolation**: Piecewise-linear interpolation
//! - **Extrapolation**: Flat and constant-rate compounding extrapolation
//!
//! Every iterative routine carries an explicit iteration cap, so a malformed
//! (non-monotone) objective fails with an error instead of looping.

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
pub mod extrapolation;
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::{
        CompoundingExtrapolator, ExtrapolationPolicy, Extrapolator, FlatExtrapolator,
    };
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
    pub use crate::solvers::{bisection, Bracket, Monotonicity, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
