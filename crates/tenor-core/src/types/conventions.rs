//! Price and yield quotation conventions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// How a bond price is quoted.
///
/// Only dirty prices are implemented. Clean prices need accrued interest,
/// which this library does not model; asking for one is an
/// [`CoreError::UnsupportedConvention`], not a malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PriceType {
    /// Price including accrued interest.
    #[default]
    Dirty,
    /// Price excluding accrued interest.
    Clean,
}

impl PriceType {
    /// Fails unless this is [`PriceType::Dirty`].
    pub fn require_dirty(self) -> CoreResult<()> {
        match self {
            PriceType::Dirty => Ok(()),
            PriceType::Clean => Err(CoreError::unsupported("clean price")),
        }
    }
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceType::Dirty => write!(f, "Dirty"),
            PriceType::Clean => write!(f, "Clean"),
        }
    }
}

/// How a yield is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum YieldConvention {
    /// Bond yield: compounded at the bond's own coupon frequency.
    #[default]
    Bond,
    /// Money-market (simple interest) yield. Not implemented.
    MoneyMarket,
}

impl YieldConvention {
    /// Fails unless this is [`YieldConvention::Bond`].
    pub fn require_bond(self) -> CoreResult<()> {
        match self {
            YieldConvention::Bond => Ok(()),
            YieldConvention::MoneyMarket => Err(CoreError::unsupported("money-market yield")),
        }
    }
}

impl fmt::Display for YieldConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YieldConvention::Bond => write!(f, "Bond"),
            YieldConvention::MoneyMarket => write!(f, "Money Market"),
        }
    }
}
