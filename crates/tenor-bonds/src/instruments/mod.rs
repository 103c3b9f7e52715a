//! Bond instruments.
//!
//! - [`CouponBond`]: Fixed coupon bullet bond
//! - [`Consol`]: Perpetual annual bond
//! - [`InflationLinkedBond`]: Coupon bond with index-scaled cash flows

mod consol;
mod coupon;
mod inflation_linked;

pub use consol::Consol;
pub use coupon::CouponBond;
pub use inflation_linked::InflationLinkedBond;
