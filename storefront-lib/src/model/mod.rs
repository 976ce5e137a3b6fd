//! Records exchanged with the storefront API.
//!
//! All types use camelCase on the wire. Money amounts are [`Decimal`]s,
//! timestamps are UTC.
//!
//! [`Decimal`]: rust_decimal::Decimal

mod coupon;
mod dashboard;
mod master;
mod order;
mod product;
mod review;
mod shipping;
mod user;

pub use coupon::*;
pub use dashboard::*;
pub use master::*;
pub use order::*;
pub use product::*;
pub use review::*;
pub use shipping::*;
pub use user::*;
