//! Form state and validation.
//!
//! Forms hold raw text as typed by the user. [`Form::validate`] either turns
//! that text into the payload sent to the API, or returns every field error
//! found so that all of them can be shown at once.
//!
//! ```ignore
//! let form = CouponForm { code: " summer10 ".into(), discount_value: "10".into(), ..Default::default() };
//! match form.validate() {
//!     Ok(payload) => client.create_coupon(&payload).await?,
//!     Err(errors) => show(errors),
//! }
//! ```

mod coupon;
mod master;
mod parse;
mod partner;
mod shipping;
mod slug;

pub use coupon::*;
pub use master::*;
pub use partner::*;
pub use shipping::*;
pub use slug::slugify;

use crate::error::ValidationErrors;

/// A form whose text input converts into an API payload.
pub trait Form {
    type Payload;

    /// Check every field and build the payload.
    fn validate(&self) -> Result<Self::Payload, ValidationErrors>;
}
