//! Inquiry submission flow
//!
//! The validation-and-submit pipeline behind the inquiry modal. The flow
//! itself is UI-agnostic: field values and presentation side effects go
//! through the [`FormFieldStore`] and [`InquirySurface`] capabilities, and
//! the network call goes through [`InquiryApi`], so the whole state machine
//! can be exercised in tests without a browser.

mod client;
mod form;
mod store;
mod submit;
mod validate;

pub use client::*;
pub use form::*;
pub use store::*;
pub use submit::*;
pub use validate::*;
