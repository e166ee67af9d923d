//! Business logic layer for upi-checkout
//!
//! Stateless helpers the wizard and the CLI are built from: validation,
//! the promo code, UPI link construction, URI launching and recording
//! claimed payments.

pub mod launcher;
pub mod promo;
pub mod submission;
pub mod upi;
pub mod validation;

pub use launcher::{NoopLauncher, SystemLauncher, UriLauncher};
pub use promo::PromoOffer;
pub use submission::{FormSink, HttpFormSink, Submission};
pub use upi::UpiPaymentLink;
pub use validation::{validate_buyer, validate_txn_id};
