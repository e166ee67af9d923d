//! Core data models for upi-checkout
//!
//! - `money`: rupee amounts stored as paise
//! - `currency`: the display currency table
//! - `country`: calling codes for the phone field
//! - `order`: the order form and wizard step

pub mod country;
pub mod currency;
pub mod money;
pub mod order;

pub use country::{CountryCode, CountrySelection, COUNTRY_CODES};
pub use currency::Currency;
pub use money::Money;
pub use order::{Field, OrderForm, Step};
