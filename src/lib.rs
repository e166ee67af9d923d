//! upi-checkout - Terminal checkout for a single course paid over UPI
//!
//! This library provides the core of the checkout flow: a three-step wizard
//! that collects buyer details, hands a `upi://pay` link to the buyer's UPI
//! app, and records the self-reported transaction ID with a hosted form.
//! Nothing here can verify that a payment actually happened.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: tracing subscriber setup
//! - `models`: Money, currencies, calling codes and the order form
//! - `services`: Validation, promo codes, UPI links, submission, URI launching
//! - `wizard`: The step state machine and payment countdown
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: Non-interactive commands
//! - `tui`: The interactive wizard
//!
//! # Example
//!
//! ```rust,ignore
//! use upi_checkout::config::Settings;
//! use upi_checkout::models::Field;
//! use upi_checkout::wizard::PaymentWizard;
//!
//! let mut wizard = PaymentWizard::new(&Settings::default());
//! wizard.set_field(Field::Name, "Asha Rao")?;
//! wizard.set_field(Field::Email, "asha@x.com")?;
//! wizard.set_field(Field::Phone, "9876543210")?;
//! wizard.continue_to_payment()?;
//! let payment = wizard.initiate_payment()?;
//! println!("{}", payment.link);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;
pub mod wizard;

pub use error::{CheckoutError, CheckoutResult};
