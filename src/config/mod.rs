//! Configuration module for upi-checkout
//!
//! - config directory resolution
//! - deployment settings persistence

pub mod paths;
pub mod settings;

pub use paths::CheckoutPaths;
pub use settings::Settings;
