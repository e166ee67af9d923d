//! Custom error types for upi-checkout
//!
//! This module defines the error hierarchy for the checkout flow using
//! thiserror. Every wizard error is recoverable: the caller reports it and
//! the form stays where it was.

use thiserror::Error;

/// The main error type for checkout operations
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Buyer input failed validation
    #[error("{0}")]
    Validation(String),

    /// Promo code did not match
    #[error("Invalid promo code: {0}")]
    InvalidPromo(String),

    /// Promo code was already applied to this order
    #[error("Promo code already applied")]
    PromoAlreadyApplied,

    /// "I Have Paid" was pressed twice
    #[error("Already submitted. Please wait.")]
    AlreadyConfirmed,

    /// A submission is still in flight
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// The requested action is not available in the current step
    #[error("Cannot {action} while on the {step} step")]
    InvalidTransition { step: &'static str, action: &'static str },

    /// Recording the payment with the form endpoint failed
    #[error("Network error: {0}")]
    Network(String),

    /// Handing a URI to the operating system failed
    #[error("Could not open payment link: {0}")]
    Launch(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl CheckoutError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an invalid transition error
    pub fn invalid_transition(step: &'static str, action: &'static str) -> Self {
        Self::InvalidTransition { step, action }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Message suitable for a toast or a one-line CLI report
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Failed to record payment. Please try again.".to_string(),
            Self::InvalidPromo(_) => "Invalid promo code. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for CheckoutError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CheckoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for CheckoutError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
