//! The three-step checkout wizard and its payment countdown

pub mod countdown;
pub mod state;

pub use countdown::{Countdown, CountdownTimer, TICK_INTERVAL};
pub use state::{ConfirmPhase, PaymentInitiation, PaymentWizard, TickOutcome};
