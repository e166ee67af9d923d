//! Display formatting for terminal output
//!
//! Plain-text renderings used by the CLI commands. The TUI draws its own
//! widgets but shares the terms text.

pub mod currency;
pub mod order;
pub mod terms;

pub use currency::format_currency_table;
pub use order::{format_payment_request, format_recorded_payment};
pub use terms::{format_terms, terms_sections, TermsSection};
