//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive commands,
//! bridging the clap argument parsing with the wizard and services.

pub mod info;
pub mod link;
pub mod record;

pub use info::{handle_config_command, handle_currencies_command, handle_terms_command};
pub use link::{handle_link_command, LinkArgs};
pub use record::{handle_record_command, RecordArgs};
