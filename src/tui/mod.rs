//! Terminal User Interface module
//!
//! This module renders the checkout wizard with ratatui: one view per step,
//! an order summary panel on wide terminals, and dialogs for help, the terms
//! and quitting mid-payment.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
