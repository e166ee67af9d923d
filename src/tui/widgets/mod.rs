//! Reusable widgets for the TUI
//!
//! Text input and toast widgets

pub mod input;
pub mod notification;

pub use input::TextInput;
pub use notification::{Notification, NotificationQueue, NotificationWidget, ToastLevel};
