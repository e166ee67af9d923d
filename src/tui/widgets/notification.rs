//! Toasts
//!
//! Wizard outcomes the buyer needs to hear about (a rejected field, an
//! applied promo code, a failed submission) pop up in the top-right corner.
//! Errors linger longer than confirmations.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Border colour and title
    fn appearance(&self) -> (Color, &'static str) {
        match self {
            Self::Info => (Color::Blue, " i Info "),
            Self::Success => (Color::Green, " ✔ Success "),
            Self::Warning => (Color::Yellow, " ! Warning "),
            Self::Error => (Color::Red, " ✖ Error "),
        }
    }

    fn lifetime(&self) -> Duration {
        match self {
            Self::Error | Self::Warning => Duration::from_secs(5),
            Self::Info | Self::Success => Duration::from_secs(3),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: ToastLevel,
    expires_at: Instant,
}

impl Notification {
    fn with_level(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Instant::now() + level.lifetime(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(ToastLevel::Error, message)
    }

    fn expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Draws one toast over whatever is underneath
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (color, title) = self.notification.level.appearance();
        Clear.render(area, buf);

        Paragraph::new(self.notification.message.as_str())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(title)
                    .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            )
            .render(area, buf);
    }
}

/// Pending toasts, newest on top
///
/// Repeating a message that is still up restarts it instead of stacking a
/// copy, so mashing Enter on an invalid form shows one error.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.pending.retain(|n| n.message != notification.message);
        self.pending.push(notification);
    }

    /// Drop toasts whose time is up; called on every tick
    pub fn remove_expired(&mut self) {
        let now = Instant::now();
        self.pending.retain(|n| !n.expired_at(now));
    }

    pub fn current(&self) -> Option<&Notification> {
        self.pending.last()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
