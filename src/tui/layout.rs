//! Layout definitions for the TUI
//!
//! Narrow terminals get a single column. From 80 columns on, an order
//! summary panel sits to the right of the wizard.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Compact,
    Wide,
}

impl DeviceClass {
    /// Narrowest terminal that gets the side panel
    pub const WIDE_MIN_WIDTH: u16 = 80;

    pub fn from_width(width: u16) -> Self {
        if width >= Self::WIDE_MIN_WIDTH {
            Self::Wide
        } else {
            Self::Compact
        }
    }
}

/// Layout regions for the wizard
pub struct WizardLayout {
    /// Brand and step progress
    pub header: Rect,
    /// The current step
    pub body: Rect,
    /// Order summary, wide terminals only
    pub summary: Option<Rect>,
    /// Support line and key hints
    pub footer: Rect,
}

impl WizardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(8),    // Step body
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let (body, summary) = match DeviceClass::from_width(area.width) {
            DeviceClass::Compact => (vertical[1], None),
            DeviceClass::Wide => {
                let horizontal = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Min(48),    // Wizard
                        Constraint::Length(34), // Summary
                    ])
                    .split(vertical[1]);
                (horizontal[0], Some(horizontal[1]))
            }
        };

        Self {
            header: vertical[0],
            body,
            summary,
            footer: vertical[2],
        }
    }
}

/// Split a step body into fixed-height rows plus the remainder
pub fn rows(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let mut constraints: Vec<Constraint> =
        heights.iter().map(|h| Constraint::Length(*h)).collect();
    constraints.push(Constraint::Min(0));

    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Top-right corner area for toast notifications
pub fn toast_area(r: Rect) -> Rect {
    let width = 44.min(r.width);
    let height = 4.min(r.height);
    Rect::new(r.x + r.width - width, r.y + 1.min(r.height - height), width, height)
}
