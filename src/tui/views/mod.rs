//! TUI Views module
//!
//! One view per wizard step, plus the header, the footer and the order
//! summary panel shown on wide terminals.

pub mod confirm;
pub mod details;
pub mod footer;
pub mod header;
pub mod payment;
pub mod summary;

use ratatui::Frame;

use crate::models::Step;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_area, WizardLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = WizardLayout::new(frame.area());

    header::render(frame, app, layout.header);

    match app.wizard.step() {
        Step::Details => details::render(frame, app, layout.body),
        Step::Payment => payment::render(frame, app, layout.body),
        Step::Confirm => confirm::render(frame, app, layout.body),
    }

    if let Some(area) = layout.summary {
        summary::render(frame, app, area);
    }

    footer::render(frame, app, layout.footer);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(NotificationWidget::new(notification), toast_area(frame.area()));
    }

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Terms => dialogs::terms::render(frame, app),
        ActiveDialog::ConfirmQuit => dialogs::confirm::render(
            frame,
            "A payment is in progress. Quit anyway?",
        ),
        ActiveDialog::None => {}
    }
}
