//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the open
//! dialog and the wizard step, and feeds background events to the app.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::Step;

use super::app::{ActiveDialog, App, DetailsFocus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Countdown(generation) => {
            app.on_countdown_tick(generation);
            Ok(())
        }
        Event::Submitted(result) => {
            app.on_submitted(result);
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some terminals report releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.quit();
                return Ok(());
            }
            KeyCode::Char('q') => {
                app.request_quit();
                return Ok(());
            }
            _ => {}
        }
    }

    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match key.code {
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::F(2) => {
            app.open_dialog(ActiveDialog::Terms);
            return Ok(());
        }
        _ => {}
    }

    match app.wizard.step() {
        Step::Details => handle_details_key(app, key),
        Step::Payment => handle_payment_key(app, key),
        Step::Confirm => handle_confirm_key(app, key),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::ConfirmQuit => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.quit(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::Terms => match key.code {
            KeyCode::Up => app.terms_scroll = app.terms_scroll.saturating_sub(1),
            KeyCode::Down => app.terms_scroll = app.terms_scroll.saturating_add(1),
            // "I Accept"
            KeyCode::Enter | KeyCode::Esc | KeyCode::F(2) => app.close_dialog(),
            _ => {}
        },
        // Any key closes help
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Shared editing keys for the active text field; returns whether the key was used
fn handle_text_key(app: &mut App, key: KeyEvent) -> bool {
    if app.active_field().is_none() {
        return false;
    }

    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.edit_active_field(|input| input.insert(c));
        }
        KeyCode::Backspace => app.edit_active_field(|input| input.backspace()),
        KeyCode::Delete => app.edit_active_field(|input| input.delete()),
        KeyCode::Left => app.edit_active_field(|input| input.move_left()),
        KeyCode::Right => app.edit_active_field(|input| input.move_right()),
        KeyCode::Home => app.edit_active_field(|input| input.move_start()),
        KeyCode::End => app.edit_active_field(|input| input.move_end()),
        _ => return false,
    }
    true
}

/// Handle keys on the details step
fn handle_details_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.set_focus(app.focus.next());
            return Ok(());
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.set_focus(app.focus.prev());
            return Ok(());
        }
        KeyCode::Enter => {
            if app.focus == DetailsFocus::PromoCode {
                app.apply_promo();
            } else {
                app.continue_to_payment();
            }
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        DetailsFocus::Country => match key.code {
            KeyCode::Left => app.cycle_country(false),
            KeyCode::Right | KeyCode::Char(' ') => app.cycle_country(true),
            _ => {}
        },
        DetailsFocus::Currency => match key.code {
            KeyCode::Left => app.cycle_currency(false),
            KeyCode::Right | KeyCode::Char(' ') => app.cycle_currency(true),
            _ => {}
        },
        _ => {
            handle_text_key(app, key);
        }
    }
    Ok(())
}

/// Handle keys on the payment step
fn handle_payment_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.pay(),
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),
        KeyCode::Left => app.cycle_currency(false),
        KeyCode::Right => app.cycle_currency(true),
        _ => {}
    }
    Ok(())
}

/// Handle keys on the confirm step
fn handle_confirm_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.confirm_action(),
        KeyCode::Esc => {
            if !app.wizard.is_completed() {
                app.go_back();
            }
        }
        _ => {
            handle_text_key(app, key);
        }
    }
    Ok(())
}
