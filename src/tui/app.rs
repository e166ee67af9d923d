//! Application state for the TUI
//!
//! The App struct holds the wizard plus the terminal-side state it never
//! sees: text cursors, focus and toasts. It also owns the countdown timer
//! and starts the submission worker.

use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use crate::config::settings::Settings;
use crate::error::{CheckoutError, CheckoutResult};
use crate::models::{Field, Step};
use crate::services::launcher::UriLauncher;
use crate::services::submission::FormSink;
use crate::wizard::{ConfirmPhase, CountdownTimer, PaymentWizard, TickOutcome, TICK_INTERVAL};

use super::event::Event;
use super::widgets::{Notification, NotificationQueue, TextInput};

/// Focusable rows of the details step, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsFocus {
    #[default]
    Name,
    Email,
    Country,
    Phone,
    Currency,
    PromoCode,
}

impl DetailsFocus {
    pub const ORDER: [DetailsFocus; 6] = [
        Self::Name,
        Self::Email,
        Self::Country,
        Self::Phone,
        Self::Currency,
        Self::PromoCode,
    ];

    /// Text field behind this row, if it is one
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Name => Some(Field::Name),
            Self::Email => Some(Field::Email),
            Self::Phone => Some(Field::Phone),
            Self::PromoCode => Some(Field::PromoCode),
            Self::Country | Self::Currency => None,
        }
    }

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Terms,
    ConfirmQuit,
}

/// Main application state
pub struct App<'a> {
    /// Deployment settings
    pub settings: &'a Settings,

    /// The checkout state machine
    pub wizard: PaymentWizard,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Focused row on the details step
    pub focus: DetailsFocus,

    /// Scroll offset of the terms dialog
    pub terms_scroll: u16,

    /// Last payment link handed out, shown for buyers without a UPI handler
    pub last_link: Option<String>,

    /// Toasts
    pub notifications: NotificationQueue,

    inputs: HashMap<Field, TextInput>,
    countdown_timer: Option<CountdownTimer>,
    sink: Arc<dyn FormSink>,
    launcher: Box<dyn UriLauncher>,
    events: Sender<Event>,
}

fn build_inputs() -> HashMap<Field, TextInput> {
    [Field::Name, Field::Email, Field::Phone, Field::PromoCode, Field::TxnId]
        .into_iter()
        .map(|field| {
            let input = TextInput::new()
                .label(field.label())
                .placeholder(field.placeholder());
            (field, input)
        })
        .collect()
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(
        settings: &'a Settings,
        sink: Arc<dyn FormSink>,
        launcher: Box<dyn UriLauncher>,
        events: Sender<Event>,
    ) -> Self {
        let mut app = Self {
            settings,
            wizard: PaymentWizard::new(settings),
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            focus: DetailsFocus::default(),
            terms_scroll: 0,
            last_link: None,
            notifications: NotificationQueue::new(),
            inputs: build_inputs(),
            countdown_timer: None,
            sink,
            launcher,
            events,
        };
        app.set_focus(DetailsFocus::Name);
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.countdown_timer = None;
        self.should_quit = true;
    }

    /// Quit, asking first if a payment is underway
    pub fn request_quit(&mut self) {
        if self.wizard.payment_initiated() && !self.wizard.is_completed() {
            self.open_dialog(ActiveDialog::ConfirmQuit);
        } else {
            self.quit();
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::Terms {
            self.terms_scroll = 0;
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Text input for a field
    pub fn input(&self, field: Field) -> Option<&TextInput> {
        self.inputs.get(&field)
    }

    /// The text field currently receiving keystrokes, if any
    pub fn active_field(&self) -> Option<Field> {
        match self.wizard.step() {
            Step::Details => self.focus.field(),
            Step::Payment => None,
            Step::Confirm => match self.wizard.confirm_phase() {
                Some(ConfirmPhase::AwaitingTransactionId) if !self.wizard.is_submitting() => {
                    Some(Field::TxnId)
                }
                _ => None,
            },
        }
    }

    /// Move focus on the details step
    pub fn set_focus(&mut self, focus: DetailsFocus) {
        self.focus = focus;
        self.sync_input_flags();
    }

    fn sync_input_flags(&mut self) {
        let active = self.active_field();
        let promo_locked = self.wizard.order().promo_applied;
        for (field, input) in self.inputs.iter_mut() {
            input.focused = Some(*field) == active;
            input.locked = *field == Field::PromoCode && promo_locked;
        }
    }

    /// Apply an edit to the active text field and hand the result to the wizard
    pub fn edit_active_field(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let Some(field) = self.active_field() else {
            return;
        };
        let Some(input) = self.inputs.get_mut(&field) else {
            return;
        };

        let before = input.clone();
        edit(input);
        if input.value() == before.value() {
            return;
        }

        if let Err(err) = self.wizard.set_field(field, input.value()) {
            *input = before;
            self.notify_error(&err);
        }
    }

    pub fn notify_error(&mut self, err: &CheckoutError) {
        self.notifications.push(Notification::error(err.user_message()));
    }

    /// Apply the promo code typed so far
    pub fn apply_promo(&mut self) {
        match self.wizard.apply_promo() {
            Ok(saved) => {
                self.notifications.push(Notification::success(format!(
                    "Promo code applied successfully! You save {}",
                    saved
                )));
                self.sync_input_flags();
            }
            Err(err) => self.notify_error(&err),
        }
    }

    pub fn cycle_country(&mut self, forward: bool) {
        self.wizard.cycle_country(forward);
    }

    pub fn cycle_currency(&mut self, forward: bool) {
        self.wizard.cycle_currency(forward);
    }

    /// details → payment
    pub fn continue_to_payment(&mut self) {
        match self.wizard.continue_to_payment() {
            Ok(()) => self.sync_input_flags(),
            Err(err) => self.notify_error(&err),
        }
    }

    /// payment → confirm: open the UPI app and start the countdown
    pub fn pay(&mut self) {
        let initiation = match self.wizard.initiate_payment() {
            Ok(initiation) => initiation,
            Err(err) => {
                self.notify_error(&err);
                return;
            }
        };

        let uri = initiation.link.to_uri();
        if let Err(err) = self.launcher.launch(&uri) {
            tracing::warn!(error = %err, "could not hand payment link to the system");
            self.notifications.push(Notification::warning(
                "No UPI app opened. Pay using the link shown below.",
            ));
        }
        self.last_link = Some(uri);

        let generation = initiation.countdown.generation();
        let events = self.events.clone();
        // Replacing the handle cancels any previous run
        self.countdown_timer = Some(CountdownTimer::start(
            initiation.countdown.initial(),
            TICK_INTERVAL,
            move || events.send(Event::Countdown(generation)).is_ok(),
        ));
        self.sync_input_flags();
    }

    /// A second of countdown `generation` passed
    pub fn on_countdown_tick(&mut self, generation: u64) {
        match self.wizard.tick(generation) {
            TickOutcome::Elapsed => {
                self.countdown_timer = None;
                self.notifications
                    .push(Notification::info("After payment, press Enter to confirm."));
            }
            TickOutcome::Running(_) | TickOutcome::Stale => {}
        }
    }

    /// "I Have Paid"
    pub fn confirm_paid(&mut self) {
        match self.wizard.confirm_paid() {
            Ok(()) => self.sync_input_flags(),
            Err(err) => self.notify_error(&err),
        }
    }

    /// Send the transaction ID on a worker thread
    pub fn submit(&mut self) {
        let submission = match self.wizard.begin_submission() {
            Ok(submission) => submission,
            Err(err) => {
                self.notify_error(&err);
                return;
            }
        };
        self.sync_input_flags();

        let sink = Arc::clone(&self.sink);
        let events = self.events.clone();
        thread::spawn(move || {
            let result = sink.submit(&submission);
            if events.send(Event::Submitted(result)).is_err() {
                tracing::debug!("submission finished after the TUI closed");
            }
        });
    }

    /// The submission worker finished
    pub fn on_submitted(&mut self, result: CheckoutResult<()>) {
        match self.wizard.finish_submission(result) {
            Ok(()) => {
                self.notifications.push(Notification::success(
                    "Payment Recorded! Verification Pending...",
                ));
            }
            Err(err) => self.notify_error(&err),
        }
        self.sync_input_flags();
    }

    /// "Go Back"
    pub fn go_back(&mut self) {
        match self.wizard.go_back() {
            Ok(_) => {
                self.countdown_timer = None;
                self.sync_input_flags();
            }
            Err(err) => self.notify_error(&err),
        }
    }

    /// "Done": start a fresh order
    pub fn done(&mut self) {
        match self.wizard.done() {
            Ok(()) => {
                self.countdown_timer = None;
                self.last_link = None;
                self.inputs = build_inputs();
                self.set_focus(DetailsFocus::Name);
            }
            Err(err) => self.notify_error(&err),
        }
    }

    /// Enter on the confirm step, by sub-phase
    pub fn confirm_action(&mut self) {
        match self.wizard.confirm_phase() {
            Some(ConfirmPhase::WaitingForCountdown) | None => {}
            Some(ConfirmPhase::AwaitingConfirmation) => self.confirm_paid(),
            Some(ConfirmPhase::AwaitingTransactionId) => self.submit(),
            Some(ConfirmPhase::Completed) => self.done(),
        }
    }

    /// Whether a countdown worker is still pacing ticks
    pub fn countdown_running(&self) -> bool {
        self.countdown_timer
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};
    use std::time::Duration;

    use super::*;
    use crate::services::launcher::NoopLauncher;
    use crate::services::submission::testing::RecordingSink;

    fn settings(countdown_secs: u32) -> Settings {
        let mut settings = Settings::default();
        settings.countdown_secs = countdown_secs;
        settings
    }

    fn test_app<'a>(settings: &'a Settings, sink: Arc<RecordingSink>) -> (App<'a>, Receiver<Event>) {
        let (tx, rx) = mpsc::channel();
        (App::new(settings, sink, Box::new(NoopLauncher), tx), rx)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.edit_active_field(|input| input.insert(c));
        }
    }

    fn fill_details(app: &mut App) {
        app.set_focus(DetailsFocus::Name);
        type_text(app, "Asha Rao");
        app.set_focus(DetailsFocus::Email);
        type_text(app, "asha@x.com");
        app.set_focus(DetailsFocus::Phone);
        type_text(app, "9876543210");
    }

    #[test]
    fn test_focus_cycles_through_rows() {
        assert_eq!(DetailsFocus::PromoCode.next(), DetailsFocus::Name);
        assert_eq!(DetailsFocus::Name.prev(), DetailsFocus::PromoCode);
        assert_eq!(DetailsFocus::Country.field(), None);
    }

    #[test]
    fn test_typing_updates_wizard() {
        let settings = settings(0);
        let (mut app, _rx) = test_app(&settings, Arc::new(RecordingSink::default()));
        fill_details(&mut app);

        assert_eq!(app.wizard.order().name, "Asha Rao");
        assert_eq!(app.wizard.order().phone, "9876543210");
        assert!(app.input(Field::Phone).unwrap().focused);
    }

    #[test]
    fn test_locked_promo_rejects_typing() {
        let settings = settings(0);
        let (mut app, _rx) = test_app(&settings, Arc::new(RecordingSink::default()));
        app.set_focus(DetailsFocus::PromoCode);
        type_text(&mut app, "AndroidX2025");
        app.apply_promo();
        assert!(app.input(Field::PromoCode).unwrap().locked);

        app.edit_active_field(|input| input.backspace());
        assert_eq!(app.input(Field::PromoCode).unwrap().value(), "AndroidX2025");
        assert_eq!(app.wizard.order().promo_code, "AndroidX2025");
        assert!(!app.notifications.is_empty());
    }

    #[test]
    fn test_invalid_details_show_toast() {
        let settings = settings(0);
        let (mut app, _rx) = test_app(&settings, Arc::new(RecordingSink::default()));
        app.continue_to_payment();
        assert_eq!(app.wizard.step(), Step::Details);
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Please fill in all fields."
        );
    }

    #[test]
    fn test_full_flow_through_worker() {
        let settings = settings(0);
        let sink = Arc::new(RecordingSink::default());
        let (mut app, rx) = test_app(&settings, Arc::clone(&sink));

        fill_details(&mut app);
        app.continue_to_payment();
        app.pay();
        assert_eq!(app.wizard.step(), Step::Confirm);
        assert!(app.last_link.as_deref().unwrap().starts_with("upi://pay?"));
        assert_eq!(
            app.wizard.confirm_phase(),
            Some(ConfirmPhase::AwaitingConfirmation)
        );

        app.confirm_action();
        assert_eq!(app.active_field(), Some(Field::TxnId));
        type_text(&mut app, "UPI12345678");
        app.confirm_action();
        assert!(app.wizard.is_submitting());
        assert_eq!(app.active_field(), None);

        // A second Enter while in flight is rejected
        app.confirm_action();
        assert_eq!(
            app.notifications.current().unwrap().message,
            CheckoutError::SubmissionInProgress.to_string()
        );

        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let Event::Submitted(result) = event else {
            panic!("expected a submission result");
        };
        app.on_submitted(result);

        assert_eq!(sink.count(), 1);
        assert_eq!(app.wizard.confirm_phase(), Some(ConfirmPhase::Completed));

        app.confirm_action();
        assert_eq!(app.wizard.step(), Step::Details);
        assert_eq!(app.input(Field::Name).unwrap().value(), "");
        assert!(app.last_link.is_none());
    }

    #[test]
    fn test_countdown_ticks_arrive_as_events() {
        let settings = settings(1);
        let (mut app, rx) = test_app(&settings, Arc::new(RecordingSink::default()));
        fill_details(&mut app);
        app.continue_to_payment();
        app.pay();
        assert_eq!(
            app.wizard.confirm_phase(),
            Some(ConfirmPhase::WaitingForCountdown)
        );

        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let Event::Countdown(generation) = event else {
            panic!("expected a countdown tick");
        };
        app.on_countdown_tick(generation);
        assert_eq!(
            app.wizard.confirm_phase(),
            Some(ConfirmPhase::AwaitingConfirmation)
        );
        assert!(!app.countdown_running());
    }

    #[test]
    fn test_go_back_cancels_countdown() {
        let settings = settings(20);
        let (mut app, _rx) = test_app(&settings, Arc::new(RecordingSink::default()));
        fill_details(&mut app);
        app.continue_to_payment();
        app.pay();
        assert!(app.countdown_running());

        app.go_back();
        assert_eq!(app.wizard.step(), Step::Payment);
        assert!(!app.countdown_running());
        assert_eq!(app.wizard.order().name, "Asha Rao");
    }

    #[test]
    fn test_quit_asks_during_payment() {
        let settings = settings(0);
        let (mut app, _rx) = test_app(&settings, Arc::new(RecordingSink::default()));
        app.request_quit();
        assert!(app.should_quit);

        let (mut app, _rx) = test_app(&settings, Arc::new(RecordingSink::default()));
        fill_details(&mut app);
        app.continue_to_payment();
        app.pay();
        app.request_quit();
        assert!(!app.should_quit);
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmQuit);
    }
}
