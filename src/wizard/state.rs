//! Payment wizard state machine
//!
//! `details` → `payment` → `confirm`, with "Go Back" returning one step
//! without clearing anything. The confirm step has four sub-phases that are
//! derived from flags rather than stored:
//!
//! | phase | condition |
//! |---|---|
//! | waiting for countdown | countdown running |
//! | awaiting confirmation | countdown finished, "I Have Paid" not pressed |
//! | awaiting transaction ID | "I Have Paid" pressed |
//! | completed | submission recorded |
//!
//! The wizard performs no I/O of its own. Operations that need the outside
//! world hand back what to do (a link to open, a countdown to pace, a
//! submission to send) and the caller reports the outcome.

use crate::config::settings::{MerchantSettings, Settings};
use crate::error::{CheckoutError, CheckoutResult};
use crate::models::{CountrySelection, Currency, Field, Money, OrderForm, Step};
use crate::services::promo::PromoOffer;
use crate::services::submission::{FormSink, Submission};
use crate::services::upi::UpiPaymentLink;
use crate::services::validation::{validate_buyer, validate_txn_id};

use super::countdown::Countdown;

/// Sub-phase of the confirm step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPhase {
    /// The countdown is running
    WaitingForCountdown,
    /// "I Have Paid" is available
    AwaitingConfirmation,
    /// The transaction ID field is shown
    AwaitingTransactionId,
    /// The claim has been recorded
    Completed,
}

/// What the caller has to do after the buyer presses "Pay"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentInitiation {
    /// Link to hand to a UPI app
    pub link: UpiPaymentLink,
    /// Countdown to pace, one tick per second
    pub countdown: Countdown,
}

/// Result of feeding a countdown tick to the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belongs to an abandoned countdown and was ignored
    Stale,
    /// Seconds left
    Running(u32),
    /// The countdown just reached zero; "I Have Paid" is now available
    Elapsed,
}

/// The checkout wizard
#[derive(Debug, Clone)]
pub struct PaymentWizard {
    order: OrderForm,
    merchant: MerchantSettings,
    promo: PromoOffer,
    list_price: Money,
    countdown_secs: u32,
    payment_initiated: bool,
    payment_clicked: bool,
    submitting: bool,
    completed: bool,
    countdown: Option<Countdown>,
    generation: u64,
}

impl PaymentWizard {
    /// Create a wizard for the deployment described by `settings`
    pub fn new(settings: &Settings) -> Self {
        Self {
            order: OrderForm::new(settings.course.name.clone(), settings.course.price),
            merchant: settings.merchant.clone(),
            promo: PromoOffer::from_course(&settings.course),
            list_price: settings.course.price,
            countdown_secs: settings.countdown_secs,
            payment_initiated: false,
            payment_clicked: false,
            submitting: false,
            completed: false,
            countdown: None,
            generation: 0,
        }
    }

    pub fn order(&self) -> &OrderForm {
        &self.order
    }

    pub fn step(&self) -> Step {
        self.order.step
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    pub fn payment_initiated(&self) -> bool {
        self.payment_initiated
    }

    pub fn payment_clicked(&self) -> bool {
        self.payment_clicked
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The link the buyer would pay with right now
    pub fn payment_link(&self) -> UpiPaymentLink {
        UpiPaymentLink::for_order(&self.merchant, &self.order)
    }

    pub fn merchant(&self) -> &MerchantSettings {
        &self.merchant
    }

    /// Sub-phase of the confirm step, `None` on the other steps
    pub fn confirm_phase(&self) -> Option<ConfirmPhase> {
        if self.order.step != Step::Confirm {
            return None;
        }

        let phase = if self.completed {
            ConfirmPhase::Completed
        } else if self.payment_clicked {
            ConfirmPhase::AwaitingTransactionId
        } else if self.countdown.is_some_and(|c| !c.is_finished()) {
            ConfirmPhase::WaitingForCountdown
        } else {
            ConfirmPhase::AwaitingConfirmation
        };
        Some(phase)
    }

    /// Update a text field
    ///
    /// The promo code is locked once applied.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> CheckoutResult<()> {
        if field == Field::PromoCode && self.order.promo_applied {
            return Err(CheckoutError::PromoAlreadyApplied);
        }
        *self.order.value_mut(field) = value.into();
        Ok(())
    }

    pub fn set_country(&mut self, country: CountrySelection) {
        self.order.country = country;
    }

    pub fn cycle_country(&mut self, forward: bool) {
        self.order.country = if forward {
            self.order.country.next()
        } else {
            self.order.country.prev()
        };
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.order.currency = currency;
    }

    pub fn cycle_currency(&mut self, forward: bool) {
        self.order.currency = if forward {
            self.order.currency.next()
        } else {
            self.order.currency.prev()
        };
    }

    /// Apply the promo code typed into the order; returns the amount saved
    pub fn apply_promo(&mut self) -> CheckoutResult<Money> {
        self.require_step(Step::Details, "apply a promo code")?;
        self.promo.apply(&mut self.order)
    }

    /// details → payment
    pub fn continue_to_payment(&mut self) -> CheckoutResult<()> {
        self.require_step(Step::Details, "continue to payment")?;
        validate_buyer(&self.order)?;

        self.order.step = Step::Payment;
        tracing::info!(step = %self.order.step, "wizard advanced");
        Ok(())
    }

    /// payment → confirm
    ///
    /// Builds the UPI link and starts a fresh countdown. The caller opens the
    /// link and paces the countdown with [`PaymentWizard::tick`].
    pub fn initiate_payment(&mut self) -> CheckoutResult<PaymentInitiation> {
        self.require_step(Step::Payment, "start a payment")?;
        validate_buyer(&self.order)?;

        let link = self.payment_link();
        self.generation += 1;
        let countdown = Countdown::new(self.generation, self.countdown_secs);
        self.countdown = Some(countdown);
        self.payment_initiated = true;
        self.order.step = Step::Confirm;

        tracing::info!(
            amount = %link.amount,
            countdown = self.countdown_secs,
            generation = self.generation,
            "payment initiated"
        );
        Ok(PaymentInitiation { link, countdown })
    }

    /// Advance the countdown of run `generation` by one second
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if self.order.step != Step::Confirm {
            return TickOutcome::Stale;
        }
        let Some(countdown) = self.countdown.as_mut() else {
            return TickOutcome::Stale;
        };
        if countdown.generation() != generation || countdown.is_finished() {
            return TickOutcome::Stale;
        }

        match countdown.tick() {
            0 => {
                tracing::debug!(generation, "countdown elapsed");
                TickOutcome::Elapsed
            }
            left => TickOutcome::Running(left),
        }
    }

    /// "I Have Paid"
    ///
    /// Only available once the countdown has finished; a second press is
    /// rejected without changing anything.
    pub fn confirm_paid(&mut self) -> CheckoutResult<()> {
        self.require_step(Step::Confirm, "confirm a payment")?;
        match self.confirm_phase() {
            Some(ConfirmPhase::WaitingForCountdown) | Some(ConfirmPhase::Completed) => {
                return Err(CheckoutError::invalid_transition(
                    "confirm",
                    "confirm a payment",
                ));
            }
            _ => {}
        }
        validate_buyer(&self.order)?;

        if self.payment_clicked {
            return Err(CheckoutError::AlreadyConfirmed);
        }

        self.payment_clicked = true;
        tracing::info!("buyer reports payment made");
        Ok(())
    }

    /// Validate the transaction ID and mark a submission in flight
    ///
    /// Returns the payload to send. Until [`PaymentWizard::finish_submission`]
    /// is called every further attempt is rejected.
    pub fn begin_submission(&mut self) -> CheckoutResult<Submission> {
        if self.submitting {
            return Err(CheckoutError::SubmissionInProgress);
        }
        if self.confirm_phase() != Some(ConfirmPhase::AwaitingTransactionId) {
            return Err(CheckoutError::invalid_transition(
                self.order.step.as_str(),
                "submit a transaction ID",
            ));
        }
        validate_txn_id(&self.order.txn_id)?;

        self.submitting = true;
        let submission = Submission::from_order(&self.order);
        tracing::info!(submission = %submission.id, "submission started");
        Ok(submission)
    }

    /// Report how the submission went
    ///
    /// Success completes the wizard. A failure is handed back and the buyer
    /// stays on the transaction ID field to retry by hand.
    pub fn finish_submission(&mut self, result: CheckoutResult<()>) -> CheckoutResult<()> {
        if !self.submitting {
            return Err(CheckoutError::invalid_transition(
                self.order.step.as_str(),
                "finish a submission",
            ));
        }
        self.submitting = false;

        match result {
            Ok(()) => {
                self.completed = true;
                self.countdown = None;
                tracing::info!("payment recorded, verification pending");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                Err(err)
            }
        }
    }

    /// Submit synchronously through `sink`
    pub fn submit(&mut self, sink: &dyn FormSink) -> CheckoutResult<()> {
        let submission = self.begin_submission()?;
        let result = sink.submit(&submission);
        self.finish_submission(result)
    }

    /// Return to the previous step, keeping every field
    ///
    /// Leaving the confirm step abandons its countdown.
    pub fn go_back(&mut self) -> CheckoutResult<Step> {
        if self.submitting {
            return Err(CheckoutError::SubmissionInProgress);
        }
        if self.completed {
            return Err(CheckoutError::invalid_transition("confirm", "go back"));
        }
        let Some(previous) = self.order.step.previous() else {
            return Err(CheckoutError::invalid_transition("details", "go back"));
        };

        if self.order.step == Step::Confirm {
            self.countdown = None;
        }
        self.order.step = previous;
        tracing::info!(step = %previous, "wizard went back");
        Ok(previous)
    }

    /// "Done" after a recorded payment: start over with a fresh order
    pub fn done(&mut self) -> CheckoutResult<()> {
        if !self.completed {
            return Err(CheckoutError::invalid_transition(
                self.order.step.as_str(),
                "finish",
            ));
        }
        self.reset();
        Ok(())
    }

    /// Discard the order and every flag
    pub fn reset(&mut self) {
        self.order = OrderForm::new(self.order.course.clone(), self.list_price);
        self.payment_initiated = false;
        self.payment_clicked = false;
        self.submitting = false;
        self.completed = false;
        self.countdown = None;
        tracing::debug!("wizard reset");
    }

    fn require_step(&self, step: Step, action: &'static str) -> CheckoutResult<()> {
        if self.order.step != step {
            return Err(CheckoutError::invalid_transition(
                self.order.step.as_str(),
                action,
            ));
        }
        Ok(())
    }
}
