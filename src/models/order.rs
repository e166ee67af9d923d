//! Order form model
//!
//! Everything the buyer enters while moving through the checkout, plus the
//! step the wizard is on.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::country::CountrySelection;
use super::currency::Currency;
use super::money::Money;

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Buyer details, promo code and currency
    #[default]
    Details,
    /// Review and hand off to a UPI app
    Payment,
    /// Wait, confirm and report the transaction ID
    Confirm,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::Payment => "payment",
            Self::Confirm => "confirm",
        }
    }

    /// 1-based position in the wizard
    pub fn number(&self) -> u8 {
        match self {
            Self::Details => 1,
            Self::Payment => 2,
            Self::Confirm => 3,
        }
    }

    /// Progress shown in the header
    pub fn progress_percent(&self) -> u16 {
        match self {
            Self::Details => 33,
            Self::Payment => 66,
            Self::Confirm => 100,
        }
    }

    /// Step that "Go Back" returns to
    pub fn previous(&self) -> Option<Step> {
        match self {
            Self::Details => None,
            Self::Payment => Some(Self::Details),
            Self::Confirm => Some(Self::Payment),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Details => "Details",
            Self::Payment => "Payment",
            Self::Confirm => "Confirm",
        };
        write!(f, "{}", label)
    }
}

/// Free-text fields of the order form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    PromoCode,
    TxnId,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::PromoCode => "Promo Code",
            Self::TxnId => "Transaction ID",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter your name",
            Self::Email => "Enter your email",
            Self::Phone => "10-digit mobile number",
            Self::PromoCode => "Enter promo code",
            Self::TxnId => "Enter UPI Transaction ID",
        }
    }
}

/// The order being filled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub country: CountrySelection,
    pub phone: String,
    /// Course being purchased (fixed per deployment)
    pub course: String,
    /// Price to pay, in INR
    pub price: Money,
    /// List price before any promo
    pub original_price: Money,
    pub promo_code: String,
    pub promo_applied: bool,
    /// Currency the price is displayed in
    pub currency: Currency,
    /// Self-reported UPI transaction reference
    pub txn_id: String,
    pub step: Step,
}

impl OrderForm {
    /// Create an empty order for a course at its list price
    pub fn new(course: impl Into<String>, price: Money) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            country: CountrySelection::default(),
            phone: String::new(),
            course: course.into(),
            price,
            original_price: price,
            promo_code: String::new(),
            promo_applied: false,
            currency: Currency::default(),
            txn_id: String::new(),
            step: Step::default(),
        }
    }

    /// Calling code followed by the local number (`+919876543210`)
    pub fn full_phone(&self) -> String {
        format!("{}{}", self.country.code(), self.phone)
    }

    /// Amount saved through the promo code
    pub fn savings(&self) -> Money {
        self.original_price - self.price
    }

    /// Current value of a text field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::PromoCode => &self.promo_code,
            Field::TxnId => &self.txn_id,
        }
    }

    pub(crate) fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::PromoCode => &mut self.promo_code,
            Field::TxnId => &mut self.txn_id,
        }
    }

    /// Price in the selected display currency, with symbol
    pub fn display_price(&self) -> String {
        self.currency.display_price(self.price)
    }

    /// List price in the selected display currency, with symbol
    pub fn display_original_price(&self) -> String {
        self.currency.display_price(self.original_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> OrderForm {
        OrderForm::new("Android Security & Hacking", Money::from_rupees(45000))
    }

    #[test]
    fn test_new_order_defaults() {
        let o = order();
        assert_eq!(o.step, Step::Details);
        assert_eq!(o.price, o.original_price);
        assert_eq!(o.country.code(), "+91");
        assert_eq!(o.currency, Currency::Inr);
        assert!(!o.promo_applied);
        assert!(o.savings().is_zero());
    }

    #[test]
    fn test_full_phone() {
        let mut o = order();
        o.phone = "9876543210".into();
        assert_eq!(o.full_phone(), "+919876543210");
    }

    #[test]
    fn test_step_navigation() {
        assert_eq!(Step::Confirm.previous(), Some(Step::Payment));
        assert_eq!(Step::Payment.previous(), Some(Step::Details));
        assert_eq!(Step::Details.previous(), None);
        assert_eq!(Step::Payment.progress_percent(), 66);
        assert_eq!(Step::Confirm.number(), 3);
    }

    #[test]
    fn test_display_price_follows_currency() {
        let mut o = order();
        assert_eq!(o.display_price(), "₹45,000");
        o.currency = Currency::Usd;
        assert_eq!(o.display_price(), "$540.00");
    }
}
