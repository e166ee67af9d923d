//! Promo code handling
//!
//! A deployment has exactly one valid code, checked on the client. Applying
//! it swaps the order price for a fixed discounted price.

use crate::config::settings::CourseSettings;
use crate::error::{CheckoutError, CheckoutResult};
use crate::models::{Money, OrderForm};

/// The single valid promo code of a deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoOffer {
    code: String,
    discounted_price: Money,
}

impl PromoOffer {
    pub fn new(code: impl Into<String>, discounted_price: Money) -> Self {
        Self {
            code: code.into(),
            discounted_price,
        }
    }

    pub fn from_course(course: &CourseSettings) -> Self {
        Self::new(course.promo_code.clone(), course.discounted_price)
    }

    pub fn discounted_price(&self) -> Money {
        self.discounted_price
    }

    /// Whether `input` (trimmed) is the valid code; comparison is case-sensitive
    pub fn matches(&self, input: &str) -> bool {
        input.trim() == self.code
    }

    /// Apply the order's promo code
    ///
    /// On success the order price becomes the discounted price and the code
    /// is locked in. A second application is rejected, as is an empty or
    /// unknown code; a rejection leaves the price untouched.
    pub fn apply(&self, order: &mut OrderForm) -> CheckoutResult<Money> {
        if order.promo_applied {
            return Err(CheckoutError::PromoAlreadyApplied);
        }

        let input = order.promo_code.trim();
        if input.is_empty() {
            return Err(CheckoutError::validation("Enter a promo code first."));
        }

        if !self.matches(input) {
            tracing::info!(code = input, "promo code rejected");
            return Err(CheckoutError::InvalidPromo(input.to_string()));
        }

        order.price = self.discounted_price;
        order.promo_applied = true;
        tracing::info!(
            price = %order.price,
            saved = %order.savings(),
            "promo code applied"
        );

        Ok(order.savings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PromoOffer, OrderForm) {
        let offer = PromoOffer::new("AndroidX2025", Money::from_rupees(8999));
        let order = OrderForm::new("Course", Money::from_rupees(45000));
        (offer, order)
    }

    #[test]
    fn test_apply_valid_code() {
        let (offer, mut order) = setup();
        order.promo_code = "  AndroidX2025 ".into();

        let saved = offer.apply(&mut order).unwrap();
        assert_eq!(saved, Money::from_rupees(36001));
        assert_eq!(order.price, Money::from_rupees(8999));
        assert_eq!(order.original_price, Money::from_rupees(45000));
        assert!(order.promo_applied);
    }

    #[test]
    fn test_second_application_rejected() {
        let (offer, mut order) = setup();
        order.promo_code = "AndroidX2025".into();
        offer.apply(&mut order).unwrap();

        let err = offer.apply(&mut order).unwrap_err();
        assert!(matches!(err, CheckoutError::PromoAlreadyApplied));
        assert_eq!(order.price, Money::from_rupees(8999));
    }

    #[test]
    fn test_wrong_code_leaves_price() {
        let (offer, mut order) = setup();
        for attempt in ["androidx2025", "AndroidX2024", "FREE"] {
            order.promo_code = attempt.into();
            let err = offer.apply(&mut order).unwrap_err();
            assert!(matches!(err, CheckoutError::InvalidPromo(_)));
            assert_eq!(order.price, Money::from_rupees(45000));
            assert!(!order.promo_applied);
        }
    }

    #[test]
    fn test_empty_code_rejected() {
        let (offer, mut order) = setup();
        order.promo_code = "   ".into();
        assert!(offer.apply(&mut order).unwrap_err().is_validation());
    }
}
