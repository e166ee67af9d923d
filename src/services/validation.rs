//! Buyer input validation
//!
//! Names must be non-empty, emails roughly address-shaped, phones ten
//! digits, and transaction IDs at least eight characters. Nothing here can
//! tell whether a payment actually happened.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CheckoutError, CheckoutResult};
use crate::models::OrderForm;

/// Minimum accepted length of a self-reported transaction ID
pub const MIN_TXN_ID_LEN: usize = 8;

pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields.";
pub const MSG_INVALID_EMAIL: &str = "Invalid email format.";
pub const MSG_INVALID_PHONE: &str = "Enter a valid 10-digit phone number.";
pub const MSG_INVALID_TXN_ID: &str = "Enter a valid Transaction ID (min 8 characters).";

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^\S+@\S+\.\S+$")
        .map_err(|err| tracing::error!(?err, "email pattern failed to compile"))
        .ok()
});

static PHONE_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{10}$")
        .map_err(|err| tracing::error!(?err, "phone pattern failed to compile"))
        .ok()
});

/// Check that the name is not blank
pub fn validate_name(name: &str) -> CheckoutResult<()> {
    if name.trim().is_empty() {
        return Err(CheckoutError::validation(MSG_MISSING_FIELDS));
    }
    Ok(())
}

/// Check that the email is present and shaped like `local@domain.tld`
pub fn validate_email(email: &str) -> CheckoutResult<()> {
    let matches = EMAIL_REGEX
        .as_ref()
        .is_some_and(|regex| regex.is_match(email));
    if email.trim().is_empty() || !matches {
        return Err(CheckoutError::validation(MSG_INVALID_EMAIL));
    }
    Ok(())
}

/// Check that the phone number is exactly ten ASCII digits
pub fn validate_phone(phone: &str) -> CheckoutResult<()> {
    let matches = PHONE_REGEX
        .as_ref()
        .is_some_and(|regex| regex.is_match(phone));
    if !matches {
        return Err(CheckoutError::validation(MSG_INVALID_PHONE));
    }
    Ok(())
}

/// Guard shared by "continue", "pay" and "I Have Paid"
///
/// Checks run in form order and the first failure is reported.
pub fn validate_buyer(order: &OrderForm) -> CheckoutResult<()> {
    validate_name(&order.name)?;
    validate_email(&order.email)?;
    validate_phone(&order.phone)?;
    Ok(())
}

/// Check the self-reported transaction ID
pub fn validate_txn_id(txn_id: &str) -> CheckoutResult<()> {
    if txn_id.chars().count() < MIN_TXN_ID_LEN {
        return Err(CheckoutError::validation(MSG_INVALID_TXN_ID));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn order(name: &str, email: &str, phone: &str) -> OrderForm {
        let mut o = OrderForm::new("Course", Money::from_rupees(100));
        o.name = name.into();
        o.email = email.into();
        o.phone = phone.into();
        o
    }

    #[test]
    fn test_valid_buyer() {
        assert!(validate_buyer(&order("Asha Rao", "asha@x.com", "9876543210")).is_ok());
    }

    #[test]
    fn test_blank_name_rejected_first() {
        let err = validate_buyer(&order("   ", "bad", "123")).unwrap_err();
        assert_eq!(err.to_string(), MSG_MISSING_FIELDS);
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("first.last@sub.domain.in").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("asha@x").is_err());
        assert!(validate_email("asha.x.com").is_err());
        assert!(validate_email("asha rao@x.com").is_err());
        assert_eq!(
            validate_email("nope").unwrap_err().to_string(),
            MSG_INVALID_EMAIL
        );
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("987654321").is_err());
        assert!(validate_phone("98765432100").is_err());
        assert!(validate_phone("98765 43210").is_err());
        assert!(validate_phone("+919876543210").is_err());
        // Non-ASCII digits are not accepted
        assert!(validate_phone("९८७६५४३२१०").is_err());
    }

    #[test]
    fn test_txn_id_length() {
        assert!(validate_txn_id("UPI12345678").is_ok());
        assert!(validate_txn_id("12345678").is_ok());
        assert!(validate_txn_id("1234567").is_err());
        assert!(validate_txn_id("").is_err());
    }
}
