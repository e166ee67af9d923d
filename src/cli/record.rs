//! `record`: record a payment made by scanning the static QR code
//!
//! Buyers who paid without going through the wizard only need a name,
//! phone number and transaction ID. Email is optional and sent empty when
//! not given.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_recorded_payment;
use crate::error::{CheckoutError, CheckoutResult};
use crate::services::submission::{FormSink, Submission};
use crate::services::validation::{
    validate_email, validate_name, validate_phone, validate_txn_id, MSG_MISSING_FIELDS,
};

use super::link::parse_country_code;

/// Arguments for `record`
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Buyer's full name
    #[arg(long)]
    pub name: String,
    /// 10-digit phone number without the calling code
    #[arg(long)]
    pub phone: String,
    /// UPI transaction ID from the payment app
    #[arg(long)]
    pub txn_id: String,
    /// Buyer's email address
    #[arg(long)]
    pub email: Option<String>,
    /// Calling code for the phone number
    #[arg(long, default_value = "+91")]
    pub country_code: String,
}

/// Validate the arguments and build the submission
pub fn build_submission(settings: &Settings, args: &RecordArgs) -> CheckoutResult<Submission> {
    validate_name(&args.name)?;
    if args.txn_id.trim().is_empty() {
        return Err(CheckoutError::validation(MSG_MISSING_FIELDS));
    }
    validate_phone(&args.phone)?;
    validate_txn_id(&args.txn_id)?;
    let country = parse_country_code(&args.country_code)?;

    let email = args.email.as_deref().unwrap_or_default();
    if !email.is_empty() {
        validate_email(email)?;
    }

    Ok(Submission::new(
        args.name.trim(),
        email,
        format!("{}{}", country.code(), args.phone),
        &settings.course.name,
        args.txn_id.as_str(),
    ))
}

/// Handle `record`
pub fn handle_record_command(
    settings: &Settings,
    args: RecordArgs,
    sink: &dyn FormSink,
) -> CheckoutResult<Submission> {
    let submission = build_submission(settings, &args)?;
    sink.submit(&submission)?;
    print!("{}", format_recorded_payment(&submission));
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::submission::testing::RecordingSink;
    use crate::services::validation::{MSG_INVALID_PHONE, MSG_INVALID_TXN_ID};

    fn args() -> RecordArgs {
        RecordArgs {
            name: "Asha Rao".into(),
            phone: "9876543210".into(),
            txn_id: "UPI12345678".into(),
            email: None,
            country_code: "+91".into(),
        }
    }

    #[test]
    fn test_record_sends_one_submission() {
        let sink = RecordingSink::default();
        let sent = handle_record_command(&Settings::default(), args(), &sink).unwrap();

        assert_eq!(sink.count(), 1);
        assert_eq!(sent.email, "");
        assert_eq!(sent.phone, "+919876543210");
        assert_eq!(sent.course, "Android Security & Hacking");
    }

    #[test]
    fn test_record_validation_sends_nothing() {
        let sink = RecordingSink::default();

        let mut bad = args();
        bad.name = "  ".into();
        let err = handle_record_command(&Settings::default(), bad, &sink).unwrap_err();
        assert_eq!(err.to_string(), MSG_MISSING_FIELDS);

        let mut bad = args();
        bad.phone = "98765 4321".into();
        let err = handle_record_command(&Settings::default(), bad, &sink).unwrap_err();
        assert_eq!(err.to_string(), MSG_INVALID_PHONE);

        let mut bad = args();
        bad.txn_id = "1234567".into();
        let err = handle_record_command(&Settings::default(), bad, &sink).unwrap_err();
        assert_eq!(err.to_string(), MSG_INVALID_TXN_ID);

        let mut bad = args();
        bad.txn_id = "        ".into();
        let err = handle_record_command(&Settings::default(), bad, &sink).unwrap_err();
        assert_eq!(err.to_string(), MSG_MISSING_FIELDS);

        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_record_network_failure() {
        let sink = RecordingSink::failing("timed out");
        let err = handle_record_command(&Settings::default(), args(), &sink).unwrap_err();
        assert!(err.is_network());
        assert_eq!(err.user_message(), "Failed to record payment. Please try again.");
    }

    #[test]
    fn test_record_with_email_and_country() {
        let mut args = args();
        args.email = Some("asha@x.com".into());
        args.country_code = "+44".into();
        let s = build_submission(&Settings::default(), &args).unwrap();
        assert_eq!(s.email, "asha@x.com");
        assert_eq!(s.phone, "+449876543210");
    }
}
