//! Order and payment formatting

use crate::config::settings::MerchantSettings;
use crate::models::OrderForm;
use crate::services::submission::Submission;
use crate::services::upi::UpiPaymentLink;

/// Summary of a payment request, followed by its UPI link
pub fn format_payment_request(
    order: &OrderForm,
    merchant: &MerchantSettings,
    link: &UpiPaymentLink,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Course:      {}\n", order.course));
    output.push_str(&format!("Buyer:       {} <{}>\n", order.name, order.email));
    output.push_str(&format!("Phone:       {}\n", order.full_phone()));
    output.push_str(&format!("Payment to:  {}\n", merchant.name));
    output.push_str(&format!("UPI ID:      {}\n", merchant.vpa));

    if order.promo_applied {
        output.push_str(&format!(
            "Amount:      {} (was {}, promo {})\n",
            order.price, order.original_price, order.promo_code
        ));
    } else {
        output.push_str(&format!("Amount:      {}\n", order.price));
    }

    if !order.currency.is_base() {
        output.push_str(&format!("             approx. {}\n", order.display_price()));
    }

    output.push('\n');
    output.push_str(&link.to_uri());
    output.push('\n');
    output
}

/// Confirmation printed after a payment has been recorded
pub fn format_recorded_payment(submission: &Submission) -> String {
    format!(
        "Payment recorded. Verification pending.\n\
         Your payment for {} is being verified.\n\
         Transaction ID: {}\n",
        submission.course, submission.txn_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Money};

    fn order() -> OrderForm {
        let mut order = OrderForm::new("Android Security & Hacking", Money::from_rupees(45000));
        order.name = "Asha Rao".into();
        order.email = "asha@x.com".into();
        order.phone = "9876543210".into();
        order
    }

    #[test]
    fn test_payment_request_ends_with_link() {
        let order = order();
        let merchant = MerchantSettings::default();
        let link = UpiPaymentLink::for_order(&merchant, &order);

        let output = format_payment_request(&order, &merchant, &link);
        assert!(output.contains("Phone:       +919876543210"));
        assert!(output.contains("Amount:      ₹45,000\n"));
        assert!(!output.contains("approx."));
        assert!(output.trim_end().ends_with("&am=45000&cu=INR"));
    }

    #[test]
    fn test_payment_request_with_promo_and_currency() {
        let mut order = order();
        order.price = Money::from_rupees(8999);
        order.promo_code = "AndroidX2025".into();
        order.promo_applied = true;
        order.currency = Currency::Usd;
        let merchant = MerchantSettings::default();
        let link = UpiPaymentLink::for_order(&merchant, &order);

        let output = format_payment_request(&order, &merchant, &link);
        assert!(output.contains("₹8,999 (was ₹45,000, promo AndroidX2025)"));
        assert!(output.contains("approx. $107.99"));
    }

    #[test]
    fn test_recorded_payment() {
        let s = Submission::new("A", "", "+911234567890", "Course", "UPI12345678");
        let output = format_recorded_payment(&s);
        assert!(output.contains("Transaction ID: UPI12345678"));
        assert!(output.contains("payment for Course"));
    }
}
