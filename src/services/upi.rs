//! UPI deep links
//!
//! Builds the `upi://pay` URI handed to whatever UPI app the device has.
//! The outcome of the payment is never reported back.

use std::fmt;

use urlencoding::encode;

use crate::config::settings::MerchantSettings;
use crate::models::{Money, OrderForm};

/// Currency code UPI amounts are always expressed in
pub const UPI_CURRENCY: &str = "INR";

/// A `upi://pay` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpiPaymentLink {
    /// Payee VPA (`pa`)
    pub payee_vpa: String,
    /// Payee name (`pn`)
    pub payee_name: String,
    /// Transaction note (`tn`)
    pub note: String,
    /// Amount in INR (`am`)
    pub amount: Money,
}

impl UpiPaymentLink {
    /// Link paying the order's current price to the merchant
    ///
    /// The amount is the INR price regardless of the display currency.
    pub fn for_order(merchant: &MerchantSettings, order: &OrderForm) -> Self {
        Self {
            payee_vpa: merchant.vpa.clone(),
            payee_name: merchant.name.clone(),
            note: format!(
                "Payment from {}, {}, {}, Course: {}",
                order.name, order.email, order.phone, order.course
            ),
            amount: order.price,
        }
    }

    /// Render the URI
    pub fn to_uri(&self) -> String {
        format!(
            "upi://pay?pa={}&pn={}&tn={}&am={}&cu={}",
            self.payee_vpa,
            encode(&self.payee_name),
            encode(&self.note),
            self.amount.upi_amount(),
            UPI_CURRENCY
        )
    }
}

impl fmt::Display for UpiPaymentLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}
