//! `link`: build a UPI payment link without the interactive wizard
//!
//! Runs the details and payment steps of the wizard with the given buyer,
//! so the same validation and promo rules apply.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_payment_request;
use crate::error::{CheckoutError, CheckoutResult};
use crate::models::{CountrySelection, Currency, Field};
use crate::services::launcher::UriLauncher;
use crate::services::upi::UpiPaymentLink;
use crate::wizard::PaymentWizard;

/// Arguments for `link`
#[derive(Args, Debug, Clone)]
pub struct LinkArgs {
    /// Buyer's full name
    #[arg(long)]
    pub name: String,
    /// Buyer's email address
    #[arg(long)]
    pub email: String,
    /// 10-digit phone number without the calling code
    #[arg(long)]
    pub phone: String,
    /// Calling code for the phone number
    #[arg(long, default_value = "+91")]
    pub country_code: String,
    /// Promo code to apply
    #[arg(long)]
    pub promo: Option<String>,
    /// Also show the price in this currency (INR, USD, EUR, ...)
    #[arg(long, default_value = "INR")]
    pub currency: Currency,
    /// Hand the link to the system's UPI handler
    #[arg(long)]
    pub open: bool,
}

/// Parse a calling code from the fixed table
pub fn parse_country_code(code: &str) -> CheckoutResult<CountrySelection> {
    CountrySelection::from_code(code.trim())
        .ok_or_else(|| CheckoutError::validation(format!("Unknown country code: {}", code.trim())))
}

/// Validate the buyer and build the payment link
pub fn build_link(settings: &Settings, args: &LinkArgs) -> CheckoutResult<(PaymentWizard, UpiPaymentLink)> {
    let mut wizard = PaymentWizard::new(settings);
    wizard.set_field(Field::Name, args.name.as_str())?;
    wizard.set_field(Field::Email, args.email.as_str())?;
    wizard.set_field(Field::Phone, args.phone.as_str())?;
    wizard.set_country(parse_country_code(&args.country_code)?);
    wizard.set_currency(args.currency);

    if let Some(code) = &args.promo {
        wizard.set_field(Field::PromoCode, code.as_str())?;
        wizard.apply_promo()?;
    }

    wizard.continue_to_payment()?;
    let link = wizard.payment_link();
    Ok((wizard, link))
}

/// Handle `link`
pub fn handle_link_command(
    settings: &Settings,
    args: LinkArgs,
    launcher: &dyn UriLauncher,
) -> CheckoutResult<()> {
    let (wizard, link) = build_link(settings, &args)?;
    print!(
        "{}",
        format_payment_request(wizard.order(), wizard.merchant(), &link)
    );

    if args.open {
        launcher.launch(&link.to_uri())?;
        println!("\nOpened in the default UPI app.");
    }
    Ok(())
}
