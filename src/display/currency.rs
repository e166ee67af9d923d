//! Currency table formatting

use crate::models::{Currency, Money};

/// Format the course price in every supported currency
///
/// `original` is shown struck through (as a second column) when it differs
/// from `price`.
pub fn format_currency_table(course: &str, price: Money, original: Money) -> String {
    let discounted = price != original;
    let name_width = Currency::ALL
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!("{}\n\n", course));

    if discounted {
        output.push_str(&format!(
            "{:<4}  {:<name_width$}  {:>14}  {:>14}\n",
            "Code",
            "Currency",
            "Price",
            "List price",
            name_width = name_width,
        ));
        output.push_str(&format!(
            "{:-<4}  {:-<name_width$}  {:->14}  {:->14}\n",
            "",
            "",
            "",
            "",
            name_width = name_width,
        ));
    } else {
        output.push_str(&format!(
            "{:<4}  {:<name_width$}  {:>14}\n",
            "Code",
            "Currency",
            "Price",
            name_width = name_width,
        ));
        output.push_str(&format!(
            "{:-<4}  {:-<name_width$}  {:->14}\n",
            "",
            "",
            "",
            name_width = name_width,
        ));
    }

    for currency in Currency::ALL {
        if discounted {
            output.push_str(&format!(
                "{:<4}  {:<name_width$}  {:>14}  {:>14}\n",
                currency.code(),
                currency.name(),
                currency.display_price(price),
                currency.display_price(original),
                name_width = name_width,
            ));
        } else {
            output.push_str(&format!(
                "{:<4}  {:<name_width$}  {:>14}\n",
                currency.code(),
                currency.name(),
                currency.display_price(price),
                name_width = name_width,
            ));
        }
    }

    output.push_str(&format!(
        "\nPayment is always collected in INR ({}).\n",
        price
    ));
    output
}
