//! Display currencies
//!
//! A fixed table of currencies the price can be shown in. Conversion is a
//! display transform only; amounts sent anywhere stay in INR.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A currency the price can be displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee (base currency)
    #[default]
    Inr,
    Usd,
    Eur,
    Gbp,
    Aud,
    Cad,
    Sgd,
    Aed,
}

impl Currency {
    /// All currencies in selector order
    pub const ALL: [Currency; 8] = [
        Currency::Inr,
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Aud,
        Currency::Cad,
        Currency::Sgd,
        Currency::Aed,
    ];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Sgd => "SGD",
            Self::Aed => "AED",
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Aud => "A$",
            Self::Cad => "C$",
            Self::Sgd => "S$",
            Self::Aed => "د.إ",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inr => "Indian Rupee",
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
            Self::Gbp => "British Pound",
            Self::Aud => "Australian Dollar",
            Self::Cad => "Canadian Dollar",
            Self::Sgd => "Singapore Dollar",
            Self::Aed => "UAE Dirham",
        }
    }

    /// Approximate units of this currency per rupee
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Inr => Decimal::ONE,
            Self::Usd => dec!(0.012),
            Self::Eur => dec!(0.011),
            Self::Gbp => dec!(0.0095),
            Self::Aud => dec!(0.018),
            Self::Cad => dec!(0.016),
            Self::Sgd => dec!(0.016),
            Self::Aed => dec!(0.044),
        }
    }

    /// Whether this is the base currency payments are made in
    pub fn is_base(&self) -> bool {
        matches!(self, Self::Inr)
    }

    /// Next currency in selector order, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous currency in selector order, wrapping around
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Converted amount, rounded half away from zero to two places
    pub fn convert(&self, amount: Money) -> Decimal {
        (amount.to_decimal() * self.rate())
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Amount as shown to the buyer, without the symbol
    ///
    /// INR uses Indian digit grouping; every other currency shows the
    /// converted value with two decimals.
    pub fn format_amount(&self, amount: Money) -> String {
        if self.is_base() {
            amount.format_grouped()
        } else {
            format!("{:.2}", self.convert(amount))
        }
    }

    /// Amount with the currency symbol prefixed
    pub fn display_price(&self, amount: Money) -> String {
        format!("{}{}", self.symbol(), self.format_amount(amount))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or_else(|| format!("Unknown currency: {}", s.trim()))
    }
}
