//! Country calling codes offered next to the phone field

use serde::{Deserialize, Serialize};

/// A selectable calling code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    pub code: &'static str,
    pub country: &'static str,
}

/// Calling codes in selector order; the first entry is the default
pub const COUNTRY_CODES: [CountryCode; 20] = [
    CountryCode { code: "+91", country: "India" },
    CountryCode { code: "+1", country: "USA" },
    CountryCode { code: "+44", country: "UK" },
    CountryCode { code: "+61", country: "Australia" },
    CountryCode { code: "+86", country: "China" },
    CountryCode { code: "+49", country: "Germany" },
    CountryCode { code: "+33", country: "France" },
    CountryCode { code: "+81", country: "Japan" },
    CountryCode { code: "+7", country: "Russia" },
    CountryCode { code: "+971", country: "UAE" },
    CountryCode { code: "+65", country: "Singapore" },
    CountryCode { code: "+60", country: "Malaysia" },
    CountryCode { code: "+92", country: "Pakistan" },
    CountryCode { code: "+94", country: "Sri Lanka" },
    CountryCode { code: "+977", country: "Nepal" },
    CountryCode { code: "+880", country: "Bangladesh" },
    CountryCode { code: "+63", country: "Philippines" },
    CountryCode { code: "+66", country: "Thailand" },
    CountryCode { code: "+39", country: "Italy" },
    CountryCode { code: "+55", country: "Brazil" },
];

/// Index into [`COUNTRY_CODES`], serialized as the calling code string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountrySelection(usize);

impl CountrySelection {
    /// Select by calling code (`"+44"`)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        COUNTRY_CODES
            .iter()
            .position(|c| c.code == code)
            .map(Self)
    }

    /// The selected entry
    pub fn entry(&self) -> CountryCode {
        COUNTRY_CODES[self.0]
    }

    /// The calling code, e.g. `+91`
    pub fn code(&self) -> &'static str {
        self.entry().code
    }

    pub fn next(&self) -> Self {
        Self((self.0 + 1) % COUNTRY_CODES.len())
    }

    pub fn prev(&self) -> Self {
        Self((self.0 + COUNTRY_CODES.len() - 1) % COUNTRY_CODES.len())
    }
}

impl TryFrom<String> for CountrySelection {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value).ok_or_else(|| format!("Unknown calling code: {}", value))
    }
}

impl From<CountrySelection> for String {
    fn from(value: CountrySelection) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_india() {
        let sel = CountrySelection::default();
        assert_eq!(sel.code(), "+91");
        assert_eq!(sel.entry().country, "India");
    }

    #[test]
    fn test_lookup_and_cycle() {
        let uk = CountrySelection::from_code("+44").unwrap();
        assert_eq!(uk.entry().country, "UK");
        assert_eq!(uk.prev().code(), "+1");
        assert_eq!(CountrySelection::from_code("+55").unwrap().next().code(), "+91");
        assert!(CountrySelection::from_code("+999").is_none());
    }

    #[test]
    fn test_serde_uses_code() {
        let sel = CountrySelection::from_code("+971").unwrap();
        let json = serde_json::to_string(&sel).unwrap();
        assert_eq!(json, "\"+971\"");
        let back: CountrySelection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sel);
    }
}
