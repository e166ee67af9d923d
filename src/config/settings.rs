//! Deployment settings for upi-checkout
//!
//! Merchant identity, course pricing, the promo code and the form-collection
//! endpoint are constants of a deployment. They live in `config.json` so one
//! binary can serve several courses; every field has a default so a partial
//! file still loads.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::CheckoutPaths;
use crate::error::CheckoutError;
use crate::models::Money;

/// Payee details written into UPI links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantSettings {
    /// UPI virtual payment address
    #[serde(default = "default_vpa")]
    pub vpa: String,
    /// Payee name shown by the UPI app
    #[serde(default = "default_merchant_name")]
    pub name: String,
}

impl Default for MerchantSettings {
    fn default() -> Self {
        Self {
            vpa: default_vpa(),
            name: default_merchant_name(),
        }
    }
}

/// The course on sale and its single promo code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSettings {
    #[serde(default = "default_course_name")]
    pub name: String,
    /// List price in paise
    #[serde(default = "default_price")]
    pub price: Money,
    #[serde(default = "default_promo_code")]
    pub promo_code: String,
    /// Price after the promo code, in paise
    #[serde(default = "default_discounted_price")]
    pub discounted_price: Money,
}

impl Default for CourseSettings {
    fn default() -> Self {
        Self {
            name: default_course_name(),
            price: default_price(),
            promo_code: default_promo_code(),
            discounted_price: default_discounted_price(),
        }
    }
}

/// Google Forms `formResponse` endpoint and the entry IDs of each question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEndpoint {
    #[serde(default = "default_form_url")]
    pub url: String,
    #[serde(default = "default_name_entry")]
    pub name_entry: String,
    #[serde(default = "default_email_entry")]
    pub email_entry: String,
    #[serde(default = "default_phone_entry")]
    pub phone_entry: String,
    #[serde(default = "default_course_entry")]
    pub course_entry: String,
    #[serde(default = "default_txn_entry")]
    pub txn_id_entry: String,
}

impl Default for FormEndpoint {
    fn default() -> Self {
        Self {
            url: default_form_url(),
            name_entry: default_name_entry(),
            email_entry: default_email_entry(),
            phone_entry: default_phone_entry(),
            course_entry: default_course_entry(),
            txn_id_entry: default_txn_entry(),
        }
    }
}

/// Settings for one checkout deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Brand shown in the header and footer
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Support line shown in the footer and the terms
    #[serde(default = "default_support_contact")]
    pub support_contact: String,

    #[serde(default)]
    pub merchant: MerchantSettings,

    #[serde(default)]
    pub course: CourseSettings,

    #[serde(default)]
    pub form: FormEndpoint,

    /// Seconds to wait after opening the UPI app before "I Have Paid" appears
    #[serde(default = "default_countdown_secs")]
    pub countdown_secs: u32,

    /// Timeout for recording a payment; `null` waits forever
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: Option<u64>,

    /// Hand UPI links to the operating system when paying
    #[serde(default = "default_open_links")]
    pub open_links: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_brand() -> String {
    "Zero Defend Security".to_string()
}

fn default_support_contact() -> String {
    "+91 80759 24249 (Mr. Kiran Singh)".to_string()
}

fn default_vpa() -> String {
    "kiransinghpay@axl".to_string()
}

fn default_merchant_name() -> String {
    "Kiran Singh".to_string()
}

fn default_course_name() -> String {
    "Android Security & Hacking".to_string()
}

fn default_price() -> Money {
    Money::from_rupees(45000)
}

fn default_promo_code() -> String {
    "AndroidX2025".to_string()
}

fn default_discounted_price() -> Money {
    Money::from_rupees(8999)
}

fn default_form_url() -> String {
    "https://docs.google.com/forms/d/e/1FAIpQLSdT90vozennnozOGeGeJ0TgfKNnRnnvwBVfiEQTzKpPn-f87w/formResponse".to_string()
}

fn default_name_entry() -> String {
    "entry.913204754".to_string()
}

fn default_email_entry() -> String {
    "entry.1327490220".to_string()
}

fn default_phone_entry() -> String {
    "entry.1829641072".to_string()
}

fn default_course_entry() -> String {
    "entry.1953753319".to_string()
}

fn default_txn_entry() -> String {
    "entry.1832110819".to_string()
}

fn default_countdown_secs() -> u32 {
    20
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(30)
}

fn default_open_links() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            brand: default_brand(),
            support_contact: default_support_contact(),
            merchant: MerchantSettings::default(),
            course: CourseSettings::default(),
            form: FormEndpoint::default(),
            countdown_secs: default_countdown_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            open_links: default_open_links(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &CheckoutPaths) -> Result<Self, CheckoutError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CheckoutError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            CheckoutError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CheckoutPaths) -> Result<(), CheckoutError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CheckoutError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CheckoutError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject deployments that could never produce a usable payment
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if !self.merchant.vpa.contains('@') {
            return Err(CheckoutError::Config(format!(
                "merchant.vpa '{}' is not a UPI address",
                self.merchant.vpa
            )));
        }
        if self.course.name.trim().is_empty() {
            return Err(CheckoutError::Config("course.name cannot be empty".into()));
        }
        if self.course.price.is_negative() || self.course.price.is_zero() {
            return Err(CheckoutError::Config("course.price must be positive".into()));
        }
        if self.course.discounted_price > self.course.price
            || self.course.discounted_price.is_negative()
        {
            return Err(CheckoutError::Config(
                "course.discounted_price must be between 0 and course.price".into(),
            ));
        }
        if !(self.form.url.starts_with("https://") || self.form.url.starts_with("http://")) {
            return Err(CheckoutError::Config(format!(
                "form.url '{}' must be an http(s) URL",
                self.form.url
            )));
        }
        Ok(())
    }

    /// Timeout applied to the form submission request
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.countdown_secs, 20);
        assert_eq!(settings.course.price, Money::from_rupees(45000));
        assert_eq!(settings.course.discounted_price, Money::from_rupees(8999));
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(30)));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CheckoutPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CheckoutPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.countdown_secs = 10;
        settings.request_timeout_secs = None;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.countdown_secs, 10);
        assert_eq!(loaded.request_timeout(), None);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CheckoutPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{ "countdown_secs": 10, "course": { "name": "Web Hacking" } }"#,
        )
        .unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.countdown_secs, 10);
        assert_eq!(loaded.course.name, "Web Hacking");
        assert_eq!(loaded.course.promo_code, "AndroidX2025");
        assert_eq!(loaded.merchant.vpa, "kiransinghpay@axl");
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = Settings::default();
        settings.course.discounted_price = Money::from_rupees(50000);
        assert!(matches!(settings.validate(), Err(CheckoutError::Config(_))));

        let mut settings = Settings::default();
        settings.merchant.vpa = "not-a-vpa".into();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.form.url = "ftp://example.com".into();
        assert!(settings.validate().is_err());
    }
}
