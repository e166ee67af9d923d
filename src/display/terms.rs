//! Terms & conditions text

use crate::config::settings::Settings;

/// One numbered section of the terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsSection {
    pub title: &'static str,
    pub body: String,
}

/// The terms for a deployment, with its brand and support line filled in
pub fn terms_sections(settings: &Settings) -> Vec<TermsSection> {
    let brand = &settings.brand;
    vec![
        TermsSection {
            title: "Payment Terms",
            body: format!(
                "All payments made through this gateway are for educational courses offered by {}. \
                 By proceeding with payment, you agree to the course terms and payment policies.",
                brand
            ),
        },
        TermsSection {
            title: "Refund Policy",
            body: format!(
                "All sales are final. Refunds are provided only in exceptional circumstances and are \
                 subject to approval by the {} team.",
                brand
            ),
        },
        TermsSection {
            title: "Privacy Policy",
            body: "Your personal information and payment details are secured with industry-standard \
                   encryption. We do not store your payment method details on our servers."
                .to_string(),
        },
        TermsSection {
            title: "Course Access",
            body: "Access to course content will be provided within 24 hours of payment verification. \
                   You will receive credentials to the registered email address."
                .to_string(),
        },
        TermsSection {
            title: "Support",
            body: format!(
                "For payment-related issues, contact our support team at {}. \
                 For course-related queries, use the support portal provided after enrollment.",
                settings.support_contact
            ),
        },
        TermsSection {
            title: "Intellectual Property",
            body: "All course materials are protected by copyright and are for personal use only. \
                   Redistribution, sharing, or reselling of course materials is strictly prohibited."
                .to_string(),
        },
    ]
}

/// Terms as numbered plain-text paragraphs
pub fn format_terms(settings: &Settings) -> String {
    let mut output = format!("Terms & Conditions\n{} Payment Gateway\n", settings.brand);
    for (i, section) in terms_sections(settings).iter().enumerate() {
        output.push_str(&format!("\n{}. {}\n{}\n", i + 1, section.title, section.body));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_sections() {
        let sections = terms_sections(&Settings::default());
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[1].title, "Refund Policy");
        assert!(sections[4].body.contains("+91 80759 24249 (Mr. Kiran Singh)"));
    }

    #[test]
    fn test_brand_is_substituted() {
        let mut settings = Settings::default();
        settings.brand = "Acme Academy".into();
        let text = format_terms(&settings);
        assert!(text.contains("Acme Academy Payment Gateway"));
        assert!(text.contains("offered by Acme Academy."));
        assert!(text.contains("6. Intellectual Property"));
    }
}
