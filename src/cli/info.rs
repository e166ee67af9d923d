//! Informational commands: `currencies`, `terms`, `config`

use crate::config::paths::CheckoutPaths;
use crate::config::settings::Settings;
use crate::display::{format_currency_table, format_terms};
use crate::error::CheckoutResult;
use crate::models::OrderForm;
use crate::services::promo::PromoOffer;

/// Handle `currencies`
pub fn handle_currencies_command(settings: &Settings, promo: Option<String>) -> CheckoutResult<()> {
    let mut order = OrderForm::new(settings.course.name.clone(), settings.course.price);
    if let Some(code) = promo {
        order.promo_code = code;
        PromoOffer::from_course(&settings.course).apply(&mut order)?;
    }

    print!(
        "{}",
        format_currency_table(&order.course, order.price, order.original_price)
    );
    Ok(())
}

/// Handle `terms`
pub fn handle_terms_command(settings: &Settings) -> CheckoutResult<()> {
    print!("{}", format_terms(settings));
    Ok(())
}

/// Handle `config`
///
/// With `init`, writes the effective settings so they can be edited.
pub fn handle_config_command(
    paths: &CheckoutPaths,
    settings: &Settings,
    init: bool,
) -> CheckoutResult<()> {
    if init {
        if paths.settings_file().exists() {
            println!(
                "Settings file already exists: {}",
                paths.settings_file().display()
            );
        } else {
            settings.save(paths)?;
            println!("Wrote {}", paths.settings_file().display());
        }
    }

    println!("upi-checkout Configuration");
    println!("==========================");
    println!();
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Merchant:         {} ({})", settings.merchant.name, settings.merchant.vpa);
    println!("Course:           {}", settings.course.name);
    println!("Price:            {}", settings.course.price);
    println!(
        "Promo:            {} -> {}",
        settings.course.promo_code, settings.course.discounted_price
    );
    println!("Countdown:        {}s", settings.countdown_secs);
    match settings.request_timeout_secs {
        Some(secs) => println!("Request timeout:  {}s", secs),
        None => println!("Request timeout:  none"),
    }
    println!("Open links:       {}", settings.open_links);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_init_writes_settings_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CheckoutPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.countdown_secs = 10;
        handle_config_command(&paths, &settings, true).unwrap();
        assert!(paths.settings_file().exists());

        handle_config_command(&paths, &Settings::default(), true).unwrap();
        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.countdown_secs, 10);
    }

    #[test]
    fn test_currencies_rejects_bad_promo() {
        assert!(handle_currencies_command(&Settings::default(), Some("nope".into())).is_err());
        assert!(handle_currencies_command(&Settings::default(), None).is_ok());
    }
}
