//! Path management for upi-checkout
//!
//! ## Path Resolution Order
//!
//! 1. `UPI_CHECKOUT_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/upi-checkout` or `~/.config/upi-checkout`
//! 3. Windows: `%APPDATA%\upi-checkout`

use std::path::PathBuf;

use crate::error::CheckoutError;

/// Environment variable overriding the config directory
pub const DIR_ENV_VAR: &str = "UPI_CHECKOUT_DIR";

/// Manages all paths used by upi-checkout
#[derive(Debug, Clone)]
pub struct CheckoutPaths {
    base_dir: PathBuf,
}

impl CheckoutPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home/app-data directory can be determined.
    pub fn new() -> Result<Self, CheckoutError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the log file written while the TUI is running
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("upi-checkout.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CheckoutError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            CheckoutError::Io(format!("Failed to create config directory: {}", e))
        })
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CheckoutError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                CheckoutError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("upi-checkout"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CheckoutError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CheckoutError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("upi-checkout"))
}
