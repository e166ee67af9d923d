//! Tracing setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so while it runs
//! logs go to a file in the config directory instead. `RUST_LOG` overrides
//! the default level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::paths::CheckoutPaths;
use crate::error::{CheckoutError, CheckoutResult};

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber
pub fn init(target: LogTarget, paths: &CheckoutPaths) -> CheckoutResult<()> {
    let registry = tracing_subscriber::registry();

    let result = match target {
        LogTarget::Stderr => registry
            .with(env_filter("warn"))
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogTarget::File => {
            paths.ensure_directories()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())
                .map_err(|e| CheckoutError::Io(format!("Failed to open log file: {}", e)))?;

            registry
                .with(env_filter("info"))
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init()
        }
    };

    result.map_err(|e| CheckoutError::Config(format!("Failed to initialise logging: {}", e)))
}
