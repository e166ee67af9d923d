use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use upi_checkout::cli::{
    handle_config_command, handle_currencies_command, handle_link_command,
    handle_record_command, handle_terms_command, LinkArgs, RecordArgs,
};
use upi_checkout::config::{paths::CheckoutPaths, settings::Settings};
use upi_checkout::error::CheckoutError;
use upi_checkout::logging::{self, LogTarget};
use upi_checkout::services::{HttpFormSink, NoopLauncher, SystemLauncher, UriLauncher};

#[derive(Parser)]
#[command(
    name = "upi-checkout",
    version,
    about = "Terminal checkout for a course paid over UPI",
    long_about = "upi-checkout walks a buyer through entering their details, paying \
                  with any UPI app and recording the transaction ID for manual \
                  verification. Run without a subcommand for the interactive wizard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive wizard
    #[command(alias = "ui")]
    Tui,

    /// Validate buyer details and print the UPI payment link
    Link(LinkArgs),

    /// Record a payment made by scanning the QR code
    Record(RecordArgs),

    /// Show the course price in every supported currency
    Currencies {
        /// Promo code to apply first
        #[arg(long)]
        promo: Option<String>,
    },

    /// Show the terms & conditions
    Terms,

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        match err.downcast_ref::<CheckoutError>() {
            Some(checkout_err) => eprintln!("Error: {}", checkout_err.user_message()),
            None => eprintln!("Error: {:#}", err),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = CheckoutPaths::new()?;
    let command = cli.command.unwrap_or(Commands::Tui);

    let target = match command {
        Commands::Tui => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(target, &paths)?;

    let settings = Settings::load_or_default(&paths)?;

    match command {
        Commands::Tui => {
            let sink = Arc::new(HttpFormSink::from_settings(&settings)?);
            let launcher: Box<dyn UriLauncher> = if settings.open_links {
                Box::new(SystemLauncher)
            } else {
                Box::new(NoopLauncher)
            };
            upi_checkout::tui::run_tui(&settings, sink, launcher)?;
        }
        Commands::Link(args) => {
            handle_link_command(&settings, args, &SystemLauncher)?;
        }
        Commands::Record(args) => {
            let sink = HttpFormSink::from_settings(&settings)?;
            handle_record_command(&settings, args, &sink)?;
        }
        Commands::Currencies { promo } => {
            handle_currencies_command(&settings, promo)?;
        }
        Commands::Terms => {
            handle_terms_command(&settings)?;
        }
        Commands::Config { init } => {
            handle_config_command(&paths, &settings, init)?;
        }
    }

    Ok(())
}
