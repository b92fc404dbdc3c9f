//! Feedesk command line.
//!
//! Usage:
//!   feedesk fee <days-late>
//!   feedesk challan <YYYY-MM> <payment YYYY-MM-DD> <base amount>

use std::str::FromStr;

use anyhow::{Context, bail};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use feedesk_core::challan::{Challan, ChallanAssessor};
use feedesk_core::late_fee::{BillingMonth, LateFeeCalculator, LateFeeConfig, parse_date};
use feedesk_core::settings::{InMemorySettingsStore, LateFeeSettingsStore};
use feedesk_shared::AppConfig;
use feedesk_shared::config::LoggingConfig;
use feedesk_shared::types::{Currency, Money, StudentId};

const USAGE: &str = "usage:
  feedesk fee <days-late>
  feedesk challan <YYYY-MM> <payment YYYY-MM-DD> <base amount>";

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let late_fee = LateFeeConfig::try_from(config.late_fee.clone())
        .context("Late fee settings are invalid")?;
    let store = InMemorySettingsStore::new(late_fee)?;
    let settings = store.current()?;
    info!(
        revision = settings.revision,
        late_fee_type = %settings.config.late_fee_type,
        "Late fee settings loaded"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = run(&args, &settings.config, config.billing.currency)?;

    println!("{output}");
    Ok(())
}

/// Runs one subcommand and returns its JSON output.
fn run(args: &[&str], settings: &LateFeeConfig, currency: Currency) -> anyhow::Result<String> {
    let output = match args {
        ["fee", days] => {
            let days: i64 = days
                .parse()
                .with_context(|| format!("days late must be an integer, got '{days}'"))?;
            let assessment = LateFeeCalculator::calculate(days, settings)?;
            serde_json::to_string_pretty(&assessment)?
        }
        ["challan", month, paid, amount] => {
            let month = BillingMonth::from_str(month)?;
            let payment_date = parse_date(paid)?;
            let amount = Decimal::from_str(amount)
                .with_context(|| format!("invalid amount '{amount}'"))?;

            let challan = Challan::new(StudentId::new(), month, Money::new(amount, currency));
            let statement = ChallanAssessor::assess(&challan, payment_date, settings, None)?;
            serde_json::to_string_pretty(&statement)?
        }
        _ => bail!(USAGE),
    };

    Ok(output)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}
