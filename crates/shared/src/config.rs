//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Billing configuration.
    pub billing: BillingConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Late-fee settings as authored by the school administrator.
    pub late_fee: LateFeeSection,
}

/// Billing configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// Currency challans are issued in.
    pub currency: Currency,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::Pkr,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "feedesk=info".to_string()
}

/// Raw late-fee settings.
///
/// The fee type is kept as a string here; the core crate converts this
/// section into a typed configuration and rejects unknown fee types.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LateFeeSection {
    /// Day of month challans fall due.
    pub due_date_day: u32,
    /// Days after the due date before late fees start.
    pub grace_period_days: u32,
    /// One of `fixed`, `per-day`, `slab-based`.
    pub late_fee_type: String,
    /// Amount charged by the `fixed` rule.
    pub fixed_amount: Decimal,
    /// Amount charged per day by the `per-day` rule.
    pub per_day_amount: Decimal,
    /// Tiers used by the `slab-based` rule.
    pub slabs: Vec<SlabSection>,
    /// Upper bound on any late fee.
    pub max_late_fee_cap: Decimal,
    /// Whether waivers may be requested at all.
    pub allow_waiver: bool,
}

impl Default for LateFeeSection {
    fn default() -> Self {
        Self {
            due_date_day: 10,
            grace_period_days: 0,
            late_fee_type: "fixed".to_string(),
            fixed_amount: Decimal::ZERO,
            per_day_amount: Decimal::ZERO,
            slabs: Vec::new(),
            max_late_fee_cap: Decimal::ZERO,
            allow_waiver: false,
        }
    }
}

/// A single raw slab entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SlabSection {
    /// First day (inclusive) the slab applies to.
    pub from_day: u32,
    /// Last day (inclusive) the slab applies to.
    pub to_day: u32,
    /// Fee charged inside the range.
    pub amount: Decimal,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FEEDESK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
