//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Locale settings.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Tax settings.
    #[serde(default)]
    pub tax: TaxConfig,
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// IANA timezone used to decide "today" for the current financial year.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "Asia/Kolkata".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
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
    "mandap=info".to_string()
}

/// Tax configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxConfig {
    /// Rates seeded into a fresh tax-rate book.
    #[serde(default = "default_tax_rates")]
    pub default_rates: Vec<DefaultTaxRate>,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            default_rates: default_tax_rates(),
        }
    }
}

/// A tax rate seeded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefaultTaxRate {
    /// Display name (e.g., "GST 18%").
    pub name: String,
    /// Whole percent.
    pub percentage: Decimal,
}

fn default_tax_rates() -> Vec<DefaultTaxRate> {
    [5, 12, 18, 28]
        .into_iter()
        .map(|pct| DefaultTaxRate {
            name: format!("GST {pct}%"),
            percentage: Decimal::from(pct),
        })
        .collect()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a source cannot be read or a value has
    /// the wrong type.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MANDAP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
