//! # Store Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     GREENLIFE_STORE_NAME="GreenLife Centro"                            │
//! │     GREENLIFE_DUPLICATE_ADD=increment                                  │
//! │     GREENLIFE_QUEUE_CAPACITY=128                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $GREENLIFE_CONFIG, or                                              │
//! │     ~/.config/greenlife-storefront/storefront.toml (Linux)             │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "GreenLife"
//! currency_symbol = "$"
//! currency_decimals = 2
//! duplicate_add = "aggregate_only"  # aggregate_only | increment
//! queue_capacity = 64
//! log_filter = "info,greenlife=debug"
//! ```
//!
//! Configuration is read-only once the session starts.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use greenlife_core::DuplicateAddPolicy;

use crate::error::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "GREENLIFE_CONFIG";

/// Default tracing filter when neither `RUST_LOG` nor the file sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,greenlife=debug";

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Shown in the console banner.
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Decimal places shown for amounts. Display only: amounts are always
    /// held in cents and rounded to this precision when formatted.
    pub currency_decimals: u8,

    /// What adding a product already in the cart does.
    pub duplicate_add: DuplicateAddPolicy,

    /// Bound of the dispatcher's command queue.
    pub queue_capacity: usize,

    /// tracing-subscriber filter directive.
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "GreenLife".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            duplicate_add: DuplicateAddPolicy::AggregateOnly,
            queue_capacity: 64,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`storefront.toml`), skipped when absent
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(&path).map_err(|source| {
                    ConfigError::Read {
                        path: path.clone(),
                        source,
                    }
                })?;
                Self::from_toml(&contents)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::Invalid(
                "queue_capacity must be greater than 0".into(),
            ));
        }

        if self.currency_decimals > 4 {
            return Err(ConfigError::Invalid(format!(
                "currency_decimals must be at most 4, got {}",
                self.currency_decimals
            )));
        }

        if self.store_name.trim().is_empty() {
            return Err(ConfigError::Invalid("store_name must not be empty".into()));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("GREENLIFE_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(policy) = lookup("GREENLIFE_DUPLICATE_ADD") {
            match policy.parse() {
                Ok(parsed) => {
                    debug!(policy = %policy, "Overriding duplicate add policy from environment");
                    self.duplicate_add = parsed;
                }
                Err(e) => warn!(policy = %policy, "Ignoring GREENLIFE_DUPLICATE_ADD: {}", e),
            }
        }

        if let Some(capacity) = lookup("GREENLIFE_QUEUE_CAPACITY") {
            match capacity.parse::<usize>() {
                Ok(c) => self.queue_capacity = c,
                Err(_) => warn!(capacity = %capacity, "Ignoring non-numeric GREENLIFE_QUEUE_CAPACITY"),
            }
        }
    }

    /// Returns the config file path: `$GREENLIFE_CONFIG` or the platform
    /// config directory.
    fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        directories::ProjectDirs::from("com", "greenlife", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Formats a cent amount as a currency string with `currency_decimals`
    /// places, rounding half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use greenlife_storefront::state::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let decimals = u32::from(self.currency_decimals);
        let minor = to_minor_units(cents, decimals);
        let divisor = 10_i128.pow(decimals);
        let whole = (minor / divisor).abs();
        let frac = (minor % divisor).abs();
        let sign = if minor < 0 { "-" } else { "" };

        if decimals > 0 {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency_symbol,
                whole,
                frac,
                width = decimals as usize
            )
        } else {
            format!("{}{}{}", sign, self.currency_symbol, whole)
        }
    }
}

/// Converts cents into units of `10^-decimals`.
fn to_minor_units(cents: i64, decimals: u32) -> i128 {
    let cents = i128::from(cents);

    if decimals >= 2 {
        return cents * 10_i128.pow(decimals - 2);
    }

    let step = 10_i128.pow(2 - decimals);
    let half = step / 2;
    if cents >= 0 {
        (cents + half) / step
    } else {
        (cents - half) / step
    }
}
