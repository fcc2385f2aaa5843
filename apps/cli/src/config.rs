//! # Shell Configuration
//!
//! Settings for one `brew` session, read from the environment.
//!
//! ## Environment Variables
//! | Variable               | Default     | Meaning                          |
//! |------------------------|-------------|----------------------------------|
//! | `BREW_CUSTOMER_NAME`   | `John Doe`  | Name on the profile screen       |
//! | `BREW_CUSTOMER_POINTS` | `1`         | Loyalty points                   |
//! | `BREW_STORE_ID`        | first store | Store selected at startup        |
//! | `BREW_CURRENCY_SYMBOL` | `$`         | Symbol used when printing money  |

use brew_core::{Customer, Money};
use serde::{Deserialize, Serialize};
use std::env;

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopConfig {
    pub customer_name: String,
    pub customer_points: u32,
    /// Store to select at startup; `None` keeps the first store.
    pub store_id: Option<String>,
    pub currency_symbol: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        let customer = Customer::default();
        ShopConfig {
            customer_name: customer.name,
            customer_points: customer.points,
            store_id: None,
            currency_symbol: "$".to_string(),
        }
    }
}

impl ShopConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = ShopConfig::default();

        let customer_points = match get("BREW_CUSTOMER_POINTS") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BREW_CUSTOMER_POINTS".to_string()))?,
            None => defaults.customer_points,
        };

        Ok(ShopConfig {
            customer_name: get("BREW_CUSTOMER_NAME").unwrap_or(defaults.customer_name),
            customer_points,
            store_id: get("BREW_STORE_ID"),
            currency_symbol: get("BREW_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
        })
    }

    /// The customer described by this configuration.
    pub fn customer(&self) -> Customer {
        Customer {
            name: self.customer_name.clone(),
            points: self.customer_points,
        }
    }

    /// Formats money with the configured symbol, e.g. `$21.50`.
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
