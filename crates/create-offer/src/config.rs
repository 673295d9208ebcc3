//! Configuration for the create-offer form
//!
//! Everything the form used to read from process-wide settings (locale, fiat
//! currency) is carried here and handed to the form on construction. Loadable
//! from JSON:
//!
//! ```json
//! {
//!   "locale": { "decimal_separator": ",", "fiat_currency_code": "EUR" },
//!   "limits": { "max_fiat": "50000" },
//!   "fees": { "offer_fee": "0.001", "network_fee": "0.0001" },
//!   "collateral": 100,
//!   "direction": "Buy"
//! }
//! ```

use crate::formatter::LocaleConfig;
use offerform_core::{Coin, CollateralRate, MAX_MONEY, OfferDirection};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Root configuration for the create-offer form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferFormConfig {
    /// Locale used to format amounts
    #[serde(default)]
    pub locale: LocaleConfig,

    /// Bounds applied to user input
    #[serde(default)]
    pub limits: AmountLimits,

    /// Fees added to the total to pay
    #[serde(default)]
    pub fees: FeeConfig,

    /// Collateral rate the form opens with
    #[serde(default = "default_collateral")]
    pub collateral: CollateralRate,

    /// Offer direction the form opens with
    #[serde(default)]
    pub direction: OfferDirection,
}

fn default_collateral() -> CollateralRate {
    CollateralRate::from_per_mille(100)
}

impl Default for OfferFormConfig {
    fn default() -> Self {
        Self {
            locale: LocaleConfig::default(),
            limits: AmountLimits::default(),
            fees: FeeConfig::default(),
            collateral: default_collateral(),
            direction: OfferDirection::default(),
        }
    }
}

impl OfferFormConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the bounds are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.min_fiat <= Decimal::ZERO {
            return Err(ConfigError::Invalid(format!(
                "min_fiat must be positive, got {}",
                self.limits.min_fiat
            )));
        }
        if let Some(max_fiat) = self.limits.max_fiat {
            if max_fiat < self.limits.min_fiat {
                return Err(ConfigError::Invalid(format!(
                    "max_fiat {} is below min_fiat {}",
                    max_fiat, self.limits.min_fiat
                )));
            }
        }
        if self.limits.max_coin <= Decimal::ZERO || self.limits.max_coin > MAX_MONEY {
            return Err(ConfigError::Invalid(format!(
                "max_coin must be in (0, {}], got {}",
                MAX_MONEY, self.limits.max_coin
            )));
        }
        if self.fees.offer_fee.inner() < Decimal::ZERO || self.fees.network_fee.inner() < Decimal::ZERO
        {
            return Err(ConfigError::Invalid("fees cannot be negative".to_string()));
        }
        if self.locale.decimal_separator.is_ascii_digit() || self.locale.decimal_separator == '-' {
            return Err(ConfigError::Invalid(format!(
                "'{}' cannot be used as decimal separator",
                self.locale.decimal_separator
            )));
        }
        Ok(())
    }
}

/// Bounds for coin and fiat input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountLimits {
    /// Largest coin amount accepted
    #[serde(default = "default_max_coin")]
    pub max_coin: Decimal,
    /// Smallest fiat amount accepted
    #[serde(default = "default_min_fiat")]
    pub min_fiat: Decimal,
    /// Largest fiat amount accepted (None = unbounded)
    #[serde(default = "default_max_fiat")]
    pub max_fiat: Option<Decimal>,
}

fn default_max_coin() -> Decimal {
    MAX_MONEY
}

fn default_min_fiat() -> Decimal {
    dec!(0.01)
}

fn default_max_fiat() -> Option<Decimal> {
    Some(dec!(1000000))
}

impl Default for AmountLimits {
    fn default() -> Self {
        Self {
            max_coin: default_max_coin(),
            min_fiat: default_min_fiat(),
            max_fiat: default_max_fiat(),
        }
    }
}

/// Fees paid by the offerer on top of the collateral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Fee for publishing the offer
    #[serde(default = "default_offer_fee")]
    pub offer_fee: Coin,
    /// Mining fee of the funding transaction
    #[serde(default = "default_network_fee")]
    pub network_fee: Coin,
}

fn default_offer_fee() -> Coin {
    Coin::from(dec!(0.001))
}

fn default_network_fee() -> Coin {
    Coin::from(dec!(0.0001))
}

impl FeeConfig {
    pub fn total(&self) -> Coin {
        self.offer_fee + self.network_fee
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            offer_fee: default_offer_fee(),
            network_fee: default_network_fee(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OfferFormConfig::default();
        assert_eq!(config.limits.max_coin, dec!(21000000));
        assert_eq!(config.limits.max_fiat, Some(dec!(1000000)));
        assert_eq!(config.fees.total().inner(), dec!(0.0011));
        assert_eq!(config.collateral.per_mille(), 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_empty_object_uses_defaults() {
        let config = OfferFormConfig::from_json("{}").unwrap();
        assert_eq!(config.collateral, CollateralRate::from_per_mille(100));
        assert_eq!(config.direction, OfferDirection::Sell);
        assert_eq!(config.locale, LocaleConfig::default());
    }

    #[test]
    fn test_from_json_overrides() {
        let json = r#"{
            "locale": { "decimal_separator": ",", "fiat_currency_code": "EUR" },
            "limits": { "max_fiat": null },
            "fees": { "offer_fee": "0.002" },
            "collateral": 50,
            "direction": "Buy"
        }"#;
        let config = OfferFormConfig::from_json(json).unwrap();

        assert_eq!(config.locale.decimal_separator, ',');
        assert_eq!(config.locale.fiat_currency_code, "EUR");
        assert_eq!(config.limits.max_fiat, None);
        assert_eq!(config.limits.min_fiat, dec!(0.01));
        assert_eq!(config.fees.offer_fee.inner(), dec!(0.002));
        assert_eq!(config.fees.network_fee.inner(), dec!(0.0001));
        assert_eq!(config.collateral.per_mille(), 50);
        assert_eq!(config.direction, OfferDirection::Buy);
    }

    #[test]
    fn test_from_json_rejects_bad_bounds() {
        let err = OfferFormConfig::from_json(r#"{ "limits": { "min_fiat": "0" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err =
            OfferFormConfig::from_json(r#"{ "limits": { "max_coin": "22000000" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = OfferFormConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = OfferFormConfig::from_file("/nonexistent/offerform.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
