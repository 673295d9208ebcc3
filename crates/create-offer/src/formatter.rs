//! Standard amount formatter
//!
//! Coin amounts display with at least 2 and at most 4 decimals ("1.00",
//! "3.3333"), fiat amounts with exactly 2 ("999.99"). Parsing accepts either
//! `.` or `,` as decimal separator; output uses the configured one.

use offerform_core::{COIN_DECIMALS, COIN_DISPLAY_DECIMALS, Coin, FIAT_DECIMALS, Fiat};
use offerform_ports::{Formatter, ParseError, ParseResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Minimum decimals shown for a coin amount
const COIN_MIN_DECIMALS: u32 = 2;

/// Locale settings handed to the formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Separator between integer and fractional digits on output
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    /// Currency fiat amounts are expressed in
    #[serde(default = "default_fiat_currency_code")]
    pub fiat_currency_code: String,
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_fiat_currency_code() -> String {
    "USD".to_string()
}

impl LocaleConfig {
    pub fn new(decimal_separator: char, fiat_currency_code: impl Into<String>) -> Self {
        Self {
            decimal_separator,
            fiat_currency_code: fiat_currency_code.into(),
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
            fiat_currency_code: default_fiat_currency_code(),
        }
    }
}

/// Formatter driven by an explicit [`LocaleConfig`]
#[derive(Debug, Clone, Default)]
pub struct StandardFormatter {
    locale: LocaleConfig,
}

impl StandardFormatter {
    pub fn new(locale: LocaleConfig) -> Self {
        Self { locale }
    }

    fn localize(&self, value: Decimal) -> String {
        let plain = value.to_string();
        if self.locale.decimal_separator == '.' {
            plain
        } else {
            plain.replace('.', &self.locale.decimal_separator.to_string())
        }
    }

    /// Parse text with either separator into a decimal
    fn parse_decimal(text: &str) -> ParseResult<Decimal> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut normalized = trimmed.replace(',', ".");
        if normalized.starts_with('.') {
            normalized.insert(0, '0');
        }
        if normalized.ends_with('.') {
            normalized.push('0');
        }

        Decimal::from_str(&normalized).map_err(|_| ParseError::InvalidNumber(trimmed.to_string()))
    }
}

impl Formatter for StandardFormatter {
    fn format_coin(&self, coin: Coin) -> String {
        let mut value = coin
            .inner()
            .round_dp_with_strategy(COIN_DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        if value.scale() < COIN_MIN_DECIMALS {
            value.rescale(COIN_MIN_DECIMALS);
        }
        self.localize(value)
    }

    fn format_fiat(&self, fiat: Fiat) -> String {
        let mut value = fiat.round_to_cents().inner();
        value.rescale(FIAT_DECIMALS);
        self.localize(value)
    }

    fn parse_coin(&self, text: &str) -> ParseResult<Coin> {
        let value = Self::parse_decimal(text)?;
        if value.normalize().scale() > COIN_DECIMALS {
            return Err(ParseError::TooPrecise {
                input: text.trim().to_string(),
                max: COIN_DECIMALS,
            });
        }
        Coin::new(value).map_err(|e| ParseError::OutOfRange(e.to_string()))
    }

    fn parse_fiat(&self, text: &str) -> ParseResult<Fiat> {
        let value = Self::parse_decimal(text)?;
        Fiat::new(value)
            .map(|fiat| fiat.round_to_cents())
            .map_err(|e| ParseError::OutOfRange(e.to_string()))
    }

    fn fiat_currency_code(&self) -> &str {
        &self.locale.fiat_currency_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn us() -> StandardFormatter {
        StandardFormatter::default()
    }

    #[test]
    fn test_format_coin_decimals() {
        let f = us();
        assert_eq!(f.format_coin(Coin::COIN), "1.00");
        assert_eq!(f.format_coin(Coin::from(dec!(1.5))), "1.50");
        assert_eq!(f.format_coin(Coin::from(dec!(3.3333))), "3.3333");
        assert_eq!(f.format_coin(Coin::from(dec!(0.1011))), "0.1011");
        assert_eq!(f.format_coin(Coin::from(dec!(0.12345))), "0.1235");
    }

    #[test]
    fn test_format_fiat_two_decimals() {
        let f = us();
        assert_eq!(f.format_fiat(Fiat::from(dec!(500))), "500.00");
        assert_eq!(f.format_fiat(Fiat::from(dec!(999.99))), "999.99");
        assert_eq!(f.format_fiat(Fiat::from(dec!(0.1))), "0.10");
        assert_eq!(f.format_fiat(Fiat::from(dec!(0.005))), "0.01");
    }

    #[test]
    fn test_comma_locale() {
        let f = StandardFormatter::new(LocaleConfig::new(',', "EUR"));
        assert_eq!(f.format_fiat(Fiat::from(dec!(12.5))), "12,50");
        assert_eq!(f.format_coin(Coin::COIN), "1,00");
        assert_eq!(f.fiat_currency_code(), "EUR");
    }

    #[test]
    fn test_parse_either_separator() {
        let f = us();
        assert_eq!(f.parse_coin("1,1").unwrap().inner(), dec!(1.1));
        assert_eq!(f.parse_coin("1.1").unwrap().inner(), dec!(1.1));
        assert_eq!(f.parse_coin(".1").unwrap().inner(), dec!(0.1));
        assert_eq!(f.parse_fiat(",5").unwrap().inner(), dec!(0.50));
    }

    #[test]
    fn test_parse_errors() {
        let f = us();
        assert_eq!(f.parse_coin("  "), Err(ParseError::Empty));
        assert!(matches!(f.parse_coin("abc"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(
            f.parse_coin("0.123456789"),
            Err(ParseError::TooPrecise { max: 8, .. })
        ));
        assert!(matches!(f.parse_coin("-1"), Err(ParseError::OutOfRange(_))));
        assert!(matches!(f.parse_fiat("-1"), Err(ParseError::OutOfRange(_))));
    }

    #[test]
    fn test_parse_fiat_rounds_to_cents() {
        let f = us();
        assert_eq!(f.parse_fiat("1000").unwrap().inner(), dec!(1000));
        assert_eq!(f.parse_fiat("0.125").unwrap().inner(), dec!(0.13));
    }
}
