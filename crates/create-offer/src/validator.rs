//! Input validation for coin and fiat amount fields
//!
//! Validation never fails with an error; it answers with a [`Validation`]
//! carrying the reason the text was rejected, so the form can show a hint on
//! the offending field.
//!
//! Accepted: digits with at most one decimal separator, which may be `.` or
//! `,`. No thousands grouping, so `1,000.1` is rejected as ambiguous.

use crate::config::AmountLimits;
use log::debug;
use offerform_core::{COIN_DECIMALS, FIAT_DECIMALS};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Which kind of amount a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountDomain {
    /// Cryptocurrency amount
    Crypto,
    /// Fiat price or volume
    Fiat,
}

impl AmountDomain {
    /// Maximum fractional digits accepted
    pub fn scale(&self) -> u32 {
        match self {
            AmountDomain::Crypto => COIN_DECIMALS,
            AmountDomain::Fiat => FIAT_DECIMALS,
        }
    }
}

/// Why a field's text was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[error("Please enter an amount")]
    Empty,

    #[error("Negative amounts are not allowed")]
    Negative,

    #[error("Not a valid number")]
    MalformedNumber,

    #[error("Too many decimal places")]
    TooManyDecimals,

    #[error("Amount must be greater than zero")]
    NonPositive,

    #[error("Amount is out of the allowed range")]
    OutOfRange,
}

/// Outcome of validating a field's text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub reason: Option<ErrorKind>,
}

impl Validation {
    pub const VALID: Validation = Validation {
        is_valid: true,
        reason: None,
    };

    pub fn invalid(reason: ErrorKind) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason),
        }
    }
}

impl From<Result<Decimal, ErrorKind>> for Validation {
    fn from(result: Result<Decimal, ErrorKind>) -> Self {
        match result {
            Ok(_) => Validation::VALID,
            Err(kind) => Validation::invalid(kind),
        }
    }
}

/// Validates raw field text against format rules and configured bounds
#[derive(Debug, Clone, Default)]
pub struct NumericValidator {
    limits: AmountLimits,
}

impl NumericValidator {
    pub fn new(limits: AmountLimits) -> Self {
        Self { limits }
    }

    /// Validate text for the given domain
    pub fn validate(&self, text: Option<&str>, domain: AmountDomain) -> Validation {
        self.check(text, domain).into()
    }

    pub fn validate_coin(&self, text: Option<&str>) -> Validation {
        self.validate(text, AmountDomain::Crypto)
    }

    pub fn validate_fiat(&self, text: Option<&str>) -> Validation {
        self.validate(text, AmountDomain::Fiat)
    }

    /// Validate and return the value the text denotes
    pub fn check(&self, text: Option<&str>, domain: AmountDomain) -> Result<Decimal, ErrorKind> {
        let result = self.check_inner(text, domain);
        if let Err(kind) = result {
            debug!("Rejected {:?} input {:?}: {}", domain, text, kind);
        }
        result
    }

    fn check_inner(&self, text: Option<&str>, domain: AmountDomain) -> Result<Decimal, ErrorKind> {
        let text = text.map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(ErrorKind::Empty);
        }
        if text.starts_with('-') {
            return Err(ErrorKind::Negative);
        }

        let (int_part, frac_part) = split_number(text)?;
        if frac_part.len() > domain.scale() as usize {
            return Err(ErrorKind::TooManyDecimals);
        }

        let int_part = if int_part.is_empty() { "0" } else { int_part };
        let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
        // Only digits remain, so a failed parse means the value overflowed
        let value = Decimal::from_str(&format!("{}.{}", int_part, frac_part))
            .map_err(|_| ErrorKind::OutOfRange)?;

        self.check_bounds(value, domain)?;
        Ok(value)
    }

    /// Sign and configured bounds of a value, whether typed or derived
    pub(crate) fn check_bounds(&self, value: Decimal, domain: AmountDomain) -> Result<(), ErrorKind> {
        if value <= Decimal::ZERO {
            return Err(ErrorKind::NonPositive);
        }

        let in_range = match domain {
            AmountDomain::Crypto => value <= self.limits.max_coin,
            AmountDomain::Fiat => {
                value >= self.limits.min_fiat && self.limits.max_fiat.is_none_or(|max| value <= max)
            }
        };
        if !in_range {
            return Err(ErrorKind::OutOfRange);
        }
        Ok(())
    }
}

/// Split into integer and fractional digits around the single separator
fn split_number(text: &str) -> Result<(&str, &str), ErrorKind> {
    let mut separator = None;
    for (idx, c) in text.char_indices() {
        match c {
            '0'..='9' => {}
            '.' | ',' => {
                if separator.is_some() {
                    return Err(ErrorKind::MalformedNumber);
                }
                separator = Some(idx);
            }
            _ => return Err(ErrorKind::MalformedNumber),
        }
    }

    match separator {
        None => Ok((text, "")),
        Some(idx) => {
            let (int_part, frac_part) = (&text[..idx], &text[idx + 1..]);
            if int_part.is_empty() && frac_part.is_empty() {
                return Err(ErrorKind::MalformedNumber);
            }
            Ok((int_part, frac_part))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn validator() -> NumericValidator {
        NumericValidator::default()
    }

    fn coin_reason(text: &str) -> Option<ErrorKind> {
        validator().validate_coin(Some(text)).reason
    }

    fn fiat_reason(text: &str) -> Option<ErrorKind> {
        validator().validate_fiat(Some(text)).reason
    }

    #[test]
    fn test_valid_coin_input() {
        let v = validator();
        for text in ["1", "1,1", "1.1", ",1", ".1", "0.12345678", "0.00000001", "21000000"] {
            assert!(v.validate_coin(Some(text)).is_valid, "{text} should be valid");
        }
    }

    #[test]
    fn test_invalid_coin_input() {
        let v = validator();
        assert_eq!(v.validate_coin(None).reason, Some(ErrorKind::Empty));
        assert_eq!(coin_reason(""), Some(ErrorKind::Empty));
        assert_eq!(coin_reason("0"), Some(ErrorKind::NonPositive));
        assert_eq!(coin_reason("0.0"), Some(ErrorKind::NonPositive));
        assert_eq!(coin_reason("0,1,1"), Some(ErrorKind::MalformedNumber));
        assert_eq!(coin_reason("0.1.1"), Some(ErrorKind::MalformedNumber));
        assert_eq!(coin_reason("1,000.1"), Some(ErrorKind::MalformedNumber));
        assert_eq!(coin_reason("1.000,1"), Some(ErrorKind::MalformedNumber));
        assert_eq!(coin_reason("0.123456789"), Some(ErrorKind::TooManyDecimals));
        assert_eq!(coin_reason("-1"), Some(ErrorKind::Negative));
        assert_eq!(coin_reason("2100000000000001"), Some(ErrorKind::OutOfRange));
    }

    #[test]
    fn test_max_money_boundary() {
        assert_eq!(coin_reason("21000000"), None);
        assert_eq!(coin_reason("21000000.00000000"), None);
        assert_eq!(coin_reason("21000000.00000001"), Some(ErrorKind::OutOfRange));
    }

    #[test]
    fn test_valid_fiat_input() {
        let v = validator();
        for text in ["1", "1,1", "1.1", ",1", ".1", "0.01", "1000000.00"] {
            assert!(v.validate_fiat(Some(text)).is_valid, "{text} should be valid");
        }
    }

    #[test]
    fn test_invalid_fiat_input() {
        let v = validator();
        assert_eq!(v.validate_fiat(None).reason, Some(ErrorKind::Empty));
        assert_eq!(fiat_reason(""), Some(ErrorKind::Empty));
        assert_eq!(fiat_reason("0"), Some(ErrorKind::NonPositive));
        assert_eq!(fiat_reason("-1"), Some(ErrorKind::Negative));
        assert_eq!(fiat_reason("0.0"), Some(ErrorKind::NonPositive));
        assert_eq!(fiat_reason("0,1,1"), Some(ErrorKind::MalformedNumber));
        assert_eq!(fiat_reason("0.1.1"), Some(ErrorKind::MalformedNumber));
        assert_eq!(fiat_reason("1,000.1"), Some(ErrorKind::MalformedNumber));
        assert_eq!(fiat_reason("1.000,1"), Some(ErrorKind::MalformedNumber));
        assert_eq!(fiat_reason("0.009"), Some(ErrorKind::TooManyDecimals));
        assert_eq!(fiat_reason("1000000.01"), Some(ErrorKind::OutOfRange));
    }

    #[test]
    fn test_malformed_characters() {
        assert_eq!(coin_reason("1e5"), Some(ErrorKind::MalformedNumber));
        assert_eq!(coin_reason("+1"), Some(ErrorKind::MalformedNumber));
        assert_eq!(coin_reason("1 000"), Some(ErrorKind::MalformedNumber));
        assert_eq!(coin_reason("."), Some(ErrorKind::MalformedNumber));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(coin_reason(" 1.5 "), None);
    }

    #[test]
    fn test_fiat_minimum_is_configurable() {
        let v = NumericValidator::new(AmountLimits {
            min_fiat: dec!(5),
            max_fiat: None,
            ..Default::default()
        });
        assert_eq!(v.validate_fiat(Some("4.99")).reason, Some(ErrorKind::OutOfRange));
        assert!(v.validate_fiat(Some("5")).is_valid);
        assert!(v.validate_fiat(Some("99999999")).is_valid);
    }

    #[test]
    fn test_check_returns_value() {
        let v = validator();
        assert_eq!(v.check(Some(",5"), AmountDomain::Fiat), Ok(dec!(0.5)));
        assert_eq!(v.check(Some("3."), AmountDomain::Crypto), Ok(dec!(3)));
    }

    #[test]
    fn test_overflowing_digits_out_of_range() {
        let v = NumericValidator::new(AmountLimits {
            max_fiat: None,
            ..Default::default()
        });
        let huge = "9".repeat(40);
        assert_eq!(v.validate_fiat(Some(&huge)).reason, Some(ErrorKind::OutOfRange));
    }

    #[test]
    fn test_bounds_of_derived_values() {
        let v = validator();
        assert_eq!(v.check_bounds(dec!(0), AmountDomain::Crypto), Err(ErrorKind::NonPositive));
        assert_eq!(v.check_bounds(dec!(21000000), AmountDomain::Crypto), Ok(()));
        assert_eq!(
            v.check_bounds(dec!(100000000), AmountDomain::Crypto),
            Err(ErrorKind::OutOfRange)
        );
        assert_eq!(v.check_bounds(dec!(0.001), AmountDomain::Fiat), Err(ErrorKind::OutOfRange));
        assert_eq!(
            v.check_bounds(dec!(2000000), AmountDomain::Fiat),
            Err(ErrorKind::OutOfRange)
        );
    }
}
