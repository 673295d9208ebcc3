//! Cryptocurrency amount backed by a decimal.
//!
//! Amounts carry up to 8 fractional digits (one satoshi = 0.00000001).
//! The create-offer form only ever works with 4 of them, see
//! [`Coin::reduce_to_display`].

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Fractional digits a coin amount can carry
pub const COIN_DECIMALS: u32 = 8;

/// Fractional digits used by the form for amounts
pub const COIN_DISPLAY_DECIMALS: u32 = 4;

/// Maximum supply: no amount may exceed 21 million coins
pub const MAX_MONEY: Decimal = dec!(21000000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coin(Decimal);

impl Coin {
    pub const ZERO: Coin = Coin(Decimal::ZERO);
    pub const SATOSHI: Coin = Coin(dec!(0.00000001));
    pub const COIN: Coin = Coin(Decimal::ONE);

    /// Create a coin amount, rejecting negatives and values past the maximum supply
    pub fn new(value: Decimal) -> Result<Self, &'static str> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err("Coin amount cannot be negative");
        }
        if value > MAX_MONEY {
            return Err("Coin amount exceeds maximum supply");
        }
        if value.normalize().scale() > COIN_DECIMALS {
            return Err("Coin amount is more precise than one satoshi");
        }
        Ok(Coin(value))
    }

    pub fn inner(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Truncate toward zero to the 4 decimals the form displays and stores
    pub fn reduce_to_display(&self) -> Coin {
        Coin(
            self.0
                .round_dp_with_strategy(COIN_DISPLAY_DECIMALS, RoundingStrategy::ToZero),
        )
    }

    /// Round half-up to full satoshi precision
    pub fn round_to_satoshi(&self) -> Coin {
        Coin(
            self.0
                .round_dp_with_strategy(COIN_DECIMALS, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl From<Decimal> for Coin {
    fn from(value: Decimal) -> Self {
        Coin(value)
    }
}

impl From<Coin> for Decimal {
    fn from(coin: Coin) -> Decimal {
        coin.0
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Coin {
    type Output = Coin;
    fn add(self, rhs: Self) -> Self::Output {
        Coin(self.0 + rhs.0)
    }
}

impl Mul<Decimal> for Coin {
    type Output = Coin;
    fn mul(self, rhs: Decimal) -> Self::Output {
        Coin(self.0 * rhs)
    }
}

impl Default for Coin {
    fn default() -> Self {
        Coin::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_satoshi() {
        let coin = Coin::from(dec!(0.000000015));
        assert_eq!(coin.round_to_satoshi().inner(), dec!(0.00000002));
    }

    #[test]
    fn test_new_bounds() {
        assert!(Coin::new(dec!(21000000)).is_ok());
        assert!(Coin::new(dec!(21000000.00000001)).is_err());
        assert!(Coin::new(dec!(-1)).is_err());
        assert!(Coin::new(dec!(0.000000001)).is_err());
        assert!(Coin::new(dec!(1.100000000)).is_ok());
    }

    #[test]
    fn test_reduce_to_display_truncates() {
        let coin = Coin::from(dec!(3.33339999));
        assert_eq!(coin.reduce_to_display().inner(), dec!(3.3333));

        let coin = Coin::from(dec!(0.99999));
        assert_eq!(coin.reduce_to_display().inner(), dec!(0.9999));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coin::from(dec!(1.50000000)).to_string(), "1.5");
        assert_eq!(Coin::SATOSHI.to_string(), "0.00000001");
    }
}
