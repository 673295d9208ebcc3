//! Fiat amount backed by a decimal, kept at cent precision by the form.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fractional digits a fiat amount carries
pub const FIAT_DECIMALS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fiat(Decimal);

impl Fiat {
    pub const ZERO: Fiat = Fiat(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, &'static str> {
        if value < Decimal::ZERO {
            return Err("Fiat amount cannot be negative");
        }
        Ok(Fiat(value))
    }

    pub fn inner(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Round half-up (away from zero at the midpoint) to cent precision
    pub fn round_to_cents(&self) -> Fiat {
        Fiat(
            self.0
                .round_dp_with_strategy(FIAT_DECIMALS, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl From<Decimal> for Fiat {
    fn from(value: Decimal) -> Self {
        Fiat(value)
    }
}

impl From<Fiat> for Decimal {
    fn from(fiat: Fiat) -> Decimal {
        fiat.0
    }
}

impl fmt::Display for Fiat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Fiat {
    fn default() -> Self {
        Fiat::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_to_cents_half_up() {
        assert_eq!(Fiat::from(dec!(999.995)).round_to_cents().inner(), dec!(1000.00));
        assert_eq!(Fiat::from(dec!(999.994)).round_to_cents().inner(), dec!(999.99));
        assert_eq!(Fiat::from(dec!(0.005)).round_to_cents().inner(), dec!(0.01));
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(Fiat::new(dec!(-0.01)).is_err());
        assert!(Fiat::new(Decimal::ZERO).is_ok());
    }
}
