use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Collateral rate in tenths of a percent
///
/// `100` is 10.0 %, `1000` is 100 %. An integer unit keeps the rate free of
/// floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollateralRate(u32);

impl CollateralRate {
    pub const ZERO: CollateralRate = CollateralRate(0);

    /// Units per whole (100 %)
    pub const UNITS_PER_WHOLE: u32 = 1000;

    pub const fn from_per_mille(per_mille: u32) -> Self {
        Self(per_mille)
    }

    pub const fn per_mille(self) -> u32 {
        self.0
    }

    /// Rate as a multiplier (100 -> 0.1)
    pub fn as_fraction(self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(Self::UNITS_PER_WHOLE)
    }

    /// Rate in percent (100 -> 10.0)
    pub fn as_percent(self) -> Decimal {
        Decimal::from(self.0) / dec!(10)
    }
}

impl From<u32> for CollateralRate {
    fn from(per_mille: u32) -> Self {
        Self(per_mille)
    }
}
