//! Collateral and total-to-pay calculation
//!
//! The offerer locks a collateral proportional to the offer amount and pays
//! the offer and network fees. A seller additionally funds the amount itself.

use crate::config::FeeConfig;
use log::trace;
use offerform_core::{Coin, CollateralRate, OfferDirection};

/// Collateral settings of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollateralState {
    pub rate: CollateralRate,
    pub direction: OfferDirection,
    pub fees: FeeConfig,
}

impl CollateralState {
    pub fn new(rate: CollateralRate, direction: OfferDirection, fees: FeeConfig) -> Self {
        Self {
            rate,
            direction,
            fees,
        }
    }

    pub fn total_to_pay(&self, amount: Coin) -> Coin {
        CollateralCalculator::total_to_pay(amount, self.rate, self.fees.total(), self.direction)
    }

    pub fn label(&self) -> String {
        CollateralCalculator::collateral_label(self.rate)
    }
}

pub struct CollateralCalculator;

impl CollateralCalculator {
    /// Collateral for an amount, rounded to satoshi precision
    pub fn collateral_amount(amount: Coin, rate: CollateralRate) -> Coin {
        (amount * rate.as_fraction()).round_to_satoshi()
    }

    /// Coins the offerer has to fund
    ///
    /// Sell: amount + collateral + fee. Buy: collateral + fee.
    pub fn total_to_pay(
        amount: Coin,
        rate: CollateralRate,
        fee: Coin,
        direction: OfferDirection,
    ) -> Coin {
        let collateral = Self::collateral_amount(amount, rate);
        let total = if direction.funds_amount() {
            amount + collateral + fee
        } else {
            collateral + fee
        };
        trace!(
            "Total to pay {} ({:?}: amount={}, collateral={}, fee={})",
            total, direction, amount, collateral, fee
        );
        total
    }

    /// `"Collateral (10.0 %):"` for a rate of 100
    pub fn collateral_label(rate: CollateralRate) -> String {
        let mut percent = rate.as_percent();
        percent.rescale(1);
        format!("Collateral ({} %):", percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_collateral_label() {
        assert_eq!(
            CollateralCalculator::collateral_label(CollateralRate::from_per_mille(100)),
            "Collateral (10.0 %):"
        );
        assert_eq!(
            CollateralCalculator::collateral_label(CollateralRate::ZERO),
            "Collateral (0.0 %):"
        );
        assert_eq!(
            CollateralCalculator::collateral_label(CollateralRate::from_per_mille(25)),
            "Collateral (2.5 %):"
        );
    }

    #[test]
    fn test_collateral_amount() {
        let collateral =
            CollateralCalculator::collateral_amount(Coin::COIN, CollateralRate::from_per_mille(100));
        assert_eq!(collateral.inner(), dec!(0.1));
    }

    #[test]
    fn test_collateral_amount_rounds_to_satoshi() {
        // 0.00000005 × 10 % = 0.000000005 -> 0.00000001
        let collateral = CollateralCalculator::collateral_amount(
            Coin::from(dec!(0.00000005)),
            CollateralRate::from_per_mille(100),
        );
        assert_eq!(collateral, Coin::SATOSHI);
    }

    #[test]
    fn test_total_to_pay_buy() {
        let total = CollateralCalculator::total_to_pay(
            Coin::COIN,
            CollateralRate::from_per_mille(100),
            Coin::from(dec!(0.0011)),
            OfferDirection::Buy,
        );
        assert_eq!(total.inner(), dec!(0.1011));
    }

    #[test]
    fn test_total_to_pay_sell_includes_amount() {
        let total = CollateralCalculator::total_to_pay(
            Coin::COIN,
            CollateralRate::from_per_mille(100),
            Coin::from(dec!(0.0011)),
            OfferDirection::Sell,
        );
        assert_eq!(total.inner(), dec!(1.1011));
    }

    #[test]
    fn test_state_uses_configured_fees() {
        let state = CollateralState::new(
            CollateralRate::ZERO,
            OfferDirection::Buy,
            FeeConfig::default(),
        );
        assert_eq!(state.total_to_pay(Coin::COIN).inner(), dec!(0.0011));
        assert_eq!(state.label(), "Collateral (0.0 %):");
    }
}
