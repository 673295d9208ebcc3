//! Price × amount arithmetic with per-currency rounding
//!
//! Amounts are truncated to 4 decimals before they take part in any
//! calculation, so the volume shown always matches the amount shown:
//! 3.33333333 coins at 300 is 3.3333 × 300 = 999.99, never 1000.00.

use log::trace;
use offerform_core::{Coin, Price, Volume};

/// Stateless helpers deriving one of amount/volume from the other two
pub struct CurrencyMath;

impl CurrencyMath {
    /// Truncate a coin amount to the 4 decimals the form works with
    pub fn reduce_to_4_decimals(amount: Coin) -> Coin {
        amount.reduce_to_display()
    }

    /// Volume for an amount at a price, rounded half-up to cents
    ///
    /// Returns `None` when the price is zero or the volume rounds away to
    /// nothing at cent precision.
    pub fn derive_volume(price: Price, amount: Coin) -> Option<Volume> {
        if price.is_zero() {
            trace!("Skipping volume derivation: zero price");
            return None;
        }

        let amount = Self::reduce_to_4_decimals(amount);
        let volume = price.inner().checked_mul(amount.inner())?;
        let volume = Volume::from(volume).round_to_cents();
        if volume.is_zero() {
            trace!("Skipping volume derivation: {} × {} rounds to zero", price, amount);
            return None;
        }
        trace!("Derived volume {} = {} × {}", volume, price, amount);
        Some(volume)
    }

    /// Amount for a volume at a price, truncated toward zero to 4 decimals
    ///
    /// Returns `None` when the price is zero or the amount truncates to zero.
    pub fn derive_amount(price: Price, volume: Volume) -> Option<Coin> {
        if price.is_zero() {
            trace!("Skipping amount derivation: zero price");
            return None;
        }

        let amount = volume.inner().checked_div(price.inner())?;
        let amount = Coin::from(amount).reduce_to_display();
        if amount.is_zero() {
            trace!("Skipping amount derivation: {} / {} truncates to zero", volume, price);
            return None;
        }
        trace!("Derived amount {} = {} / {}", amount, volume, price);
        Some(amount)
    }
}
