use crate::error::ParseResult;
use offerform_core::{Coin, Fiat};

/// Port for locale and currency aware amount formatting
///
/// The form logic never builds display strings for amounts itself; it asks a
/// formatter. This keeps locale configuration out of the reconciliation code:
/// - A standard formatter for production
/// - Fixed-locale formatters for deterministic tests
pub trait Formatter {
    /// Display string for a coin amount
    fn format_coin(&self, coin: Coin) -> String;

    /// Display string for a fiat amount
    fn format_fiat(&self, fiat: Fiat) -> String;

    /// Parse user text into a coin amount
    fn parse_coin(&self, text: &str) -> ParseResult<Coin>;

    /// Parse user text into a fiat amount
    fn parse_fiat(&self, text: &str) -> ParseResult<Fiat>;

    /// Currency code fiat amounts are expressed in
    fn fiat_currency_code(&self) -> &str {
        "USD"
    }
}
