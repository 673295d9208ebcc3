mod coin;
mod fiat;

pub use coin::{COIN_DECIMALS, COIN_DISPLAY_DECIMALS, Coin, MAX_MONEY};
pub use fiat::{FIAT_DECIMALS, Fiat};

/// Fiat price per one whole coin
pub type Price = Fiat;

/// Fiat value of an amount at a price
pub type Volume = Fiat;
