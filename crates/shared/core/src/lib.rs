//! Offer Form Core Domain
//!
//! Pure domain types for the offer creation form.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    BankAccountType, CollateralRate, Country, OfferDirection, UnknownBankAccountType,
};
pub use values::{
    COIN_DECIMALS, COIN_DISPLAY_DECIMALS, Coin, FIAT_DECIMALS, Fiat, MAX_MONEY, Price, Volume,
};
