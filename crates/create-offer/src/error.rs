//! Create-offer errors
//!
//! Input validation never fails with these; it reports a
//! [`Validation`](crate::validator::Validation) instead. These cover
//! configuration and lookups that can genuinely fail.

use crate::config::ConfigError;
use offerform_core::UnknownBankAccountType;
use offerform_ports::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    UnknownBankAccountType(#[from] UnknownBankAccountType),
}

pub type Result<T> = std::result::Result<T, Error>;
