use thiserror::Error;

/// Failures of the formatter when turning text into an amount
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Nothing to parse")]
    Empty,

    #[error("Not a number: {0}")]
    InvalidNumber(String),

    #[error("Too many fractional digits in {input}: at most {max} allowed")]
    TooPrecise { input: String, max: u32 },

    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
