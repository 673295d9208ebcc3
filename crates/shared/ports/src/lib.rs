//! Offer Form Ports
//!
//! Port definitions (traits) for the offer creation form.
//! These define the boundaries between form logic and locale-aware formatting.

mod error;
mod formatter;

pub use error::{ParseError, ParseResult};
pub use formatter::Formatter;
