use serde::{Deserialize, Serialize};

/// A country a bank account can belong to or an offer can accept
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166 code, when known
    pub code: Option<String>,
    /// Display name
    pub name: String,
    /// Region the country belongs to, when known
    pub region: Option<String>,
}

impl Country {
    pub fn new(code: Option<String>, name: impl Into<String>, region: Option<String>) -> Self {
        Self {
            code,
            name: name.into(),
            region,
        }
    }

    /// Country known only by its display name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            code: None,
            name: name.into(),
            region: None,
        }
    }
}
