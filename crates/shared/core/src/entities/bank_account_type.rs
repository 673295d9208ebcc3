use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment rail of the offerer's bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankAccountType {
    Sepa,
    Wire,
    International,
    OkPay,
    NetTeller,
    PerfectMoney,
    Other,
}

impl BankAccountType {
    const ALL: [BankAccountType; 7] = [
        BankAccountType::Sepa,
        BankAccountType::Wire,
        BankAccountType::International,
        BankAccountType::OkPay,
        BankAccountType::NetTeller,
        BankAccountType::PerfectMoney,
        BankAccountType::Other,
    ];

    /// Canonical upper-case code, e.g. `SEPA` or `OK_PAY`
    pub fn code(&self) -> &'static str {
        match self {
            BankAccountType::Sepa => "SEPA",
            BankAccountType::Wire => "WIRE",
            BankAccountType::International => "INTERNATIONAL",
            BankAccountType::OkPay => "OK_PAY",
            BankAccountType::NetTeller => "NET_TELLER",
            BankAccountType::PerfectMoney => "PERFECT_MONEY",
            BankAccountType::Other => "OTHER",
        }
    }
}

impl fmt::Display for BankAccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBankAccountType(pub String);

impl fmt::Display for UnknownBankAccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown bank account type: {}", self.0)
    }
}

impl std::error::Error for UnknownBankAccountType {}

impl FromStr for BankAccountType {
    type Err = UnknownBankAccountType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownBankAccountType(code.to_string()))
    }
}
