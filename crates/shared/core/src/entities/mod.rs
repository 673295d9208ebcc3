mod bank_account_type;
mod collateral_rate;
mod country;
mod direction;

pub use bank_account_type::{BankAccountType, UnknownBankAccountType};
pub use collateral_rate::CollateralRate;
pub use country::Country;
pub use direction::OfferDirection;
