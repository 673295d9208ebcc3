use serde::{Deserialize, Serialize};

/// Direction of an offer from the offerer's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OfferDirection {
    /// Offerer buys coin and pays fiat
    Buy,
    /// Offerer sells coin and locks the amount up front
    #[default]
    Sell,
}

impl OfferDirection {
    /// Whether the offerer funds the traded amount itself
    pub fn funds_amount(&self) -> bool {
        matches!(self, OfferDirection::Sell)
    }
}
