//! Offer Form: Create Offer
//!
//! Engine behind the create-offer form. It turns what the user types into
//! validated amounts and keeps the offer's numbers consistent:
//! - **Validation**: Numeric format and bounds for coin and fiat input
//! - **Reconciliation**: `volume = price × amount`, re-deriving whichever of
//!   amount/volume was not just edited
//! - **Collateral**: Total to pay and the collateral label
//! - **Metadata**: Display strings for bank account and accepted countries
//!
//! ## Architecture
//!
//! ```text
//! User input ──► NumericValidator ──► OfferReconciler ──► CurrencyMath
//!                  (reject/accept)     (owner field)      (dependent field)
//!                                           │
//!                                           ▼
//!                                  CollateralCalculator ──► total to pay
//!
//! Account/country changes ──► MetadataFormatter ──► display strings
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use offerform_create_offer::{CreateOfferForm, OfferField, OfferFormConfig};
//!
//! let mut form = CreateOfferForm::new(OfferFormConfig::default());
//! form.apply_edit(OfferField::Price, "500");
//! form.apply_edit(OfferField::Amount, "1");
//! assert_eq!(form.volume_text(), "500.00");
//! ```

pub mod collateral;
pub mod config;
pub mod error;
pub mod form;
pub mod formatter;
pub mod math;
pub mod metadata;
pub mod reconciler;
pub mod validator;

// Re-export main types
pub use collateral::{CollateralCalculator, CollateralState};
pub use config::{AmountLimits, ConfigError, FeeConfig, OfferFormConfig};
pub use error::{Error, Result};
pub use form::CreateOfferForm;
pub use formatter::{LocaleConfig, StandardFormatter};
pub use math::CurrencyMath;
pub use metadata::{AcceptedCountries, MetadataFormatter, TradeMetadata};
pub use reconciler::{AmountField, OfferField, OfferQuantities, OfferReconciler, OfferState};
pub use validator::{AmountDomain, ErrorKind, NumericValidator, Validation};
