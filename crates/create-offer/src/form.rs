//! The create-offer form as a whole
//!
//! Wires the reconciler and trade metadata together from one
//! [`OfferFormConfig`] and exposes every string the form displays.

use crate::collateral::CollateralState;
use crate::config::OfferFormConfig;
use crate::error::Result;
use crate::formatter::StandardFormatter;
use crate::metadata::TradeMetadata;
use crate::reconciler::{OfferField, OfferReconciler, OfferState};
use crate::validator::{NumericValidator, Validation};
use log::info;
use offerform_core::{CollateralRate, Country, OfferDirection};
use offerform_ports::Formatter;
use std::path::Path;

pub struct CreateOfferForm<F: Formatter = StandardFormatter> {
    reconciler: OfferReconciler<F>,
    metadata: TradeMetadata,
}

impl CreateOfferForm<StandardFormatter> {
    /// Form using the standard formatter for the configured locale
    pub fn new(config: OfferFormConfig) -> Self {
        let formatter = StandardFormatter::new(config.locale.clone());
        Self::with_formatter(config, formatter)
    }

    /// Form configured from a JSON file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = OfferFormConfig::from_file(path)?;
        Ok(Self::new(config))
    }
}

impl<F: Formatter> CreateOfferForm<F> {
    pub fn with_formatter(config: OfferFormConfig, formatter: F) -> Self {
        info!(
            "Create-offer form opened ({}, collateral {}%, {:?})",
            formatter.fiat_currency_code(),
            config.collateral.as_percent(),
            config.direction
        );
        let collateral = CollateralState::new(config.collateral, config.direction, config.fees);
        Self {
            reconciler: OfferReconciler::new(
                formatter,
                NumericValidator::new(config.limits),
                collateral,
            ),
            metadata: TradeMetadata::new(),
        }
    }

    pub fn apply_edit(&mut self, field: OfferField, raw_text: &str) -> Validation {
        self.reconciler.apply_edit(field, raw_text)
    }

    pub fn set_collateral_rate(&mut self, rate: CollateralRate) {
        self.reconciler.set_collateral_rate(rate);
    }

    pub fn set_direction(&mut self, direction: OfferDirection) {
        self.reconciler.set_direction(direction);
    }

    pub fn set_bank_account_type(&mut self, code: impl Into<String>) {
        self.metadata.set_bank_account_type(code);
    }

    pub fn set_bank_account_currency(&mut self, code: impl Into<String>) {
        self.metadata.set_bank_account_currency(code);
    }

    pub fn set_bank_account_country(&mut self, name: impl Into<String>) {
        self.metadata.set_bank_account_country(name);
    }

    pub fn add_accepted_country(&mut self, country: Country) {
        self.metadata.add_accepted_country(country);
    }

    pub fn remove_accepted_country(&mut self, country: &Country) {
        self.metadata.remove_accepted_country(country);
    }

    /// Clear everything entered; collateral settings return to the configured ones
    pub fn reset(&mut self) {
        self.reconciler.reset();
        self.metadata.reset();
    }

    pub fn reconciler(&self) -> &OfferReconciler<F> {
        &self.reconciler
    }

    pub fn metadata(&self) -> &TradeMetadata {
        &self.metadata
    }

    pub fn state(&self) -> OfferState {
        self.reconciler.state()
    }

    pub fn price_text(&self) -> &str {
        self.reconciler.quantities().price.raw_text()
    }

    pub fn amount_text(&self) -> &str {
        self.reconciler.quantities().amount.raw_text()
    }

    pub fn volume_text(&self) -> &str {
        self.reconciler.quantities().volume.raw_text()
    }

    pub fn total_to_pay_text(&self) -> String {
        self.reconciler.total_to_pay_text()
    }

    pub fn collateral_label(&self) -> String {
        self.reconciler.collateral_label()
    }

    pub fn bank_account_type_label(&self) -> String {
        self.metadata.bank_account_type_label()
    }

    pub fn bank_account_currency_label(&self) -> String {
        self.metadata.bank_account_currency_label()
    }

    pub fn bank_account_country_label(&self) -> String {
        self.metadata.bank_account_country_label()
    }

    pub fn accepted_countries_label(&self) -> String {
        self.metadata.accepted_countries_label()
    }
}
