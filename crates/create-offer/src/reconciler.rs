//! Price / amount / volume reconciliation
//!
//! The reconciler owns the three quantity fields and keeps them consistent
//! under `volume = price × amount`. Every edit runs to completion:
//! validate → store → derive the dependent field → recompute total to pay.
//!
//! The field just written is the driver. Amount and volume re-derive each
//! other; price is only ever set by the user.
//!
//! Transitions:
//! - price edit: re-derives from the current driver (`Consistent`), or
//!   `PriceOnly` when there is no driver yet
//! - amount edit: derives volume when a valid price is set (`AmountDriven`)
//! - volume edit: derives amount when a valid price is set (`VolumeDriven`)
//! - rejected edit: the field keeps its text and is marked invalid. Its last
//!   valid value, the driver, the derived fields, the total and the state
//!   stay as they were.
//!
//! An edit whose derived value would fall outside the configured bounds is
//! rejected as [`ErrorKind::OutOfRange`] and nothing is written.

use crate::collateral::CollateralState;
use crate::math::CurrencyMath;
use crate::validator::{AmountDomain, ErrorKind, NumericValidator, Validation};
use log::{debug, trace, warn};
use offerform_core::{Coin, CollateralRate, OfferDirection, Price, Volume};
use offerform_ports::{Formatter, ParseError};

/// One of the three quantity inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfferField {
    Price,
    Amount,
    Volume,
}

impl OfferField {
    pub fn domain(&self) -> AmountDomain {
        match self {
            OfferField::Amount => AmountDomain::Crypto,
            OfferField::Price | OfferField::Volume => AmountDomain::Fiat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfferState {
    /// Nothing valid entered yet
    #[default]
    Empty,
    /// A price but neither amount nor volume
    PriceOnly,
    /// Amount was edited last; volume follows it
    AmountDriven,
    /// Volume was edited last; amount follows it
    VolumeDriven,
    /// A price edit re-derived the dependent field
    Consistent,
}

/// Text shown in a field and the last valid value it stood for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountField<T> {
    raw_text: String,
    value: Option<T>,
    valid: bool,
}

impl<T: Copy> AmountField<T> {
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Last valid value; kept while the text is invalid
    pub fn value(&self) -> Option<T> {
        self.value
    }

    /// Whether the current text was accepted
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    fn accept(&mut self, raw_text: impl Into<String>, value: T) {
        self.raw_text = raw_text.into();
        self.value = Some(value);
        self.valid = true;
    }

    fn reject(&mut self, raw_text: impl Into<String>) {
        self.raw_text = raw_text.into();
        self.valid = false;
    }

    /// Value only when the current text is valid
    fn current(&self) -> Option<T> {
        self.value.filter(|_| self.valid)
    }
}

impl<T> Default for AmountField<T> {
    fn default() -> Self {
        Self {
            raw_text: String::new(),
            value: None,
            valid: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OfferQuantities {
    pub price: AmountField<Price>,
    pub amount: AmountField<Coin>,
    pub volume: AmountField<Volume>,
}

/// Last valid user input among amount and volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Driver {
    Amount(Coin),
    Volume(Volume),
}

pub struct OfferReconciler<F: Formatter> {
    formatter: F,
    validator: NumericValidator,
    quantities: OfferQuantities,
    driver: Option<Driver>,
    state: OfferState,
    initial_collateral: CollateralState,
    collateral: CollateralState,
    total_to_pay: Option<Coin>,
}

impl<F: Formatter> OfferReconciler<F> {
    pub fn new(formatter: F, validator: NumericValidator, collateral: CollateralState) -> Self {
        Self {
            formatter,
            validator,
            quantities: OfferQuantities::default(),
            driver: None,
            state: OfferState::Empty,
            initial_collateral: collateral,
            collateral,
            total_to_pay: None,
        }
    }

    /// Apply user text to a field and re-derive what depends on it
    pub fn apply_edit(&mut self, field: OfferField, raw_text: &str) -> Validation {
        let validation = self.validator.validate(Some(raw_text), field.domain());
        if let Some(reason) = validation.reason {
            return self.reject(field, raw_text, reason);
        }

        let applied = match field {
            OfferField::Price => match self.formatter.parse_fiat(raw_text) {
                Ok(price) => self.on_price(raw_text, price),
                Err(e) => Err(self.unparseable(field, raw_text, e)),
            },
            OfferField::Amount => match self.formatter.parse_coin(raw_text) {
                Ok(amount) => self.on_amount(raw_text, amount),
                Err(e) => Err(self.unparseable(field, raw_text, e)),
            },
            OfferField::Volume => match self.formatter.parse_fiat(raw_text) {
                Ok(volume) => self.on_volume(raw_text, volume),
                Err(e) => Err(self.unparseable(field, raw_text, e)),
            },
        };

        if let Err(reason) = applied {
            return self.reject(field, raw_text, reason);
        }

        self.update_total_to_pay();
        trace!("{:?} edit applied, state {:?}", field, self.state);
        validation
    }

    pub fn set_collateral_rate(&mut self, rate: CollateralRate) {
        self.collateral.rate = rate;
        self.update_total_to_pay();
    }

    pub fn set_direction(&mut self, direction: OfferDirection) {
        self.collateral.direction = direction;
        self.update_total_to_pay();
    }

    /// Back to the state the form opened with
    pub fn reset(&mut self) {
        self.quantities = OfferQuantities::default();
        self.driver = None;
        self.state = OfferState::Empty;
        self.collateral = self.initial_collateral;
        self.total_to_pay = None;
        debug!("Offer quantities reset");
    }

    pub fn state(&self) -> OfferState {
        self.state
    }

    pub fn quantities(&self) -> &OfferQuantities {
        &self.quantities
    }

    pub fn price(&self) -> Option<Price> {
        self.quantities.price.value()
    }

    pub fn amount(&self) -> Option<Coin> {
        self.quantities.amount.value()
    }

    pub fn volume(&self) -> Option<Volume> {
        self.quantities.volume.value()
    }

    pub fn collateral(&self) -> &CollateralState {
        &self.collateral
    }

    pub fn collateral_label(&self) -> String {
        self.collateral.label()
    }

    pub fn total_to_pay(&self) -> Option<Coin> {
        self.total_to_pay
    }

    pub fn total_to_pay_text(&self) -> String {
        self.total_to_pay
            .map(|total| self.formatter.format_coin(total))
            .unwrap_or_default()
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    fn on_price(&mut self, raw_text: &str, price: Price) -> Result<(), ErrorKind> {
        match self.driver {
            Some(Driver::Amount(amount)) => {
                let volume = self.derive_volume(price, amount)?;
                self.write_volume(volume);
                self.state = OfferState::Consistent;
            }
            Some(Driver::Volume(volume)) => {
                let (amount, pinned) = self.derive_amount(price, volume)?;
                self.write_amount(amount, pinned);
                self.state = OfferState::Consistent;
            }
            None => self.state = OfferState::PriceOnly,
        }
        self.quantities.price.accept(raw_text, price);
        Ok(())
    }

    fn on_amount(&mut self, raw_text: &str, amount: Coin) -> Result<(), ErrorKind> {
        let amount = CurrencyMath::reduce_to_4_decimals(amount);
        let derived = match self.quantities.price.current() {
            Some(price) => Some(self.derive_volume(price, amount)?),
            None => None,
        };

        self.quantities.amount.accept(raw_text, amount);
        self.driver = Some(Driver::Amount(amount));
        if let Some(volume) = derived {
            self.write_volume(volume);
        }
        self.state = OfferState::AmountDriven;
        Ok(())
    }

    fn on_volume(&mut self, raw_text: &str, volume: Volume) -> Result<(), ErrorKind> {
        let derived = match self.quantities.price.current() {
            Some(price) => Some(self.derive_amount(price, volume)?),
            None => None,
        };

        self.quantities.volume.accept(raw_text, volume);
        self.driver = Some(Driver::Volume(volume));
        if let Some((amount, pinned)) = derived {
            self.write_amount(amount, pinned);
        }
        self.state = OfferState::VolumeDriven;
        Ok(())
    }

    /// Volume for the amount at the price, if it lands inside the fiat bounds
    fn derive_volume(&self, price: Price, amount: Coin) -> Result<Volume, ErrorKind> {
        let volume = CurrencyMath::derive_volume(price, amount).ok_or(ErrorKind::OutOfRange)?;
        self.validator
            .check_bounds(volume.inner(), AmountDomain::Fiat)
            .map_err(|_| ErrorKind::OutOfRange)?;
        Ok(volume)
    }

    /// Amount for the volume at the price, if it lands inside the coin bounds,
    /// together with the volume value pinned to price × amount
    fn derive_amount(&self, price: Price, volume: Volume) -> Result<(Coin, Volume), ErrorKind> {
        let amount = CurrencyMath::derive_amount(price, volume).ok_or(ErrorKind::OutOfRange)?;
        self.validator
            .check_bounds(amount.inner(), AmountDomain::Crypto)
            .map_err(|_| ErrorKind::OutOfRange)?;
        let pinned = CurrencyMath::derive_volume(price, amount).unwrap_or(volume);
        Ok((amount, pinned))
    }

    fn write_volume(&mut self, volume: Volume) {
        let text = self.formatter.format_fiat(volume);
        self.quantities.volume.accept(text, volume);
    }

    /// The volume text stays as the user typed it; only its value is pinned
    fn write_amount(&mut self, amount: Coin, pinned_volume: Volume) {
        let text = self.formatter.format_coin(amount);
        self.quantities.amount.accept(text, amount);
        self.quantities.volume.value = Some(pinned_volume);
    }

    /// Keep the text, mark it invalid; everything else stays as it was
    fn reject(&mut self, field: OfferField, raw_text: &str, reason: ErrorKind) -> Validation {
        match field {
            OfferField::Price => self.quantities.price.reject(raw_text),
            OfferField::Amount => self.quantities.amount.reject(raw_text),
            OfferField::Volume => self.quantities.volume.reject(raw_text),
        }
        debug!("{:?} edit {:?} rejected: {}", field, raw_text, reason);
        Validation::invalid(reason)
    }

    fn unparseable(&self, field: OfferField, raw_text: &str, e: ParseError) -> ErrorKind {
        warn!(
            "Formatter could not parse validated {:?} input {:?}: {}",
            field, raw_text, e
        );
        ErrorKind::MalformedNumber
    }

    fn update_total_to_pay(&mut self) {
        self.total_to_pay = self
            .amount()
            .map(|amount| self.collateral.total_to_pay(amount));
    }
}
