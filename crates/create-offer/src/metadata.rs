//! Display strings for the bank account and accepted countries
//!
//! Pure derivations, no arithmetic: the form shows the account type as a
//! capitalized label, currency and country as they are, and the accepted
//! countries joined in the order they were added.

use crate::error::Result;
use indexmap::IndexMap;
use log::debug;
use offerform_core::{BankAccountType, Country};

pub struct MetadataFormatter;

impl MetadataFormatter {
    /// `SEPA` -> `Sepa`, `OK_PAY` -> `Ok Pay`
    pub fn bank_account_type_label(code: &str) -> String {
        code.split('_')
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn currency_label(code: &str) -> String {
        code.to_string()
    }

    pub fn country_label(name: &str) -> String {
        name.to_string()
    }

    /// Country names joined with `", "` in insertion order
    pub fn accepted_countries_label(countries: &AcceptedCountries) -> String {
        countries
            .iter()
            .map(|country| country.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Countries an offer accepts, in the order they were added
///
/// Keyed by country name, so the same country given with and without its
/// code is accepted once. The first entry added is the one kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptedCountries(IndexMap<String, Country>);

impl AcceptedCountries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a country; returns false if one with that name was already accepted
    pub fn add(&mut self, country: Country) -> bool {
        if self.0.contains_key(&country.name) {
            return false;
        }
        self.0.insert(country.name.clone(), country);
        true
    }

    /// Remove a country by name, keeping the order of the rest
    pub fn remove(&mut self, country: &Country) -> bool {
        self.0.shift_remove(&country.name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Country> for AcceptedCountries {
    fn from_iter<I: IntoIterator<Item = Country>>(iter: I) -> Self {
        let mut countries = Self::new();
        for country in iter {
            countries.add(country);
        }
        countries
    }
}

/// Bank account and country details shown next to the offer
#[derive(Debug, Clone, Default)]
pub struct TradeMetadata {
    bank_account_type: Option<String>,
    bank_account_currency: Option<String>,
    bank_account_country: Option<String>,
    accepted_countries: AcceptedCountries,
}

impl TradeMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bank_account_type(&mut self, code: impl Into<String>) {
        self.bank_account_type = Some(code.into());
    }

    pub fn set_bank_account_currency(&mut self, code: impl Into<String>) {
        self.bank_account_currency = Some(code.into());
    }

    pub fn set_bank_account_country(&mut self, name: impl Into<String>) {
        self.bank_account_country = Some(name.into());
    }

    pub fn add_accepted_country(&mut self, country: Country) {
        if !self.accepted_countries.add(country) {
            debug!("Country already accepted, ignoring");
        }
    }

    pub fn remove_accepted_country(&mut self, country: &Country) {
        self.accepted_countries.remove(country);
    }

    pub fn accepted_countries(&self) -> &AcceptedCountries {
        &self.accepted_countries
    }

    /// Typed account type, if the stored code is a known one
    pub fn bank_account_type(&self) -> Option<Result<BankAccountType>> {
        self.bank_account_type
            .as_deref()
            .map(|code| code.parse::<BankAccountType>().map_err(Into::into))
    }

    pub fn bank_account_type_label(&self) -> String {
        self.bank_account_type
            .as_deref()
            .map(MetadataFormatter::bank_account_type_label)
            .unwrap_or_default()
    }

    pub fn bank_account_currency_label(&self) -> String {
        self.bank_account_currency
            .as_deref()
            .map(MetadataFormatter::currency_label)
            .unwrap_or_default()
    }

    pub fn bank_account_country_label(&self) -> String {
        self.bank_account_country
            .as_deref()
            .map(MetadataFormatter::country_label)
            .unwrap_or_default()
    }

    pub fn accepted_countries_label(&self) -> String {
        MetadataFormatter::accepted_countries_label(&self.accepted_countries)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
