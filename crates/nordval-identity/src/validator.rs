//! # Country Dispatcher
//!
//! [`NationalIdentifierValidator`] owns the clock and hands out
//! [`CountryValidator`]s, either for a known [`Country`] or looked up by
//! code. The any-country operations try each country in
//! [`Country::detectable()`] order and stop at the first that accepts.
//! Germany is never tried implicitly.
//!
//! The dispatcher holds no mutable state. It is cheap to clone and can be
//! shared freely between threads.
//!
//! ## Logging
//!
//! Rejections are logged at `debug` with the country and rejection kind.
//! Identifier values are never logged.

use std::sync::Arc;

use nordval_core::{calendar, Clock, RejectionKind, SystemClock};

use crate::classify::Classified;
use crate::country::Country;
use crate::error::IdentifierError;
use crate::parsed::ParsedIdentity;

/// Entry point for national identifier operations.
#[derive(Debug, Clone)]
pub struct NationalIdentifierValidator {
    clock: Arc<dyn Clock>,
}

impl Default for NationalIdentifierValidator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl NationalIdentifierValidator {
    /// Create a dispatcher that reads "now" from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// The clock ages are measured against.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// The validator for a known country.
    pub fn for_country(&self, country: Country) -> CountryValidator<'_> {
        CountryValidator {
            country,
            clock: self.clock.as_ref(),
        }
    }

    /// Look up a validator by country code or name.
    ///
    /// # Errors
    ///
    /// [`IdentifierError::UnknownCountry`] when no scheme is registered for
    /// `code`.
    pub fn get_validator(&self, code: &str) -> Result<CountryValidator<'_>, IdentifierError> {
        let country = code.parse::<Country>()?;
        Ok(self.for_country(country))
    }

    /// The first detectable country whose rules accept `text`.
    pub fn detect(&self, text: &str) -> Result<Country, IdentifierError> {
        self.first_match(text).map(|(country, _)| country)
    }

    /// Whether any detectable country accepts `text`.
    pub fn is_valid_in_any_country(&self, text: &str) -> bool {
        self.first_match(text).is_ok()
    }

    /// Decimal rendering of `number` checked against every detectable
    /// country.
    pub fn is_valid_number_in_any_country(&self, number: u64) -> bool {
        self.is_valid_in_any_country(&number.to_string())
    }

    /// Normalize with the first detectable country that accepts `text`.
    pub fn normalize_for_any_country(&self, text: &str) -> Result<String, IdentifierError> {
        self.first_match(text).map(|(_, classified)| classified.normalized)
    }

    fn first_match(&self, text: &str) -> Result<(Country, Classified), IdentifierError> {
        let today = self.clock.today();
        let found = Country::detectable()
            .iter()
            .find_map(|country| country.classify(text, today).ok().map(|c| (*country, c)));

        match found {
            Some(hit) => Ok(hit),
            None => {
                tracing::debug!(
                    countries = Country::detectable().len(),
                    "national identifier rejected by every country"
                );
                Err(IdentifierError::NoCountryMatched {
                    input: text.to_string(),
                })
            }
        }
    }
}

/// National identifier operations bound to one country.
#[derive(Debug, Clone, Copy)]
pub struct CountryValidator<'a> {
    country: Country,
    clock: &'a dyn Clock,
}

impl CountryValidator<'_> {
    /// The country whose rules this validator applies.
    pub fn country(&self) -> Country {
        self.country
    }

    /// Whether `text` passes every stage of this country's rules.
    pub fn is_valid(&self, text: &str) -> bool {
        self.classify(text).is_ok()
    }

    /// [`is_valid`](Self::is_valid) over the decimal rendering of `number`.
    ///
    /// Leading zeros cannot be expressed, so numbers that start with `0`
    /// never validate this way.
    pub fn is_valid_number(&self, number: u64) -> bool {
        self.is_valid(&number.to_string())
    }

    /// The canonical form of `text`.
    ///
    /// | Country | Normalized form |
    /// |---------|-----------------|
    /// | Sweden | `YYYYMMDDNNNC` |
    /// | Norway | `DDMMYYZZZQQ` |
    /// | Finland | `DDMMYYCZZZQ` |
    /// | Denmark | `DDMMYYSSSS` |
    /// | Germany | `YYYYMMDD` |
    ///
    /// # Errors
    ///
    /// [`IdentifierError::Rejected`] with the first failing stage.
    pub fn normalize(&self, text: &str) -> Result<String, IdentifierError> {
        self.classify(text).map(|c| c.normalized)
    }

    /// [`normalize`](Self::normalize) over the decimal rendering of `number`.
    ///
    /// # Errors
    ///
    /// As [`normalize`](Self::normalize).
    pub fn normalize_number(&self, number: u64) -> Result<String, IdentifierError> {
        self.normalize(&number.to_string())
    }

    /// [`normalize`](Self::normalize) without the error detail.
    pub fn try_normalize(&self, text: &str) -> Option<String> {
        self.normalize(text).ok()
    }

    /// Birth date, gender and age. Invalid input yields
    /// [`ParsedIdentity::invalid()`].
    pub fn parse(&self, text: &str) -> ParsedIdentity {
        match self.classify(text) {
            Ok(classified) => ParsedIdentity {
                valid: true,
                gender: classified.gender,
                date_of_birth: Some(classified.birth_date),
                age_in_years: calendar::age_in_years(classified.birth_date, self.clock.today()),
                temporary: classified.kind.is_temporary(),
            },
            Err(_) => ParsedIdentity::invalid(),
        }
    }

    /// The stage at which `text` is rejected, or `None` if it is accepted.
    pub fn rejection(&self, text: &str) -> Option<RejectionKind> {
        self.classify(text).err().map(|e| e.kind())
    }

    fn classify(&self, text: &str) -> Result<Classified, IdentifierError> {
        self.country
            .classify(text, self.clock.today())
            .map_err(|kind| {
                tracing::debug!(
                    country = %self.country,
                    kind = kind.as_str(),
                    "national identifier rejected"
                );
                IdentifierError::Rejected {
                    input: text.to_string(),
                    country: self.country,
                    kind,
                }
            })
    }
}
