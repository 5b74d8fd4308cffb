//! # Countries: Registered Identifier Schemes
//!
//! [`Country`] is the one definition of which national identifier schemes
//! exist. Every `match` on it is exhaustive, so a new scheme cannot be added
//! without a classifier.
//!
//! [`Country::detectable()`] is the order used by the any-country
//! operations: Sweden, Norway, Finland, Denmark. The Swedish and Danish
//! short forms can overlap structurally; the first country that accepts an
//! input wins. Germany is reachable only when asked for by code or name.

use chrono::NaiveDate;
use nordval_core::RejectionKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::classify::Classified;
use crate::error::IdentifierError;
use crate::{denmark, finland, germany, norway, sweden};

/// A country with a supported national identifier scheme.
///
/// | Code | Country | Identifier | Normalized form |
/// |------|---------|------------|-----------------|
/// | SE | Sweden | personnummer / samordningsnummer | `YYYYMMDDNNNC` |
/// | NO | Norway | fødselsnummer / D-nummer | `DDMMYYZZZQQ` |
/// | FI | Finland | henkilötunnus | `DDMMYYCZZZQ` |
/// | DK | Denmark | CPR-nummer | `DDMMYYSSSS` |
/// | DE | Germany | birthdate identifier | `YYYYMMDD` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    /// Personnummer and samordningsnummer.
    #[serde(rename = "SE")]
    Sweden,
    /// Fødselsnummer and D-nummer.
    #[serde(rename = "NO")]
    Norway,
    /// Henkilötunnus.
    #[serde(rename = "FI")]
    Finland,
    /// CPR-nummer.
    #[serde(rename = "DK")]
    Denmark,
    /// Birthdate identifier. Never tried by the any-country operations.
    #[serde(rename = "DE")]
    Germany,
}

impl Country {
    /// Returns every country in registration order.
    pub fn all() -> &'static [Country] {
        &[
            Self::Sweden,
            Self::Norway,
            Self::Finland,
            Self::Denmark,
            Self::Germany,
        ]
    }

    /// Countries tried by the any-country operations, in order.
    pub fn detectable() -> &'static [Country] {
        &[Self::Sweden, Self::Norway, Self::Finland, Self::Denmark]
    }

    /// ISO 3166-1 alpha-2 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sweden => "SE",
            Self::Norway => "NO",
            Self::Finland => "FI",
            Self::Denmark => "DK",
            Self::Germany => "DE",
        }
    }

    /// English country name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sweden => "Sweden",
            Self::Norway => "Norway",
            Self::Finland => "Finland",
            Self::Denmark => "Denmark",
            Self::Germany => "Germany",
        }
    }

    /// Run this country's classifier over a non-empty input.
    pub(crate) fn classify(
        &self,
        input: &str,
        today: NaiveDate,
    ) -> Result<Classified, RejectionKind> {
        if input.is_empty() {
            return Err(RejectionKind::MissingInput);
        }
        match self {
            Self::Sweden => sweden::classify(input, today),
            Self::Norway => norway::classify(input),
            Self::Finland => finland::classify(input),
            Self::Denmark => denmark::classify(input),
            Self::Germany => germany::classify(input),
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = IdentifierError;

    /// Parse an alpha-2 code or English name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| s.eq_ignore_ascii_case(c.code()) || s.eq_ignore_ascii_case(c.name()))
            .ok_or_else(|| IdentifierError::UnknownCountry(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order() {
        let codes: Vec<&str> = Country::all().iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["SE", "NO", "FI", "DK", "DE"]);
    }

    #[test]
    fn test_germany_is_not_detectable() {
        let codes: Vec<&str> = Country::detectable().iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["SE", "NO", "FI", "DK"]);
        assert!(!Country::detectable().contains(&Country::Germany));
    }

    #[test]
    fn test_code_roundtrip() {
        for country in Country::all() {
            assert_eq!(country.code().parse::<Country>().unwrap(), *country);
            assert_eq!(country.name().parse::<Country>().unwrap(), *country);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("se".parse::<Country>().unwrap(), Country::Sweden);
        assert_eq!("NORWAY".parse::<Country>().unwrap(), Country::Norway);
        assert_eq!("Dk".parse::<Country>().unwrap(), Country::Denmark);
    }

    #[test]
    fn test_parse_unknown() {
        for code in ["", "US", "Iceland", "S E"] {
            let err = code.parse::<Country>().unwrap_err();
            assert_eq!(err.kind(), RejectionKind::UnknownCountry);
        }
    }

    #[test]
    fn test_serde_uses_code() {
        for country in Country::all() {
            let json = serde_json::to_string(country).unwrap();
            assert_eq!(json, format!("\"{}\"", country.code()));
            let back: Country = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *country);
        }
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(Country::Finland.to_string(), "FI");
    }

    #[test]
    fn test_empty_input_is_missing() {
        let today = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        for country in Country::all() {
            assert_eq!(
                country.classify("", today).unwrap_err(),
                RejectionKind::MissingInput
            );
        }
    }
}
