//! # Bank Rules
//!
//! [`BankRuleRecord`] is the serialized form of one table row.
//! [`BankRule`] is the same row checked and with its patterns compiled.
//!
//! ## Record Layout
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `name` | Bank name reported on a match |
//! | `clearingRegex` | Pattern for the leading `clearing` digits |
//! | `numberRegex` | Pattern for clearing + zero-padded account |
//! | `modulo` | `10` (Luhn) or `11` (weighted) |
//! | `clearing` | Number of clearing digits |
//! | `account` | Number of account digits after zero padding |
//! | `control` | Trailing digits covered by the checksum |

use nordval_core::checksum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::RuleTableError;

/// Checksum algorithm applied to a rule's control segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modulus {
    Mod10,
    Mod11,
}

impl Modulus {
    /// The record value for this algorithm.
    pub fn id(&self) -> u32 {
        match self {
            Self::Mod10 => 10,
            Self::Mod11 => 11,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            10 => Some(Self::Mod10),
            11 => Some(Self::Mod11),
            _ => None,
        }
    }

    pub fn check(&self, digits: &str) -> bool {
        match self {
            Self::Mod10 => checksum::mod10(digits),
            Self::Mod11 => checksum::mod11(digits),
        }
    }
}

impl std::fmt::Display for Modulus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mod{}", self.id())
    }
}

/// One row of a bank rule table as stored in JSON or YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BankRuleRecord {
    pub name: String,
    pub clearing_regex: String,
    pub number_regex: String,
    pub modulo: u32,
    pub clearing: usize,
    pub account: usize,
    pub control: usize,
}

/// A compiled, checked bank rule.
#[derive(Debug, Clone)]
pub struct BankRule {
    name: String,
    clearing_regex: Regex,
    number_regex: Regex,
    modulus: Modulus,
    clearing: usize,
    account: usize,
    control: usize,
}

impl BankRule {
    /// Check a record and compile its patterns.
    ///
    /// # Errors
    ///
    /// - [`RuleTableError::InvalidPattern`] if either pattern fails to compile.
    /// - [`RuleTableError::UnsupportedModulus`] unless `modulo` is 10 or 11.
    /// - [`RuleTableError::InvalidLayout`] if a digit count is zero, the
    ///   control segment is longer than the whole number, or a Mod11 control
    ///   segment exceeds 11 digits.
    pub fn compile(record: &BankRuleRecord) -> Result<Self, RuleTableError> {
        let bank = &record.name;
        let layout = |reason: String| RuleTableError::InvalidLayout {
            bank: bank.clone(),
            reason,
        };

        let modulus = Modulus::from_id(record.modulo).ok_or_else(|| {
            RuleTableError::UnsupportedModulus {
                bank: bank.clone(),
                modulo: record.modulo,
            }
        })?;

        if record.clearing == 0 || record.account == 0 || record.control == 0 {
            return Err(layout(format!(
                "clearing ({}), account ({}) and control ({}) must all be positive",
                record.clearing, record.account, record.control
            )));
        }
        if record.control > record.clearing + record.account {
            return Err(layout(format!(
                "control ({}) exceeds clearing + account ({})",
                record.control,
                record.clearing + record.account
            )));
        }
        if modulus == Modulus::Mod11 && record.control > 11 {
            return Err(layout(format!(
                "mod11 covers at most 11 digits, control is {}",
                record.control
            )));
        }

        Ok(Self {
            name: record.name.clone(),
            clearing_regex: compile_pattern(bank, &record.clearing_regex)?,
            number_regex: compile_pattern(bank, &record.number_regex)?,
            modulus,
            clearing: record.clearing,
            account: record.account,
            control: record.control,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Number of clearing digits.
    pub fn clearing_len(&self) -> usize {
        self.clearing
    }

    /// Number of account digits after zero padding.
    pub fn account_len(&self) -> usize {
        self.account
    }

    pub fn control_len(&self) -> usize {
        self.control
    }

    /// Whether exactly `clearing` matches this rule's clearing pattern.
    pub fn matches_clearing(&self, clearing: &str) -> bool {
        clearing.len() == self.clearing && self.clearing_regex.is_match(clearing)
    }

    /// Whether the leading clearing digits of `digits` match.
    pub fn matches_prefix(&self, digits: &str) -> bool {
        digits
            .get(..self.clearing)
            .is_some_and(|prefix| self.clearing_regex.is_match(prefix))
    }

    pub fn matches_number(&self, number: &str) -> bool {
        self.number_regex.is_match(number)
    }

    /// Back to the serialized form.
    pub fn to_record(&self) -> BankRuleRecord {
        BankRuleRecord {
            name: self.name.clone(),
            clearing_regex: self.clearing_regex.as_str().to_string(),
            number_regex: self.number_regex.as_str().to_string(),
            modulo: self.modulus.id(),
            clearing: self.clearing,
            account: self.account,
            control: self.control,
        }
    }
}

fn compile_pattern(bank: &str, pattern: &str) -> Result<Regex, RuleTableError> {
    Regex::new(pattern).map_err(|source| RuleTableError::InvalidPattern {
        bank: bank.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}
