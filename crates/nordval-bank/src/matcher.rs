//! # Bank Rule Matcher
//!
//! Runs clearing and account numbers against a [`RuleTable`].
//!
//! ## Validation Pipeline
//!
//! For each rule, in table order:
//!
//! 1. The clearing segment must have exactly the rule's clearing width and
//!    match its clearing pattern.
//! 2. The account segment must be non-empty and no wider than the rule's
//!    account width. It is left-padded with zeros to that width.
//! 3. Clearing + padded account must match the rule's number pattern.
//! 4. The trailing `control` digits must pass the rule's Mod10 or Mod11
//!    check.
//!
//! The first rule that passes all four stages wins. When none does, the
//! error reports [`RejectionKind::ChecksumMismatch`] if any rule reached
//! stage 4 and [`RejectionKind::StructuralMismatch`] otherwise.
//!
//! Separators of any kind (spaces, dashes, dots) are ignored everywhere.

use nordval_core::digits::{last_n, strip_non_digits, zero_pad};
use nordval_core::RejectionKind;

use crate::account::{BankAccountResult, BankIdentity};
use crate::error::{BankError, RuleTableError};
use crate::rule::BankRule;
use crate::table::RuleTable;

/// Identifies banks and validates account numbers against a rule table.
#[derive(Debug, Clone)]
pub struct BankRuleMatcher {
    table: RuleTable,
}

impl BankRuleMatcher {
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// A matcher over the embedded Swedish table.
    pub fn swedish() -> Result<Self, RuleTableError> {
        RuleTable::swedish().map(Self::new)
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// The single bank whose clearing patterns match the leading digits of
    /// `text`.
    ///
    /// `text` may be a bare clearing number or a full account number. Every
    /// matching rule must name the same bank; the reported clearing number
    /// is taken from the first of them. Digits past the clearing number are
    /// reported as the zero-padded account number.
    ///
    /// # Errors
    ///
    /// [`BankError::Unidentified`] with `MissingInput`, `NoDigitsPresent`,
    /// `StructuralMismatch` (no rule matches) or `AmbiguousBankMatch`.
    pub fn identify(&self, text: &str) -> Result<BankIdentity, BankError> {
        let unidentified = |kind: RejectionKind| {
            tracing::debug!(kind = kind.as_str(), "bank not identified");
            BankError::Unidentified {
                input: text.to_string(),
                kind,
            }
        };

        let digits = digits_of(text).map_err(unidentified)?;
        let mut matching = self
            .table
            .rules()
            .iter()
            .filter(|rule| rule.matches_prefix(&digits));

        let first = matching
            .next()
            .ok_or_else(|| unidentified(RejectionKind::StructuralMismatch))?;
        if let Some(other) = matching.find(|rule| rule.name() != first.name()) {
            tracing::trace!(
                first = first.name(),
                other = other.name(),
                "clearing number matches more than one bank"
            );
            return Err(unidentified(RejectionKind::AmbiguousBankMatch));
        }

        let account_number = digits
            .get(first.clearing_len()..)
            .filter(|account| !account.is_empty())
            .map(|account| zero_pad(account, first.account_len()));
        Ok(BankIdentity {
            name: first.name().to_string(),
            clearing_number: digits.get(..first.clearing_len()).unwrap_or(&digits).to_string(),
            account_number,
        })
    }

    pub fn try_identify(&self, text: &str) -> Option<BankIdentity> {
        self.identify(text).ok()
    }

    /// Validate a clearing number and an account number given separately.
    ///
    /// # Errors
    ///
    /// [`BankError::Invalid`] when no rule accepts the pair.
    pub fn validate(&self, clearing: &str, account: &str) -> Result<BankAccountResult, BankError> {
        let input = format!("{clearing} {account}");
        if clearing.is_empty() && account.is_empty() {
            return Err(invalid(input, RejectionKind::MissingInput));
        }
        let clearing = strip_non_digits(clearing);
        let account = strip_non_digits(account);
        if clearing.is_empty() || account.is_empty() {
            return Err(invalid(input, RejectionKind::NoDigitsPresent));
        }

        let candidates = self
            .table
            .rules()
            .iter()
            .map(|rule| (rule, clearing.as_str(), account.as_str()));
        first_accepted(candidates).map_err(|kind| invalid(input, kind))
    }

    pub fn try_validate(&self, clearing: &str, account: &str) -> Option<BankAccountResult> {
        self.validate(clearing, account).ok()
    }

    /// Validate a combined clearing + account number.
    ///
    /// Each rule splits the digits at its own clearing width.
    ///
    /// # Errors
    ///
    /// [`BankError::Invalid`] when no rule accepts the number.
    pub fn validate_combined(&self, number: &str) -> Result<BankAccountResult, BankError> {
        let digits = digits_of(number).map_err(|kind| invalid(number.to_string(), kind))?;

        let candidates = self.table.rules().iter().filter_map(|rule| {
            let clearing = digits.get(..rule.clearing_len())?;
            let account = digits.get(rule.clearing_len()..)?;
            Some((rule, clearing, account))
        });
        first_accepted(candidates).map_err(|kind| invalid(number.to_string(), kind))
    }

    pub fn try_validate_combined(&self, number: &str) -> Option<BankAccountResult> {
        self.validate_combined(number).ok()
    }

    /// Match the clearing number to the first rule whose clearing pattern
    /// accepts its leading digits, and report whether the account passes
    /// that rule.
    ///
    /// Unlike [`validate`](Self::validate) a failing account is not an
    /// error; it yields `valid == false`.
    ///
    /// # Errors
    ///
    /// [`BankError::Unidentified`] when no rule matches the clearing number.
    pub fn assess(&self, clearing: &str, account: &str) -> Result<BankAccountResult, BankError> {
        let unidentified = |kind: RejectionKind| {
            tracing::debug!(kind = kind.as_str(), "clearing number not matched");
            BankError::Unidentified {
                input: clearing.to_string(),
                kind,
            }
        };

        let clearing_digits = digits_of(clearing).map_err(unidentified)?;
        let rule = self
            .table
            .rules()
            .iter()
            .find(|rule| rule.matches_prefix(&clearing_digits))
            .ok_or_else(|| unidentified(RejectionKind::StructuralMismatch))?;

        let account_digits = strip_non_digits(account);
        let account_number = zero_pad(&account_digits, rule.account_len());
        let number = format!("{clearing_digits}{account_number}");
        let valid = !account_digits.is_empty()
            && account_digits.len() <= rule.account_len()
            && rule.matches_number(&number)
            && rule.modulus().check(last_n(&number, rule.control_len()));

        Ok(BankAccountResult {
            name: rule.name().to_string(),
            clearing_number: clearing_digits,
            account_number,
            valid,
        })
    }
}

fn digits_of(text: &str) -> Result<String, RejectionKind> {
    if text.is_empty() {
        return Err(RejectionKind::MissingInput);
    }
    let digits = strip_non_digits(text);
    if digits.is_empty() {
        return Err(RejectionKind::NoDigitsPresent);
    }
    Ok(digits)
}

fn invalid(input: String, kind: RejectionKind) -> BankError {
    tracing::debug!(kind = kind.as_str(), "account number rejected");
    BankError::Invalid { input, kind }
}

/// Return the first candidate that passes, or the furthest stage reached.
fn first_accepted<'r, I>(candidates: I) -> Result<BankAccountResult, RejectionKind>
where
    I: Iterator<Item = (&'r BankRule, &'r str, &'r str)>,
{
    let mut furthest = RejectionKind::StructuralMismatch;
    for (rule, clearing, account) in candidates {
        match evaluate(rule, clearing, account) {
            Ok(result) => return Ok(result),
            Err(kind) => {
                tracing::trace!(bank = rule.name(), kind = kind.as_str(), "rule did not accept");
                if kind == RejectionKind::ChecksumMismatch {
                    furthest = kind;
                }
            }
        }
    }
    Err(furthest)
}

fn evaluate(rule: &BankRule, clearing: &str, account: &str) -> Result<BankAccountResult, RejectionKind> {
    if !rule.matches_clearing(clearing) || account.is_empty() || account.len() > rule.account_len() {
        return Err(RejectionKind::StructuralMismatch);
    }

    let account_number = zero_pad(account, rule.account_len());
    let number = format!("{clearing}{account_number}");
    if !rule.matches_number(&number) {
        return Err(RejectionKind::StructuralMismatch);
    }
    if !rule.modulus().check(last_n(&number, rule.control_len())) {
        return Err(RejectionKind::ChecksumMismatch);
    }

    Ok(BankAccountResult {
        name: rule.name().to_string(),
        clearing_number: clearing.to_string(),
        account_number,
        valid: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ambiguous() -> BankRuleMatcher {
        let json = r#"[
            {"name": "Alpha", "clearingRegex": "^12\\d{2}$", "numberRegex": "^\\d{11}$",
             "modulo": 11, "clearing": 4, "account": 7, "control": 10},
            {"name": "Beta", "clearingRegex": "^1[23]\\d{2}$", "numberRegex": "^\\d{11}$",
             "modulo": 11, "clearing": 4, "account": 7, "control": 10}
        ]"#;
        BankRuleMatcher::new(RuleTable::from_json_str(json).unwrap())
    }

    #[test]
    fn test_identify_ambiguous() {
        let matcher = ambiguous();
        let err = matcher.identify("1234").unwrap_err();
        assert_eq!(err.kind(), RejectionKind::AmbiguousBankMatch);
        assert_eq!(matcher.identify("1334").unwrap().name, "Beta");
    }

    #[test]
    fn test_validate_takes_first_rule_in_order() {
        // 1200-0000002 passes mod11 under both rules; Alpha comes first.
        let matcher = ambiguous();
        let result = matcher.validate("1200", "0000002").unwrap();
        assert_eq!(result.name, "Alpha");
    }

    #[test]
    fn test_input_stage_errors() {
        let matcher = ambiguous();
        assert_eq!(matcher.identify("").unwrap_err().kind(), RejectionKind::MissingInput);
        assert_eq!(matcher.identify("--").unwrap_err().kind(), RejectionKind::NoDigitsPresent);
        assert_eq!(matcher.validate("", "").unwrap_err().kind(), RejectionKind::MissingInput);
        assert_eq!(
            matcher.validate("1200", "abc").unwrap_err().kind(),
            RejectionKind::NoDigitsPresent
        );
        assert_eq!(
            matcher.validate_combined("x").unwrap_err().kind(),
            RejectionKind::NoDigitsPresent
        );
    }

    #[test]
    fn test_evaluate_stages() {
        let table = RuleTable::swedish().unwrap();
        let nordea = table
            .rules()
            .iter()
            .find(|r| r.name() == "Nordea" && r.matches_clearing("1110"))
            .unwrap();
        assert!(evaluate(nordea, "1110", "0000100").is_ok());
        assert_eq!(evaluate(nordea, "1110", "100").unwrap().account_number, "0000100");
        assert_eq!(evaluate(nordea, "1110", "0000101"), Err(RejectionKind::ChecksumMismatch));
        assert_eq!(evaluate(nordea, "1110", ""), Err(RejectionKind::StructuralMismatch));
        assert_eq!(evaluate(nordea, "1110", "12345678"), Err(RejectionKind::StructuralMismatch));
        assert_eq!(evaluate(nordea, "8123", "0000100"), Err(RejectionKind::StructuralMismatch));
    }
}
