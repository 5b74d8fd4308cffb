//! Results of bank identification and account validation.

use serde::{Deserialize, Serialize};

/// The bank behind a clearing number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankIdentity {
    pub name: String,
    /// Clearing digits of the first matching rule, separators removed.
    pub clearing_number: String,
    /// Digits after the clearing number, zero-padded to the rule's account
    /// width. Absent when the input held only a clearing number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

impl BankIdentity {
    pub fn formatted_clearing(&self) -> String {
        format_clearing(&self.clearing_number)
    }
}

/// A clearing + account number matched against a bank rule.
///
/// `account_number` is zero-padded to the rule's account width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountResult {
    pub name: String,
    pub clearing_number: String,
    pub account_number: String,
    pub valid: bool,
}

impl BankAccountResult {
    pub fn formatted_clearing(&self) -> String {
        format_clearing(&self.clearing_number)
    }
}

/// Display form of a clearing number: four digits as is, five digits with
/// a dash after the third (`812-35`).
pub fn format_clearing(clearing: &str) -> String {
    match (clearing.len(), clearing.get(..3), clearing.get(3..)) {
        (5, Some(head), Some(tail)) => format!("{head}-{tail}"),
        _ => clearing.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clearing() {
        assert_eq!(format_clearing("8123"), "8123");
        assert_eq!(format_clearing("81235"), "812-35");
        assert_eq!(format_clearing("80000"), "800-00");
        assert_eq!(format_clearing("812"), "812");
    }

    #[test]
    fn test_result_serialization() {
        let result = BankAccountResult {
            name: "Nordea".to_string(),
            clearing_number: "1110".to_string(),
            account_number: "0000100".to_string(),
            valid: true,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["clearingNumber"], "1110");
        assert_eq!(json["accountNumber"], "0000100");
        assert_eq!(json["valid"], true);
    }

    #[test]
    fn test_identity_formatted_clearing() {
        let identity = BankIdentity {
            name: "Swedbank".to_string(),
            clearing_number: "87384".to_string(),
            account_number: None,
        };
        assert_eq!(identity.formatted_clearing(), "873-84");
    }

    #[test]
    fn test_identity_omits_missing_account_number() {
        let bare = BankIdentity {
            name: "Nordea".to_string(),
            clearing_number: "1110".to_string(),
            account_number: None,
        };
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("accountNumber").is_none());

        let full = BankIdentity {
            account_number: Some("0000100".to_string()),
            ..bare
        };
        let json = serde_json::to_value(&full).unwrap();
        assert_eq!(json["accountNumber"], "0000100");
    }
}
