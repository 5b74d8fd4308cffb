//! Fixture tests against the embedded Swedish bank rule table, plus table
//! loading from disk.

use std::io::Write;

use nordval_bank::{BankError, BankRuleMatcher, RuleTable, RuleTableError};
use nordval_core::checksum::mod10_check_digit;
use nordval_core::RejectionKind;
use proptest::prelude::*;

fn matcher() -> BankRuleMatcher {
    BankRuleMatcher::swedish().unwrap()
}

// ─── Identify ───────────────────────────────────────────────────────

#[test]
fn identify_known_clearing_numbers() {
    let m = matcher();
    let cases = [
        ("9561", "Avanza Bank"),
        ("9046", "Citibank"),
        ("9188", "Danske Bank"),
        ("6123", "Handelsbanken"),
        ("1119", "Nordea"),
        ("2030", "Nordea"),
        ("3311", "Nordea"),
        ("4123", "Nordea"),
        ("5482", "SEB"),
        ("9137", "SEB"),
        ("8123", "Swedbank"),
        ("8123-5", "Swedbank"),
    ];
    for (clearing, bank) in cases {
        let identity = m.identify(clearing).unwrap();
        assert_eq!(identity.name, bank, "clearing {clearing}");
    }
}

#[test]
fn identify_reports_clearing_of_first_matching_rule() {
    let m = matcher();
    let five = m.identify("8123-5").unwrap();
    assert_eq!(five.clearing_number, "81235");
    assert_eq!(five.formatted_clearing(), "812-35");

    let four = m.identify("8123").unwrap();
    assert_eq!(four.clearing_number, "8123");
    assert_eq!(four.formatted_clearing(), "8123");
}

#[test]
fn identify_accepts_full_account_number() {
    let identity = matcher().identify("8123-5 123 450 9").unwrap();
    assert_eq!(identity.name, "Swedbank");
    assert_eq!(identity.clearing_number, "81235");
    assert_eq!(identity.account_number.as_deref(), Some("0001234509"));
}

#[test]
fn identify_without_account_has_no_account_number() {
    let m = matcher();
    assert_eq!(m.identify("8123").unwrap().account_number, None);
    assert_eq!(m.identify("8123-5").unwrap().account_number, None);

    let nordea = m.identify("1110 100").unwrap();
    assert_eq!(nordea.clearing_number, "1110");
    assert_eq!(nordea.account_number.as_deref(), Some("0000100"));
}

#[test]
fn identify_rejects_unassigned_ranges() {
    let m = matcher();
    for clearing in ["0000", "1000", "9999", "9000", "9350", "9990"] {
        let err = m.identify(clearing).unwrap_err();
        assert_eq!(err.kind(), RejectionKind::StructuralMismatch, "clearing {clearing}");
        assert!(m.try_identify(clearing).is_none());
    }
}

#[test]
fn identify_input_errors() {
    let m = matcher();
    assert_eq!(m.identify("").unwrap_err().kind(), RejectionKind::MissingInput);
    assert_eq!(m.identify(" - ").unwrap_err().kind(), RejectionKind::NoDigitsPresent);
    assert_eq!(m.identify("81").unwrap_err().kind(), RejectionKind::StructuralMismatch);
}

// ─── Validate ───────────────────────────────────────────────────────

#[test]
fn validate_pads_account_to_rule_width() {
    let m = matcher();

    let nordea = m.validate("1110", "0000100").unwrap();
    assert_eq!(nordea.name, "Nordea");
    assert_eq!(nordea.account_number, "0000100");
    assert!(nordea.valid);

    let nordea_personal = m.validate("3300", "0009100").unwrap();
    assert_eq!(nordea_personal.name, "Nordea");
    assert_eq!(nordea_personal.account_number, "0000009100");

    let handelsbanken = m.validate("6123", "1234501").unwrap();
    assert_eq!(handelsbanken.name, "Handelsbanken");
    assert_eq!(handelsbanken.account_number, "001234501");
}

#[test]
fn validate_known_accounts() {
    let m = matcher();
    let cases = [
        ("6789", "123456789", "Handelsbanken", "6789"),
        ("8123-5", "1234509", "Swedbank", "81235"),
        ("8327", "1234509", "Swedbank", "8327"),
        ("4123", "1234519", "Nordea", "4123"),
        ("5482", "1234505", "SEB", "5482"),
        ("9188", "1234509", "Danske Bank", "9188"),
    ];
    for (clearing, account, bank, expected_clearing) in cases {
        let result = m.validate(clearing, account).unwrap();
        assert_eq!(result.name, bank, "{clearing} {account}");
        assert_eq!(result.clearing_number, expected_clearing);
        assert!(result.valid);
    }
}

#[test]
fn validate_rejects_bad_control_digits() {
    let m = matcher();
    for (clearing, account) in [("8123", "1234567"), ("8123-5", "7654321")] {
        let err = m.validate(clearing, account).unwrap_err();
        assert!(matches!(err, BankError::Invalid { .. }));
        assert_eq!(err.kind(), RejectionKind::ChecksumMismatch, "{clearing} {account}");
        assert!(m.try_validate(clearing, account).is_none());
    }
}

#[test]
fn validate_rejects_unknown_clearing_and_long_account() {
    let m = matcher();
    assert_eq!(
        m.validate("0000", "1234567").unwrap_err().kind(),
        RejectionKind::StructuralMismatch
    );
    assert_eq!(
        m.validate("1110", "12345678901").unwrap_err().kind(),
        RejectionKind::StructuralMismatch
    );
}

#[test]
fn validate_combined_numbers() {
    let m = matcher();
    let cases = [
        ("8123-5 123 450 9", "Swedbank", "81235", "0001234509"),
        ("6789123456789", "Handelsbanken", "6789", "123456789"),
        ("41231234519", "Nordea", "4123", "1234519"),
    ];
    for (number, bank, clearing, account) in cases {
        let result = m.validate_combined(number).unwrap();
        assert_eq!(result.name, bank, "{number}");
        assert_eq!(result.clearing_number, clearing);
        assert_eq!(result.account_number, account);
    }

    for number in ["81231234568", "8123-57654321"] {
        assert!(m.validate_combined(number).is_err(), "{number}");
        assert!(m.try_validate_combined(number).is_none());
    }
    assert_eq!(
        m.validate_combined("").unwrap_err().kind(),
        RejectionKind::MissingInput
    );
}

// ─── Assess ─────────────────────────────────────────────────────────

#[test]
fn assess_reports_validity_without_rejecting() {
    let m = matcher();

    let good = m.assess("1110", "100").unwrap();
    assert_eq!(good.name, "Nordea");
    assert_eq!(good.account_number, "0000100");
    assert!(good.valid);

    let bad = m.assess("8123", "1234567").unwrap();
    assert_eq!(bad.name, "Swedbank");
    assert!(!bad.valid);
}

#[test]
fn assess_rejects_unmatched_clearing() {
    let err = matcher().assess("9999", "1234567").unwrap_err();
    assert!(matches!(err, BankError::Unidentified { .. }));
    assert_eq!(err.kind(), RejectionKind::StructuralMismatch);
}

// ─── Custom tables ──────────────────────────────────────────────────

const OVERLAPPING: &str = r#"[
    {"name": "Alpha", "clearingRegex": "^5\\d{3}$", "numberRegex": "^\\d{11}$",
     "modulo": 11, "clearing": 4, "account": 7, "control": 10},
    {"name": "Beta", "clearingRegex": "^55\\d{2}$", "numberRegex": "^\\d{11}$",
     "modulo": 11, "clearing": 4, "account": 7, "control": 10}
]"#;

#[test]
fn overlapping_banks_are_ambiguous() {
    let m = BankRuleMatcher::new(RuleTable::from_json_str(OVERLAPPING).unwrap());
    assert_eq!(m.identify("5123").unwrap().name, "Alpha");
    assert_eq!(
        m.identify("5512").unwrap_err().kind(),
        RejectionKind::AmbiguousBankMatch
    );
}

#[test]
fn table_loads_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(OVERLAPPING.as_bytes()).unwrap();

    let table = RuleTable::from_path(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.bank_names(), ["Alpha", "Beta"]);
}

#[test]
fn table_loads_from_yaml_file() {
    let yaml = r#"
- name: Nordea
  clearingRegex: '^11\d{2}$'
  numberRegex: '^\d{11}$'
  modulo: 11
  clearing: 4
  account: 7
  control: 10
"#;
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let m = BankRuleMatcher::new(RuleTable::from_path(file.path()).unwrap());
    assert_eq!(m.validate("1110", "0000100").unwrap().name, "Nordea");
}

#[test]
fn table_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("banks.json");
    assert!(matches!(
        RuleTable::from_path(&missing),
        Err(RuleTableError::Io { .. })
    ));
}

#[test]
fn embedded_table_survives_record_export() {
    let table = RuleTable::swedish().unwrap();
    let json = serde_json::to_string(&table.to_records()).unwrap();
    let reloaded = RuleTable::from_json_str(&json).unwrap();
    assert_eq!(reloaded.to_records(), table.to_records());
}

// ─── Properties ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generated_swedbank_accounts_validate(
        clearing in "8[0-9]{4}",
        payload in "[0-9]{9}",
    ) {
        let check = mod10_check_digit(&payload).unwrap();
        let account = format!("{payload}{check}");

        let m = matcher();
        let result = m.validate(&clearing, &account).unwrap();
        prop_assert_eq!(&result.name, "Swedbank");
        prop_assert_eq!(&result.clearing_number, &clearing);
        prop_assert_eq!(&result.account_number, &account);

        let identity = m.identify(&clearing).unwrap();
        prop_assert_eq!(identity.name, result.name);
    }

    #[test]
    fn validate_never_panics(clearing in "\\PC{0,8}", account in "\\PC{0,14}") {
        let m = matcher();
        let _ = m.validate(&clearing, &account);
        let _ = m.validate_combined(&format!("{clearing}{account}"));
        let _ = m.identify(&clearing);
    }
}
