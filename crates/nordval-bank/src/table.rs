//! # Rule Table Loading
//!
//! A [`RuleTable`] is an ordered, non-empty sequence of compiled
//! [`BankRule`]s. Loading checks every record up front; one bad record
//! rejects the whole table.
//!
//! Files ending in `.yaml` or `.yml` are read as YAML, everything else as
//! JSON. The Swedish table is embedded at compile time and available via
//! [`RuleTable::swedish()`].

use std::path::Path;

use crate::error::RuleTableError;
use crate::rule::{BankRule, BankRuleRecord};

const SWEDISH_RULES: &str = include_str!("../data/banks.se.json");

/// An ordered, immutable set of bank rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<BankRule>,
}

impl RuleTable {
    /// Compile a table from already-deserialized records.
    pub fn from_records(records: &[BankRuleRecord]) -> Result<Self, RuleTableError> {
        if records.is_empty() {
            return Err(RuleTableError::Empty);
        }
        let rules = records
            .iter()
            .map(BankRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn from_json_str(json: &str) -> Result<Self, RuleTableError> {
        let records: Vec<BankRuleRecord> = serde_json::from_str(json)?;
        Self::from_records(&records)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, RuleTableError> {
        let records: Vec<BankRuleRecord> = serde_yaml::from_str(yaml)?;
        Self::from_records(&records)
    }

    /// Load a table file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// [`RuleTableError::Io`] if the file cannot be read, otherwise any
    /// parse or validation error for its contents.
    pub fn from_path(path: &Path) -> Result<Self, RuleTableError> {
        let content = std::fs::read_to_string(path).map_err(|source| RuleTableError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let table = match ext {
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            _ => Self::from_json_str(&content)?,
        };

        tracing::info!(
            path = %path.display(),
            rules = table.len(),
            "bank rule table loaded"
        );
        Ok(table)
    }

    /// The embedded Swedish clearing number table.
    pub fn swedish() -> Result<Self, RuleTableError> {
        let table = Self::from_json_str(SWEDISH_RULES)?;
        tracing::debug!(rules = table.len(), "embedded Swedish bank rule table loaded");
        Ok(table)
    }

    pub fn rules(&self) -> &[BankRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false`; an empty table cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Distinct bank names in table order.
    pub fn bank_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !names.contains(&rule.name()) {
                names.push(rule.name());
            }
        }
        names
    }

    /// The table as serializable records.
    pub fn to_records(&self) -> Vec<BankRuleRecord> {
        self.rules.iter().map(BankRule::to_record).collect()
    }
}
