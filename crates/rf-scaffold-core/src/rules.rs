//! Assertion rule table.
//!
//! A small, ordered table mapping a case code to a (path expression,
//! expected literal) pair. When a generated file-check case carries a code
//! present in the table, the suite gets an extra `arrest_result` step for
//! that rule. The coupling is positional, not content-based: the table keys
//! on case codes, never on file names. It is loaded from TOML so the binding
//! is injected configuration rather than literals buried in the writer.

use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// The built-in table, carrying the four legacy entries (codes 0101-0104).
const DEFAULT_RULES: &str = include_str!("../data/default_rules.toml");

/// Errors that can occur while loading a rule table.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid rule code '{0}': must be exactly four digits")]
    InvalidCode(String),
    #[error("duplicate rule code '{0}'")]
    DuplicateCode(String),
}

/// One positional assertion: applied when a case carries `code`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssertionRule {
    /// Four-digit case code this rule binds to.
    pub code: String,
    /// Dotted path expression evaluated against the parsed file content.
    pub path: String,
    /// Expected value, compared after stringification.
    pub expected: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFile {
    #[serde(default)]
    rule: Vec<AssertionRule>,
}

/// Ordered assertion rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<AssertionRule>,
}

impl RuleTable {
    /// The built-in table with the four legacy entries.
    ///
    /// # Errors
    /// Returns an error only if the embedded table is malformed.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::parse(DEFAULT_RULES)
    }

    /// Load a table from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// contains a malformed or duplicate code.
    pub fn load(path: &Path) -> Result<Self, RuleError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a table from TOML text.
    ///
    /// # Errors
    /// Returns an error on invalid TOML, malformed codes, or duplicates.
    pub fn parse(content: &str) -> Result<Self, RuleError> {
        let file: RuleFile = toml::from_str(content)?;

        let code_format = Regex::new(r"^[0-9]{4}$")
            .map_err(|e| RuleError::InvalidCode(e.to_string()))?;
        let mut seen = std::collections::HashSet::new();
        for rule in &file.rule {
            if !code_format.is_match(&rule.code) {
                return Err(RuleError::InvalidCode(rule.code.clone()));
            }
            if !seen.insert(rule.code.as_str()) {
                return Err(RuleError::DuplicateCode(rule.code.clone()));
            }
        }

        Ok(Self { rules: file.rule })
    }

    /// Look up the rule bound to a case code, with its table position.
    ///
    /// The position drives the suite variable letter, so the default table
    /// renders `${a}` through `${d}` exactly as the legacy generator did.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<(usize, &AssertionRule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.code == code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Suite variable name for the rule at `position`: `a`..`z`, then `v26`,
/// `v27`, ... past the alphabet.
#[must_use]
pub fn var_name(position: usize) -> String {
    u8::try_from(position)
        .ok()
        .filter(|p| *p < 26)
        .map_or_else(
            || format!("v{position}"),
            |p| char::from(b'a' + p).to_string(),
        )
}
