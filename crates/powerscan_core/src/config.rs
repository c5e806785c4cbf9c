//! TOML rule catalog source.
//!
//! A rule file is an array of `[[rules]]` tables:
//!
//! ```toml
//! [[rules]]
//! id = "custom/jquery-usage"
//! regex = '\$\s*\('
//! severity = "low"
//! file_types = ["script"]
//! description = "jQuery-style selector call; check whether the dependency is still needed."
//! ```
//!
//! Loading is fail-fast: either every rule parses and compiles, or the whole
//! load fails with an error naming the offending rule. A scan never runs
//! against a partially-loaded catalog.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use powerscan_rules::{FileType, Severity};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::rule::{Rule, RuleCatalog};

/// A single rule declaration in a TOML rule file.
///
/// `id`, `regex`, and `severity` are required; the rest default to
/// permissive values (`name` falls back to the id, an empty `file_types`
/// list applies the rule to every file type, no keywords disables
/// pre-filtering for the rule).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Unique identifier, conventionally `"category/name"`.
    pub id: String,
    /// Regular expression matched against file content.
    pub regex: String,
    /// Severity assigned to findings from this rule.
    pub severity: Severity,
    /// Short human-readable name. Falls back to `id` if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Longer description. Falls back to `name` (or `id`) if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// File types the rule applies to. Empty means every type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_types: Vec<FileType>,
    /// Aho-Corasick pre-filter keywords. If non-empty, the rule is only
    /// tested against content that contains at least one keyword.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl RuleSpec {
    /// Compiles this declaration into a `Rule` ready for scanning.
    ///
    /// Returns `RuleError::InvalidRegex` if the regex is malformed.
    pub fn compile(&self) -> Result<Rule, RuleError> {
        let regex = Regex::new(&self.regex).map_err(|source| RuleError::InvalidRegex {
            id: self.id.clone(),
            source,
        })?;

        let name = self.name.clone().unwrap_or_else(|| self.id.clone());
        let description = self.description.clone().unwrap_or_else(|| name.clone());

        Ok(Rule {
            id: Arc::from(self.id.as_str()),
            name: name.into(),
            description: description.into(),
            severity: self.severity,
            file_types: self.file_types.clone().into(),
            regex,
            keywords: self.keywords.iter().map(|s| s.as_str().into()).collect(),
        })
    }
}

/// A rule catalog source loaded from (or saved to) a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesFile {
    /// Rule declarations in file order.
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

impl RulesFile {
    /// Loads a rule file from disk.
    ///
    /// Unlike optional overrides, the rule file is the catalog's entire
    /// behaviour, so a missing or unreadable file is an error.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = read_file(path)?;
        parse_toml(path, &content)
    }

    /// Parses a rule file from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        toml::from_str(content).map_err(|source| CatalogError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Atomically writes this rule file to disk as TOML.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let content = self.to_toml()?;
        write_file(path, &content)
    }

    /// Serialises this rule file to a pretty-printed TOML string.
    pub fn to_toml(&self) -> Result<String, CatalogError> {
        toml::to_string_pretty(self).map_err(|source| CatalogError::Serialize { source })
    }

    /// Compiles every declared rule, failing on the first invalid regex.
    pub fn compile(&self) -> Result<Vec<Rule>, RuleError> {
        self.rules.iter().map(RuleSpec::compile).collect()
    }

    /// Compiles the declarations into a ready-to-scan [`RuleCatalog`].
    pub fn into_catalog(self) -> Result<RuleCatalog, CatalogError> {
        let rules = self.compile()?;
        Ok(RuleCatalog::new(rules)?)
    }
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), CatalogError> {
    crate::fs_util::atomic_write(path, content).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_toml(path: &Path, content: &str) -> Result<RulesFile, CatalogError> {
    toml::from_str(content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Errors that can occur when reading, parsing, compiling, serialising, or
/// writing a rule catalog file.
///
/// Any of these aborts catalog construction before a scan starts; partial
/// catalogs are never produced.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The rule file could not be read from disk.
    #[error("failed to read rule file '{path}': {source}")]
    Read {
        /// Path to the rule file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rule file contained invalid TOML or was missing required fields.
    #[error("failed to parse rule file '{path}': {source}")]
    Parse {
        /// Path to the rule file that could not be parsed.
        path: PathBuf,
        /// The underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },

    /// The in-memory rule file could not be serialised to TOML.
    #[error("failed to serialise rule file: {source}")]
    Serialize {
        /// The underlying TOML serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// The rule file could not be written to disk.
    #[error("failed to write rule file '{path}': {source}")]
    Write {
        /// Path to the rule file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A declared rule failed to compile or collided with another rule.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl CatalogError {
    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Write { path, .. } => Some(path),
            Self::Serialize { .. } | Self::Rule(_) => None,
        }
    }
}
