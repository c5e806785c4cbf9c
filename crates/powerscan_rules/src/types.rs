//! Rule definition types shared between the catalog and the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid severity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError {
    invalid_value: Box<str>,
}

impl ParseSeverityError {
    fn new(value: &str) -> Self {
        Self {
            invalid_value: value.into(),
        }
    }

    /// Returns the invalid value that caused the parse failure.
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        &self.invalid_value
    }
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid severity '{}': expected one of 'info', 'low', 'medium', 'high', 'critical'",
            self.invalid_value
        )
    }
}

impl std::error::Error for ParseSeverityError {}

/// How risky a flagged web feature is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational - worth knowing about, no action required.
    Info,
    /// Low risk - stylistic or legacy usage with broad browser support.
    Low,
    /// Medium risk - works today but degrades accessibility, performance, or security.
    Medium,
    /// High risk - deprecated behaviour that modern browsers may drop or restrict.
    High,
    /// Critical risk - removed from the standard or an outright security hazard.
    Critical,
}

impl Severity {
    /// All severity levels in ascending order.
    pub const ALL: [Self; 5] = [Self::Info, Self::Low, Self::Medium, Self::High, Self::Critical];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseSeverityError::new(s)),
        }
    }
}

/// Error returned when parsing an invalid file type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFileTypeError {
    invalid_value: Box<str>,
}

impl ParseFileTypeError {
    fn new(value: &str) -> Self {
        Self {
            invalid_value: value.into(),
        }
    }

    /// Returns the invalid value that caused the parse failure.
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        &self.invalid_value
    }
}

impl fmt::Display for ParseFileTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid file type '{}': expected one of 'markup', 'style', 'script', 'unknown'",
            self.invalid_value
        )
    }
}

impl std::error::Error for ParseFileTypeError {}

/// Extension-to-type lookup used by [`FileType::from_extension`].
const EXTENSION_TABLE: &[(&str, FileType)] = &[
    ("html", FileType::Markup),
    ("htm", FileType::Markup),
    ("xhtml", FileType::Markup),
    ("css", FileType::Style),
    ("js", FileType::Script),
    ("mjs", FileType::Script),
    ("cjs", FileType::Script),
];

/// The kind of web source a file contains, inferred from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// HTML and related markup (`.html`, `.htm`, `.xhtml`).
    Markup,
    /// Stylesheets (`.css`).
    Style,
    /// JavaScript sources (`.js`, `.mjs`, `.cjs`).
    Script,
    /// Anything else. Unknown files still receive type-agnostic rules.
    Unknown,
}

impl FileType {
    /// All recognisable file types, excluding `Unknown`.
    pub const KNOWN: [Self; 3] = [Self::Markup, Self::Style, Self::Script];

    /// Maps a file extension (without the dot) to its type tag.
    ///
    /// The lookup is case-insensitive; unrecognised extensions map to
    /// [`FileType::Unknown`].
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        let lower = ext.to_ascii_lowercase();
        EXTENSION_TABLE
            .iter()
            .find(|(e, _)| *e == lower)
            .map_or(Self::Unknown, |&(_, ty)| ty)
    }

    /// Returns the lowercase string identifier used in rule definitions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::Style => "style",
            Self::Script => "script",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the human-readable display name for this file type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Markup => "Markup (HTML)",
            Self::Style => "Stylesheet (CSS)",
            Self::Script => "Script (JavaScript)",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileType {
    type Err = ParseFileTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markup" => Ok(Self::Markup),
            "style" => Ok(Self::Style),
            "script" => Ok(Self::Script),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseFileTypeError::new(s)),
        }
    }
}

/// A single builtin rule definition for flagging a web feature.
#[derive(Debug, Clone)]
pub struct RuleDef {
    /// Unique identifier in `"category/name"` format (e.g. `"script/eval-usage"`).
    pub id: &'static str,
    /// Short human-readable name (e.g. `"eval() call"`).
    pub name: &'static str,
    /// Longer description of what this rule detects and why it matters.
    pub description: &'static str,
    /// Severity assigned to findings from this rule.
    pub severity: Severity,
    /// File types the rule applies to. An empty slice means every type.
    pub file_types: &'static [FileType],
    /// The regular expression source matched against file content.
    pub regex: &'static str,
    /// Case-insensitive keywords for Aho-Corasick pre-filtering. If non-empty,
    /// the rule is only tested against content containing at least one keyword.
    pub keywords: &'static [&'static str],
}

/// Builds a [`RuleDef`] literal with named fields.
#[macro_export]
macro_rules! rule {
    (
        id: $id:expr,
        name: $name:expr,
        description: $description:expr,
        severity: $severity:expr,
        file_types: $file_types:expr,
        regex: $regex:expr,
        keywords: $keywords:expr $(,)?
    ) => {
        $crate::RuleDef {
            id: $id,
            name: $name,
            description: $description,
            severity: $severity,
            file_types: $file_types,
            regex: $regex,
            keywords: $keywords,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_info_through_critical() {
        assert!(Severity::Info < Severity::Low);
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn severity_all_is_ascending() {
        let mut sorted = Severity::ALL;
        sorted.sort();
        assert_eq!(sorted, Severity::ALL);
    }

    #[test]
    fn severity_display_formats_as_lowercase_string() {
        assert_eq!(format!("{}", Severity::Info), "info");
        assert_eq!(format!("{}", Severity::Low), "low");
        assert_eq!(format!("{}", Severity::Medium), "medium");
        assert_eq!(format!("{}", Severity::High), "high");
        assert_eq!(format!("{}", Severity::Critical), "critical");
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("Critical".parse::<Severity>().unwrap(), Severity::Critical);
    }

    #[test]
    fn severity_parse_rejects_unknown_value() {
        let err = "urgent".parse::<Severity>().unwrap_err();
        assert_eq!(err.invalid_value(), "urgent");
    }

    #[test]
    fn file_type_from_extension_covers_known_extensions() {
        assert_eq!(FileType::from_extension("html"), FileType::Markup);
        assert_eq!(FileType::from_extension("htm"), FileType::Markup);
        assert_eq!(FileType::from_extension("xhtml"), FileType::Markup);
        assert_eq!(FileType::from_extension("css"), FileType::Style);
        assert_eq!(FileType::from_extension("js"), FileType::Script);
        assert_eq!(FileType::from_extension("mjs"), FileType::Script);
        assert_eq!(FileType::from_extension("cjs"), FileType::Script);
    }

    #[test]
    fn file_type_from_extension_is_case_insensitive() {
        assert_eq!(FileType::from_extension("HTML"), FileType::Markup);
        assert_eq!(FileType::from_extension("Css"), FileType::Style);
    }

    #[test]
    fn file_type_from_extension_defaults_to_unknown() {
        assert_eq!(FileType::from_extension("py"), FileType::Unknown);
        assert_eq!(FileType::from_extension(""), FileType::Unknown);
    }

    #[test]
    fn file_type_display_matches_as_str() {
        for ty in [FileType::Markup, FileType::Style, FileType::Script, FileType::Unknown] {
            assert_eq!(format!("{ty}"), ty.as_str());
        }
    }

    #[test]
    fn file_type_parses_from_lowercase_name() {
        assert_eq!("markup".parse::<FileType>().unwrap(), FileType::Markup);
        assert_eq!("STYLE".parse::<FileType>().unwrap(), FileType::Style);
        assert!("stylesheet".parse::<FileType>().is_err());
    }

    #[test]
    fn severity_serde_round_trips_as_lowercase() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, "\"high\"");
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::High);
    }
}
