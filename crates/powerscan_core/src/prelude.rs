//! Convenience re-exports of the most commonly used types.

pub use crate::config::{CatalogError, RuleSpec, RulesFile};
pub use crate::error::RuleError;
pub use crate::file::{DecodeError, ScannedFile, SourceFile};
pub use crate::finding::{Finding, Span};
pub use crate::report::{FileReport, ScanResult, SeverityCounts, Summary};
pub use crate::rule::{FileType, Rule, RuleCatalog, Severity};
pub use crate::scanner::Scanner;
