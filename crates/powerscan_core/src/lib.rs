//! Core web-feature scanning engine for powerscan.
//!
//! This crate applies a catalog of regex rules to web-source files (markup,
//! stylesheets, scripts) and aggregates the matches into a deterministic,
//! serializable scan result. It is designed to be embedded in CLIs, upload
//! handlers, and report exporters.
//!
//! # Main Types
//!
//! - [`Scanner`] - Runs the catalog against files and produces a [`ScanResult`]
//! - [`RuleCatalog`] - Compiled rules with keyword pre-filtering and type dispatch
//! - [`Finding`] - One concrete rule match with location and context
//! - [`RulesFile`] - TOML rule catalog source loaded from `powerscan.toml`
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors that library
//! consumers can match on:
//!
//! - [`RuleError`] - Rule compilation failures (bad regex, duplicate id)
//! - [`CatalogError`] - Catalog loading/parsing failures
//!
//! Catalog failures are fail-fast: either every rule loads or the whole load
//! errors. Per-file problems during a scan never fail the run; they surface
//! as `unreadable` markers on the per-file reports.
//!
//! The CLI crate (`powerscan_cli`) uses `anyhow` for error propagation.

/// Binary content detection heuristics.
pub mod binary;
/// TOML rule catalog source loaded from `powerscan.toml`.
pub mod config;
/// Error types for rule compilation.
pub mod error;
/// Scan input files and file-type inference.
pub mod file;
/// Types representing rule matches and their locations.
pub mod finding;
/// Filesystem helpers for atomic writes.
pub mod fs_util;
/// Common re-exports for internal use.
pub mod prelude;
/// Scan results, per-file reports, and summary statistics.
pub mod report;
/// Compiled rules and the keyword-indexed catalog.
pub mod rule;
/// The scanning engine that matches rules against file content.
pub mod scanner;
#[cfg(test)]
pub(crate) mod test_utils;
/// Text utilities for line boundaries and context snippets.
pub mod text;

pub use config::{CatalogError, RuleSpec, RulesFile};
pub use error::RuleError;
pub use file::{DecodeError, ScannedFile, SourceFile, file_type_for_name};
pub use finding::{Finding, Span};
pub use report::{FileReport, ScanResult, SeverityCounts, Summary};
pub use rule::{FileType, Rule, RuleCatalog, Severity};
pub use scanner::{IGNORE_MARKER, Scanner};

/// Default filename for a user rule catalog.
pub const RULES_FILENAME: &str = "powerscan.toml";
