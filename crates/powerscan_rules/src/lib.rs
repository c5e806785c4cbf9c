//! Web-feature rule definitions for powerscan.
//!
//! This crate provides the builtin catalog of regex rules that flag risky,
//! deprecated, or non-Baseline web features in markup, stylesheet, and
//! script sources, together with the vocabulary types shared with the
//! scanning engine (`Severity`, `FileType`, `RuleDef`).

mod registry;
/// Builtin rules organised by source category.
pub mod rules;
mod types;

pub use registry::RuleRegistry;
pub use types::{FileType, ParseFileTypeError, ParseSeverityError, RuleDef, Severity};
