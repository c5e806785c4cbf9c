//! Builtin rules for web-feature scanning, organised by source category.

mod global;
mod markup;
mod script;
mod style;

use crate::types::RuleDef;

/// Returns all builtin rule tables, one per category, in declaration order.
///
/// The order is stable across runs: markup, style, script, then the
/// type-agnostic rules. Finding order for position ties depends on it.
#[must_use]
pub fn builtin_tables() -> Vec<&'static [RuleDef]> {
    vec![markup::RULES, style::RULES, script::RULES, global::RULES]
}
