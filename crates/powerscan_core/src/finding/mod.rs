//! Types representing rule matches.
//!
//! The central type is [`Finding`]: one concrete match of one rule in one
//! scanned file, with its location, the matched text, and a bounded context
//! snippet for display. Findings are immutable once created and carry the
//! rule's severity as it was at match time, so later catalog edits never
//! retroactively alter a past scan.

mod span;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use powerscan_rules::Severity;
use serde::{Deserialize, Serialize};
pub use span::Span;

/// A single rule match in a scanned file.
///
/// Serializes flat - the span's line/column/byte offsets appear directly on
/// the finding record, which is the shape exporters and the dashboard read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the rule that matched (e.g. `"script/eval-usage"`).
    pub rule_id: Arc<str>,
    /// Name of the file that produced the match.
    pub file_name: Box<str>,
    /// Line, column, and byte offsets of the match.
    #[serde(flatten)]
    pub span: Span,
    /// The exact substring the rule's regex matched.
    pub matched_text: Box<str>,
    /// The containing source line, truncated around the match for display.
    pub context_snippet: Box<str>,
    /// Severity copied from the matching rule at match time.
    pub severity: Severity,
}

impl Finding {
    /// Returns the 1-indexed line number of the match.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.span.line
    }

    /// Returns the 1-indexed column number of the match.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.span.column
    }

    /// Compares by the canonical result order: file name, then line, then
    /// column, all ascending.
    #[must_use]
    pub fn position_cmp(&self, other: &Self) -> Ordering {
        self.file_name
            .cmp(&other.file_name)
            .then_with(|| self.span.line.cmp(&other.span.line))
            .then_with(|| self.span.column.cmp(&other.span.column))
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}]",
            self.file_name, self.span.line, self.span.column, self.rule_id, self.severity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_finding, make_finding_at};

    #[test]
    fn finding_line_and_column_come_from_span() {
        let finding = make_finding_at("script/eval-usage", "a.js", 4, 9);
        assert_eq!(finding.line(), 4);
        assert_eq!(finding.column(), 9);
    }

    #[test]
    fn position_cmp_orders_by_file_name_first() {
        let a = make_finding_at("script/eval-usage", "a.js", 9, 9);
        let b = make_finding_at("script/eval-usage", "b.js", 1, 1);
        assert_eq!(a.position_cmp(&b), Ordering::Less);
    }

    #[test]
    fn position_cmp_orders_by_line_within_a_file() {
        let a = make_finding_at("script/eval-usage", "a.js", 2, 9);
        let b = make_finding_at("script/eval-usage", "a.js", 3, 1);
        assert_eq!(a.position_cmp(&b), Ordering::Less);
    }

    #[test]
    fn position_cmp_orders_by_column_last() {
        let a = make_finding_at("script/eval-usage", "a.js", 2, 5);
        let b = make_finding_at("script/eval-usage", "a.js", 2, 9);
        assert_eq!(a.position_cmp(&b), Ordering::Less);
    }

    #[test]
    fn position_cmp_ignores_rule_id() {
        let a = make_finding_at("script/eval-usage", "a.js", 2, 5);
        let b = make_finding_at("markup/font-element", "a.js", 2, 5);
        assert_eq!(a.position_cmp(&b), Ordering::Equal);
    }

    #[test]
    fn display_shows_location_rule_and_severity() {
        let finding = make_finding("script/eval-usage", "src/app.js");
        let display = format!("{finding}");
        assert!(display.contains("src/app.js"));
        assert!(display.contains("script/eval-usage"));
        assert!(display.contains("high"));
    }

    #[test]
    fn serde_serializes_span_fields_flat() {
        let finding = make_finding_at("script/eval-usage", "a.js", 2, 1);
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["line"], 2);
        assert_eq!(json["column"], 1);
        assert_eq!(json["rule_id"], "script/eval-usage");
        assert!(json.get("span").is_none());
    }

    #[test]
    fn serde_round_trips_a_finding() {
        let finding = make_finding("markup/font-element", "index.html");
        let json = serde_json::to_string(&finding).unwrap();
        let back: Finding = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rule_id, finding.rule_id);
        assert_eq!(back.file_name, finding.file_name);
        assert_eq!(back.span, finding.span);
        assert_eq!(back.severity, finding.severity);
    }
}
