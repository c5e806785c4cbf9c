//! Scan results, per-file reports, and summary statistics.
//!
//! A [`ScanResult`] is the complete, immutable output of one scan run. It is
//! fully serde-serializable; the serialized form is the contract consumed by
//! exporters and the dashboard's "last scan" view, so a persisted snapshot
//! is nothing more than a serialized `ScanResult`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use powerscan_rules::{FileType, Severity};
use serde::{Deserialize, Serialize};

use crate::finding::Finding;

/// Per-file summary entry in a scan result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Original filename.
    pub name: Box<str>,
    /// Type tag inferred from the filename extension.
    pub file_type: FileType,
    /// Number of findings the file produced.
    pub findings: usize,
    /// `true` if the file could not be decoded and was skipped.
    pub unreadable: bool,
}

/// Finding counts broken down by severity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// Findings at `info` severity.
    pub info: usize,
    /// Findings at `low` severity.
    pub low: usize,
    /// Findings at `medium` severity.
    pub medium: usize,
    /// Findings at `high` severity.
    pub high: usize,
    /// Findings at `critical` severity.
    pub critical: usize,
}

impl SeverityCounts {
    /// Increments the counter for one severity level.
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Info => self.info += 1,
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
            Severity::Critical => self.critical += 1,
        }
    }

    /// Returns the count for one severity level.
    #[must_use]
    pub const fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Info => self.info,
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Critical => self.critical,
        }
    }

    /// Returns the total across all severity levels.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.info + self.low + self.medium + self.high + self.critical
    }
}

/// Per-run summary statistics computed from the final finding sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Number of files that decoded and were scanned.
    pub files_scanned: usize,
    /// Number of files skipped as unreadable.
    pub files_unreadable: usize,
    /// Number of rules in the catalog this run evaluated.
    pub rules_evaluated: usize,
    /// Total number of findings across all files.
    pub total_findings: usize,
    /// Finding counts by severity level.
    pub by_severity: SeverityCounts,
    /// Finding counts by rule id, in stable (sorted) key order.
    pub by_rule: BTreeMap<Box<str>, usize>,
}

impl Summary {
    /// Computes summary statistics from the final finding sequence and
    /// per-file reports.
    #[must_use]
    pub fn compute(findings: &[Finding], files: &[FileReport], rules_evaluated: usize) -> Self {
        let mut by_severity = SeverityCounts::default();
        let mut by_rule: BTreeMap<Box<str>, usize> = BTreeMap::new();

        for finding in findings {
            by_severity.record(finding.severity);
            *by_rule.entry(finding.rule_id.as_ref().into()).or_insert(0) += 1;
        }

        let files_unreadable = files.iter().filter(|f| f.unreadable).count();

        Self {
            files_scanned: files.len() - files_unreadable,
            files_unreadable,
            rules_evaluated,
            total_findings: findings.len(),
            by_severity,
            by_rule,
        }
    }
}

/// The complete, immutable output of one scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// All findings, sorted by (file name, line, column) ascending.
    pub findings: Vec<Finding>,
    /// Per-file reports, sorted by file name.
    pub files: Vec<FileReport>,
    /// Aggregated statistics over the findings and files.
    pub summary: Summary,
    /// When the run completed.
    pub timestamp: DateTime<Utc>,
}

impl ScanResult {
    /// Returns `true` if the run produced at least one finding.
    #[must_use]
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Returns the `n` rules with the most findings, highest first.
    ///
    /// Ties break on rule id so the ranking is deterministic.
    #[must_use]
    pub fn top_rules(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .summary
            .by_rule
            .iter()
            .map(|(id, &count)| (id.as_ref(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Serialises the result to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialises a result from its JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_finding_at, make_finding_with_severity, make_report};

    #[test]
    fn severity_counts_record_and_get_agree() {
        let mut counts = SeverityCounts::default();
        counts.record(Severity::High);
        counts.record(Severity::High);
        counts.record(Severity::Info);

        assert_eq!(counts.get(Severity::High), 2);
        assert_eq!(counts.get(Severity::Info), 1);
        assert_eq!(counts.get(Severity::Critical), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn summary_counts_findings_by_severity() {
        let findings = vec![
            make_finding_with_severity("a/x", "a.js", Severity::High),
            make_finding_with_severity("a/y", "a.js", Severity::High),
            make_finding_with_severity("a/z", "a.js", Severity::Low),
        ];
        let files = vec![make_report("a.js", 3, false)];

        let summary = Summary::compute(&findings, &files, 10);

        assert_eq!(summary.by_severity.high, 2);
        assert_eq!(summary.by_severity.low, 1);
        assert_eq!(summary.total_findings, 3);
        assert_eq!(summary.rules_evaluated, 10);
    }

    #[test]
    fn summary_counts_findings_by_rule() {
        let findings = vec![
            make_finding_at("script/eval-usage", "a.js", 1, 1),
            make_finding_at("script/eval-usage", "b.js", 2, 1),
            make_finding_at("markup/font-element", "c.html", 1, 1),
        ];
        let files = vec![
            make_report("a.js", 1, false),
            make_report("b.js", 1, false),
            make_report("c.html", 1, false),
        ];

        let summary = Summary::compute(&findings, &files, 5);

        assert_eq!(summary.by_rule.get("script/eval-usage"), Some(&2));
        assert_eq!(summary.by_rule.get("markup/font-element"), Some(&1));
    }

    #[test]
    fn summary_separates_scanned_from_unreadable_files() {
        let files = vec![
            make_report("good.js", 0, false),
            make_report("bad.bin", 0, true),
            make_report("also-good.css", 0, false),
        ];

        let summary = Summary::compute(&[], &files, 5);

        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.files_unreadable, 1);
    }

    #[test]
    fn summary_of_empty_run_is_all_zeroes() {
        let summary = Summary::compute(&[], &[], 0);
        assert_eq!(summary.total_findings, 0);
        assert_eq!(summary.files_scanned, 0);
        assert_eq!(summary.by_severity, SeverityCounts::default());
        assert!(summary.by_rule.is_empty());
    }

    fn sample_result() -> ScanResult {
        let findings = vec![
            make_finding_at("script/eval-usage", "a.js", 2, 1),
            make_finding_at("script/eval-usage", "a.js", 5, 3),
            make_finding_at("markup/font-element", "b.html", 1, 1),
        ];
        let files = vec![make_report("a.js", 2, false), make_report("b.html", 1, false)];
        let summary = Summary::compute(&findings, &files, 27);
        ScanResult {
            findings,
            files,
            summary,
            timestamp: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default(),
        }
    }

    #[test]
    fn top_rules_ranks_by_count_descending() {
        let result = sample_result();
        let top = result.top_rules(5);
        assert_eq!(top[0], ("script/eval-usage", 2));
        assert_eq!(top[1], ("markup/font-element", 1));
    }

    #[test]
    fn top_rules_breaks_count_ties_by_id() {
        let findings = vec![
            make_finding_at("style/import-rule", "a.css", 1, 1),
            make_finding_at("markup/font-element", "b.html", 1, 1),
        ];
        let files = vec![make_report("a.css", 1, false), make_report("b.html", 1, false)];
        let summary = Summary::compute(&findings, &files, 2);
        let result = ScanResult {
            findings,
            files,
            summary,
            timestamp: Utc::now(),
        };

        let top = result.top_rules(2);
        assert_eq!(top[0].0, "markup/font-element");
        assert_eq!(top[1].0, "style/import-rule");
    }

    #[test]
    fn top_rules_truncates_to_n() {
        let result = sample_result();
        assert_eq!(result.top_rules(1).len(), 1);
    }

    #[test]
    fn json_round_trip_preserves_the_result() {
        let result = sample_result();
        let json = result.to_json_pretty().unwrap();
        let back = ScanResult::from_json(&json).unwrap();

        assert_eq!(back.findings.len(), result.findings.len());
        assert_eq!(back.findings[0].rule_id, result.findings[0].rule_id);
        assert_eq!(back.summary.total_findings, result.summary.total_findings);
        assert_eq!(back.summary.by_rule, result.summary.by_rule);
        assert_eq!(back.timestamp, result.timestamp);
    }

    #[test]
    fn serialized_finding_records_match_the_export_contract() {
        let result = sample_result();
        let json: serde_json::Value = serde_json::from_str(&result.to_json_pretty().unwrap()).unwrap();

        let record = &json["findings"][0];
        for key in [
            "rule_id",
            "file_name",
            "line",
            "column",
            "matched_text",
            "context_snippet",
            "severity",
        ] {
            assert!(!record[key].is_null(), "missing key '{key}'");
        }
        assert_eq!(json["summary"]["by_severity"]["high"], 3);
    }
}
