//! Web-feature scanning engine.

use std::sync::Arc;

use chrono::Utc;
use rayon::prelude::*;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::file::{ScannedFile, SourceFile, file_type_for_name};
use crate::finding::{Finding, Span};
use crate::report::{FileReport, ScanResult, Summary};
use crate::rule::{FileType, Rule, RuleCatalog, Severity};
use crate::text::{find_line_end, find_line_start, snippet_around};

/// Lines containing this marker are excluded from scanning.
pub const IGNORE_MARKER: &str = "powerscan:ignore";

/// Maximum number of characters in a finding's context snippet.
const MAX_SNIPPET_CHARS: usize = 200;

/// Scanning engine that matches file content against a [`RuleCatalog`].
///
/// The scanner uses Aho-Corasick keyword pre-filtering to skip rules whose
/// keywords are absent from the content, then runs full regex matching only
/// on the rules that could plausibly match and that apply to the file's
/// type. A batch [`scan`](Scanner::scan) fans out per file with rayon and
/// always returns the same, canonically ordered result for the same input.
pub struct Scanner {
    catalog: RuleCatalog,
    severity_threshold: Option<Severity>,
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("rules", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

impl Scanner {
    /// Creates a scanner with no severity threshold (all severities reported).
    #[must_use]
    pub const fn new(catalog: RuleCatalog) -> Self {
        Self {
            catalog,
            severity_threshold: None,
        }
    }

    /// Sets a minimum severity threshold. Rules below this level are skipped.
    #[must_use]
    pub const fn with_severity_threshold(mut self, severity: Severity) -> Self {
        self.severity_threshold = Some(severity);
        self
    }

    /// Returns the catalog this scanner runs.
    #[must_use]
    pub const fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Returns the total number of rules in the catalog.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.catalog.len()
    }

    /// Looks up a rule by its ID string.
    #[must_use]
    pub fn get_rule(&self, id: &str) -> Option<&Rule> {
        self.catalog.get(id)
    }

    /// Scans a batch of uploaded files and returns the complete result.
    ///
    /// Files are processed in parallel; each worker runs all applicable
    /// rules against its one file and collects a local finding list, merged
    /// afterwards. The final sequence is sorted by (file name, line, column)
    /// ascending - equal positions keep catalog declaration order - so the
    /// output is deterministic regardless of scheduling. A file that cannot
    /// be decoded degrades to an `unreadable` report instead of failing the
    /// run.
    #[must_use]
    pub fn scan(&self, sources: &[SourceFile]) -> ScanResult {
        let outcomes: Vec<(FileReport, Vec<Finding>)> =
            sources.par_iter().map(|source| self.scan_source(source)).collect();

        let mut findings = Vec::new();
        let mut files = Vec::with_capacity(outcomes.len());
        for (report, file_findings) in outcomes {
            findings.extend(file_findings);
            files.push(report);
        }

        sort_findings(&mut findings);
        files.sort_by(|a, b| a.name.cmp(&b.name));

        let summary = Summary::compute(&findings, &files, self.catalog.len());

        ScanResult {
            findings,
            files,
            summary,
            timestamp: Utc::now(),
        }
    }

    /// Scans one source file, producing its report and local finding list.
    fn scan_source(&self, source: &SourceFile) -> (FileReport, Vec<Finding>) {
        let file_type = file_type_for_name(&source.name);

        match ScannedFile::decode(source) {
            Ok(file) => {
                let mut findings = Vec::new();
                self.run_rules(&file.name, file.file_type, &file.content, &mut findings);

                let report = FileReport {
                    name: source.name.as_str().into(),
                    file_type,
                    findings: findings.len(),
                    unreadable: false,
                };
                (report, findings)
            }
            Err(_error) => {
                #[cfg(feature = "tracing")]
                debug!(file = %source.name, error = %_error, "skipping unreadable file");

                let report = FileReport {
                    name: source.name.as_str().into(),
                    file_type,
                    findings: 0,
                    unreadable: true,
                };
                (report, Vec::new())
            }
        }
    }

    /// Scans already-decoded content and returns all findings.
    ///
    /// The file type is inferred from `name`. Findings arrive in catalog
    /// declaration order, match offsets ascending within each rule.
    #[must_use]
    pub fn scan_content(&self, name: &str, content: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        self.scan_content_into(name, content, &mut findings);
        findings
    }

    /// Scans already-decoded content, appending results to an existing vector.
    pub fn scan_content_into(&self, name: &str, content: &str, findings: &mut Vec<Finding>) {
        self.run_rules(name, file_type_for_name(name), content, findings);
    }

    fn run_rules(&self, name: &str, file_type: FileType, content: &str, findings: &mut Vec<Finding>) {
        let rules_to_check = self.select_rules_to_run(content);

        #[cfg(feature = "tracing")]
        {
            let active_count = rules_to_check.iter().filter(|&&b| b).count();
            trace!(rules_checked = active_count, size = content.len(), "scanning");
        }

        for (idx, &should_check) in rules_to_check.iter().enumerate() {
            if !should_check {
                continue;
            }

            let Some(rule) = self.catalog.get_by_index(idx) else {
                continue;
            };

            if !self.should_run_rule(rule, file_type) {
                continue;
            }

            scan_with_rule_into(content, name, rule, findings);
        }
    }

    fn select_rules_to_run(&self, content: &str) -> Vec<bool> {
        let mut should_run = vec![false; self.catalog.len()];

        for &idx in self.catalog.rules_without_keywords() {
            should_run[idx] = true;
        }

        if let Some(automaton) = self.catalog.keyword_automaton() {
            for mat in automaton.find_iter(content) {
                let keyword_idx = mat.pattern().as_usize();
                for &rule_idx in &self.catalog.keyword_to_rules()[keyword_idx] {
                    should_run[rule_idx] = true;
                }
            }
        }

        should_run
    }

    fn should_run_rule(&self, rule: &Rule, file_type: FileType) -> bool {
        if !rule.applies_to(file_type) {
            return false;
        }

        if let Some(threshold) = self.severity_threshold
            && rule.severity < threshold
        {
            return false;
        }

        true
    }
}

fn scan_with_rule_into(content: &str, name: &str, rule: &Rule, findings: &mut Vec<Finding>) {
    for mat in rule.regex.find_iter(content) {
        if is_line_ignored(content, mat.start()) {
            continue;
        }

        let finding = create_finding(content, name, rule, mat.start(), mat.end());

        #[cfg(feature = "tracing")]
        trace!(rule_id = %rule.id, line = finding.span.line, "match");

        findings.push(finding);
    }
}

fn create_finding(content: &str, name: &str, rule: &Rule, byte_start: usize, byte_end: usize) -> Finding {
    let matched_text = &content[byte_start..byte_end];
    // Regex match indices are always valid UTF-8 boundaries because
    // the regex crate operates on valid &str and returns character-aligned offsets.
    #[expect(
        clippy::expect_used,
        reason = "regex match indices are always valid UTF-8 boundaries"
    )]
    let span = Span::from_byte_range(content, byte_start, byte_end)
        .expect("regex match indices are always valid UTF-8 boundaries");
    let context_snippet = extract_snippet(content, byte_start);

    Finding {
        rule_id: Arc::clone(&rule.id),
        file_name: name.into(),
        span,
        matched_text: matched_text.into(),
        context_snippet: context_snippet.into(),
        severity: rule.severity,
    }
}

fn extract_snippet(content: &str, byte_start: usize) -> String {
    let line_start = find_line_start(content, byte_start);
    let line_end = find_line_end(content, byte_start);
    let line = &content[line_start..line_end];

    snippet_around(line, byte_start - line_start, MAX_SNIPPET_CHARS)
}

fn is_line_ignored(content: &str, byte_offset: usize) -> bool {
    let line_start = find_line_start(content, byte_offset);
    let line_end = find_line_end(content, byte_offset);
    content[line_start..line_end].contains(IGNORE_MARKER)
}

/// Sorts findings into the canonical (file name, line, column) order.
///
/// The sort is stable: findings at equal positions keep the order they were
/// generated in, which is catalog declaration order.
fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by(Finding::position_cmp);
}
