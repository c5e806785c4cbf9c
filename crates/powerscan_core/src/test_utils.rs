//! Test utilities for `powerscan_core` (compiled only during testing).

use regex::Regex;

use crate::finding::{Finding, Span};
use crate::report::FileReport;
use crate::rule::{FileType, Rule, Severity};

fn base_rule(id: &str, regex: &str) -> Rule {
    Rule {
        id: id.into(),
        name: "Test Rule".into(),
        description: "Test".into(),
        severity: Severity::High,
        file_types: vec![].into(),
        regex: Regex::new(regex).unwrap(),
        keywords: vec![].into(),
    }
}

pub fn make_rule(id: &str, regex: &str, keywords: &[&str]) -> Rule {
    Rule {
        keywords: keywords.iter().map(|&s| s.into()).collect(),
        ..base_rule(id, regex)
    }
}

pub fn make_rule_for(id: &str, regex: &str, file_types: &[FileType]) -> Rule {
    Rule {
        file_types: file_types.to_vec().into(),
        ..base_rule(id, regex)
    }
}

pub fn make_rule_with_severity(id: &str, regex: &str, severity: Severity) -> Rule {
    Rule {
        severity,
        ..base_rule(id, regex)
    }
}

pub fn make_finding(rule_id: &str, file_name: &str) -> Finding {
    make_finding_at(rule_id, file_name, 1, 1)
}

pub fn make_finding_at(rule_id: &str, file_name: &str, line: u32, column: u32) -> Finding {
    Finding {
        rule_id: rule_id.into(),
        file_name: file_name.into(),
        span: Span::new(line, column, 0, 10),
        matched_text: "matched".into(),
        context_snippet: "context line".into(),
        severity: Severity::High,
    }
}

pub fn make_finding_with_severity(rule_id: &str, file_name: &str, severity: Severity) -> Finding {
    Finding {
        severity,
        ..make_finding(rule_id, file_name)
    }
}

pub fn make_report(name: &str, findings: usize, unreadable: bool) -> FileReport {
    FileReport {
        name: name.into(),
        file_type: crate::file::file_type_for_name(name),
        findings,
        unreadable,
    }
}
