//! Rules for deprecated and risky JavaScript.

use crate::rule;
use crate::types::{FileType, RuleDef, Severity};

pub(crate) static RULES: &[RuleDef] = &[
    rule! {
        id: "script/eval-usage",
        name: "eval() call",
        description: "Evaluates arbitrary strings as code; blocks CSP and invites injection.",
        severity: Severity::High,
        file_types: &[FileType::Script],
        regex: r"\beval\s*\(",
        keywords: &["eval"],
    },
    rule! {
        id: "script/function-constructor",
        name: "Function constructor",
        description: "new Function() compiles strings to code with the same risks as eval().",
        severity: Severity::High,
        file_types: &[FileType::Script],
        regex: r"\bnew\s+Function\s*\(",
        keywords: &["Function"],
    },
    rule! {
        id: "script/document-write",
        name: "document.write() call",
        description: "Blocks parsing and is ignored entirely in many modern loading contexts.",
        severity: Severity::High,
        file_types: &[FileType::Script],
        regex: r"\bdocument\.write(?:ln)?\s*\(",
        keywords: &["document.write"],
    },
    rule! {
        id: "script/inner-html-assignment",
        name: "innerHTML assignment",
        description: "Assigning markup strings risks XSS; prefer textContent or DOM construction.",
        severity: Severity::Medium,
        file_types: &[FileType::Script],
        regex: r"\.innerHTML\s*=",
        keywords: &["innerHTML"],
    },
    rule! {
        id: "script/document-all",
        name: "document.all collection",
        description: "IE-era DOM collection, dropped from the standard; modern engines treat it as falsy.",
        severity: Severity::Critical,
        file_types: &[FileType::Script],
        regex: r"\bdocument\.all\b",
        keywords: &["document.all"],
    },
    rule! {
        id: "script/with-statement",
        name: "with statement",
        description: "Forbidden in strict mode; makes scope resolution unpredictable.",
        severity: Severity::High,
        file_types: &[FileType::Script],
        regex: r"\bwith\s*\(",
        keywords: &["with"],
    },
    rule! {
        id: "script/string-timer-argument",
        name: "String timer argument",
        description: "setTimeout/setInterval with a string argument is implied eval().",
        severity: Severity::Medium,
        file_types: &[FileType::Script],
        regex: r#"\bset(?:Timeout|Interval)\s*\(\s*["']"#,
        keywords: &["setTimeout", "setInterval"],
    },
    rule! {
        id: "script/escape-unescape",
        name: "escape()/unescape() call",
        description: "Deprecated URL escaping that corrupts non-ASCII input; use encodeURIComponent.",
        severity: Severity::Medium,
        file_types: &[FileType::Script],
        regex: r"\b(?:un)?escape\s*\(",
        keywords: &["escape"],
    },
    rule! {
        id: "script/var-declaration",
        name: "var declaration",
        description: "Function-scoped declaration; Baseline JavaScript prefers let and const.",
        severity: Severity::Info,
        file_types: &[FileType::Script],
        regex: r"\bvar\s+[A-Za-z_$]",
        keywords: &["var"],
    },
    rule! {
        id: "script/xml-http-request",
        name: "XMLHttpRequest usage",
        description: "Callback-based request API; fetch() is the Baseline replacement.",
        severity: Severity::Low,
        file_types: &[FileType::Script],
        regex: r"\bXMLHttpRequest\b",
        keywords: &["XMLHttpRequest"],
    },
];
