//! Rules for deprecated and risky CSS.

use crate::rule;
use crate::types::{FileType, RuleDef, Severity};

pub(crate) static RULES: &[RuleDef] = &[
    rule! {
        id: "style/ie-expression",
        name: "CSS expression()",
        description: "IE-only dynamic property that executes script from a stylesheet.",
        severity: Severity::Critical,
        file_types: &[FileType::Style],
        regex: r"(?i)\bexpression\s*\(",
        keywords: &["expression"],
    },
    rule! {
        id: "style/ie-filter",
        name: "IE visual filter",
        description: "progid:DXImageTransform filters only ever worked in legacy Internet Explorer.",
        severity: Severity::High,
        file_types: &[FileType::Style],
        regex: r"(?i)progid:DXImageTransform",
        keywords: &["progid:"],
    },
    rule! {
        id: "style/behavior-property",
        name: "behavior: url() binding",
        description: "IE-only HTC behaviour binding that loads and runs external script.",
        severity: Severity::High,
        file_types: &[FileType::Style],
        regex: r"(?i)\bbehavior\s*:\s*url",
        keywords: &["behavior"],
    },
    rule! {
        id: "style/vendor-prefix",
        name: "Vendor-prefixed property",
        description: "Prefixed properties signal pre-Baseline features; check for an unprefixed equivalent.",
        severity: Severity::Low,
        file_types: &[FileType::Style],
        regex: r"(?i)-(?:webkit|moz|ms|o)-[a-z-]+",
        keywords: &["-webkit-", "-moz-", "-ms-", "-o-"],
    },
    rule! {
        id: "style/import-rule",
        name: "@import rule",
        description: "@import serialises stylesheet loading; prefer <link> elements.",
        severity: Severity::Low,
        file_types: &[FileType::Style],
        regex: r"(?i)@import\b",
        keywords: &["@import"],
    },
    rule! {
        id: "style/important-declaration",
        name: "!important declaration",
        description: "!important overrides the cascade and makes styles hard to maintain.",
        severity: Severity::Info,
        file_types: &[FileType::Style],
        regex: r"(?i)!\s*important\b",
        keywords: &["important"],
    },
];
