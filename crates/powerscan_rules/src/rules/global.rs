//! Type-agnostic rules applied to every scanned file.

use crate::rule;
use crate::types::{RuleDef, Severity};

pub(crate) static RULES: &[RuleDef] = &[
    rule! {
        id: "global/insecure-url",
        name: "Plaintext http:// URL",
        description: "Plain HTTP subresources trigger mixed-content blocking on secure pages.",
        severity: Severity::Medium,
        file_types: &[],
        regex: r#"http://[A-Za-z0-9][^\s"'<>)]*"#,
        keywords: &["http://"],
    },
    rule! {
        id: "global/base64-data-uri",
        name: "Large base64 data URI",
        description: "Large inlined base64 payloads bloat the document and defeat caching.",
        severity: Severity::Low,
        file_types: &[],
        regex: r"data:[a-z]+/[A-Za-z0-9.+-]+;base64,[A-Za-z0-9+/=]{64,}",
        keywords: &["base64"],
    },
];
