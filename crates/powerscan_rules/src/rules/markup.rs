//! Rules for deprecated and risky HTML markup.

use crate::rule;
use crate::types::{FileType, RuleDef, Severity};

pub(crate) static RULES: &[RuleDef] = &[
    rule! {
        id: "markup/marquee-element",
        name: "<marquee> element",
        description: "Non-standard scrolling text element, removed from the HTML standard.",
        severity: Severity::High,
        file_types: &[FileType::Markup],
        regex: r"(?i)<marquee\b",
        keywords: &["<marquee"],
    },
    rule! {
        id: "markup/blink-element",
        name: "<blink> element",
        description: "Non-standard blinking text element with no modern browser support.",
        severity: Severity::High,
        file_types: &[FileType::Markup],
        regex: r"(?i)<blink\b",
        keywords: &["<blink"],
    },
    rule! {
        id: "markup/applet-element",
        name: "<applet> element",
        description: "Java applet embedding, removed from HTML and unsupported everywhere.",
        severity: Severity::Critical,
        file_types: &[FileType::Markup],
        regex: r"(?i)<applet\b",
        keywords: &["<applet"],
    },
    rule! {
        id: "markup/font-element",
        name: "<font> element",
        description: "Presentational font markup deprecated in favour of CSS.",
        severity: Severity::Medium,
        file_types: &[FileType::Markup],
        regex: r"(?i)<font\b",
        keywords: &["<font"],
    },
    rule! {
        id: "markup/center-element",
        name: "<center> element",
        description: "Presentational centring markup deprecated in favour of CSS.",
        severity: Severity::Medium,
        file_types: &[FileType::Markup],
        regex: r"(?i)<center\b",
        keywords: &["<center"],
    },
    rule! {
        id: "markup/big-element",
        name: "<big> element",
        description: "Presentational sizing markup deprecated in favour of CSS.",
        severity: Severity::Low,
        file_types: &[FileType::Markup],
        regex: r"(?i)<big\b",
        keywords: &["<big"],
    },
    rule! {
        id: "markup/frameset",
        name: "Frame-based layout",
        description: "Frames and framesets are obsolete in HTML5 and break navigation and accessibility.",
        severity: Severity::High,
        file_types: &[FileType::Markup],
        regex: r"(?i)<frame(?:set)?\b",
        keywords: &["<frame"],
    },
    rule! {
        id: "markup/inline-event-handler",
        name: "Inline event handler attribute",
        description: "Inline on* handlers mix behaviour with markup and defeat content security policies.",
        severity: Severity::Medium,
        file_types: &[FileType::Markup],
        regex: r"(?i)\bon(?:click|dblclick|load|unload|error|mouseover|mouseout|submit|focus|blur|change|keydown|keyup|input)\s*=",
        keywords: &["onclick", "ondblclick", "onload", "onunload", "onerror", "onmouseover",
                    "onmouseout", "onsubmit", "onfocus", "onblur", "onchange", "onkeydown",
                    "onkeyup", "oninput"],
    },
    rule! {
        id: "markup/target-blank",
        name: "target=\"_blank\" link",
        description: "New-tab links need rel=\"noopener\" to stop the opened page scripting its opener.",
        severity: Severity::Low,
        file_types: &[FileType::Markup],
        regex: r#"(?i)target\s*=\s*["']_blank["']"#,
        keywords: &["_blank"],
    },
];
