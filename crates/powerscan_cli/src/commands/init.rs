//! Init command - writes a starter rule file.

use std::path::PathBuf;

use anyhow::Context as _;
use powerscan_core::RULES_FILENAME;
use powerscan_core::prelude::*;

use crate::ui::{colors, indicators, print_command_header};

/// Creates a starter `powerscan.toml` the user can extend.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn run(output: Option<PathBuf>, force: bool) -> super::Result<i32> {
    print_command_header("init");

    let path = output.unwrap_or_else(|| PathBuf::from(RULES_FILENAME));

    if path.exists() && !force {
        anyhow::bail!(
            "'{}' already exists - pass --force to overwrite it",
            path.display()
        );
    }

    starter_rules()
        .save(&path)
        .with_context(|| format!("writing '{}'", path.display()))?;

    println!(
        "{} {}",
        colors::success().apply_to(indicators::SUCCESS),
        colors::secondary().apply_to(format!("created {}", path.display()))
    );
    println!(
        "  {}",
        colors::muted().apply_to(format!(
            "scan with it: powerscan scan <files> --rules {}",
            path.display()
        ))
    );

    Ok(0)
}

/// A small catalog demonstrating the rule file format.
fn starter_rules() -> RulesFile {
    RulesFile {
        rules: vec![
            RuleSpec {
                id: "custom/console-log".to_string(),
                regex: r"\bconsole\.log\s*\(".to_string(),
                severity: Severity::Info,
                name: Some("console.log call".to_string()),
                description: Some("Debug logging left in shipped script.".to_string()),
                file_types: vec![FileType::Script],
                keywords: vec!["console.log".to_string()],
            },
            RuleSpec {
                id: "custom/absolute-position".to_string(),
                regex: r"(?i)position\s*:\s*absolute".to_string(),
                severity: Severity::Low,
                name: Some("absolute positioning".to_string()),
                description: Some("Layout that often breaks on small viewports.".to_string()),
                file_types: vec![FileType::Style],
                keywords: vec!["absolute".to_string()],
            },
        ],
    }
}
