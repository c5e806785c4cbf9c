//! Rules command - lists the active rule catalog.

use std::path::Path;

use anyhow::Context as _;
use powerscan_core::prelude::*;

use crate::RulesArgs;
use crate::ui::{colors, print_command_header, severity_indicator, truncate_with_ellipsis};

const NAME_TRUNCATE_WIDTH: usize = 35;

/// Lists catalog rules, optionally filtered by file type or severity.
pub fn run(args: &RulesArgs) -> super::Result<i32> {
    print_command_header("rules");

    let catalog = load_catalog(args.rules.as_deref())?;
    let rules = filter_rules(catalog.rules(), args.file_type, args.severity);

    if rules.is_empty() {
        print_no_matches(args);
        return Ok(0);
    }

    println!("{}", colors::muted().apply_to(format!("{} rules", rules.len())));
    println!();

    for rule in rules {
        print_rule(rule, args.verbose);
    }

    Ok(0)
}

fn load_catalog(rules_path: Option<&Path>) -> super::Result<RuleCatalog> {
    match rules_path {
        Some(path) => RuleCatalog::load(path)
            .with_context(|| format!("loading rule catalog from '{}'", path.display())),
        None => RuleCatalog::builtin().context("compiling builtin rules"),
    }
}

fn filter_rules(rules: &[Rule], file_type: Option<FileType>, severity: Option<Severity>) -> Vec<&Rule> {
    rules
        .iter()
        .filter(|r| file_type.is_none_or(|ty| r.applies_to(ty)))
        .filter(|r| severity.is_none_or(|s| r.severity == s))
        .collect()
}

fn print_no_matches(args: &RulesArgs) {
    let mut filters = Vec::new();
    if let Some(ty) = args.file_type {
        filters.push(format!("--type {ty}"));
    }
    if let Some(s) = args.severity {
        filters.push(format!("--severity {s}"));
    }

    if filters.is_empty() {
        println!(
            "{} {}",
            colors::muted().apply_to("○"),
            colors::secondary().apply_to("no rules")
        );
    } else {
        println!(
            "{} {} {}",
            colors::muted().apply_to("○"),
            colors::secondary().apply_to("no rules match"),
            colors::emphasis().apply_to(filters.join(" "))
        );
    }
}

fn print_rule(rule: &Rule, verbose: bool) {
    println!(
        "  {} {}  {}",
        severity_indicator(rule.severity),
        colors::accent().apply_to(format!("{:<28}", rule.id)),
        colors::secondary().apply_to(truncate_with_ellipsis(&rule.name, NAME_TRUNCATE_WIDTH)),
    );

    if verbose {
        println!("      {}", colors::muted().apply_to(rule.description.as_ref()));
        println!(
            "      {} {}",
            colors::muted().apply_to("regex:"),
            colors::emphasis().apply_to(rule.regex.as_str())
        );
        if !rule.keywords.is_empty() {
            println!(
                "      {} {}",
                colors::muted().apply_to("keywords:"),
                colors::emphasis().apply_to(rule.keywords.join(", "))
            );
        }
        if !rule.file_types.is_empty() {
            let types: Vec<&str> = rule.file_types.iter().map(|ty| ty.as_str()).collect();
            println!(
                "      {} {}",
                colors::muted().apply_to("applies to:"),
                colors::emphasis().apply_to(types.join(", "))
            );
        }
        println!();
    }
}
