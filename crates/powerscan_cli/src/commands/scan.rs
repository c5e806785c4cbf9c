//! Scan command - runs the rule catalog against the named files.

use std::path::Path;

use anyhow::Context as _;
use powerscan_core::fs_util::atomic_write;
use powerscan_core::prelude::*;

use crate::ui::{colors, exit, indicators, severity_indicator, severity_style};
use crate::{OutputFormat, ScanArgs};

/// Scans the named files and prints or serialises the result.
///
/// Returns exit code 1 when findings exist (0 with `--exit-zero`); catalog
/// and I/O errors propagate and exit with code 2.
pub fn run(args: &ScanArgs) -> super::Result<i32> {
    configure_thread_pool(args.concurrency)?;

    let catalog = load_catalog(args.rules.as_deref())?;
    let scanner = build_scanner(catalog, args.severity);
    let sources = read_sources(&args.files)?;

    let result = scanner.scan(&sources);

    match args.format {
        OutputFormat::Text => print_text(&result),
        OutputFormat::Json => print_json(&result)?,
    }

    if let Some(path) = &args.output {
        write_snapshot(&result, path)?;
    }

    if result.has_findings() && !args.exit_zero {
        return Ok(exit::FINDINGS);
    }
    Ok(0)
}

/// Loads the rule catalog, either the builtin set or a TOML rule file.
fn load_catalog(rules_path: Option<&Path>) -> super::Result<RuleCatalog> {
    match rules_path {
        Some(path) => RuleCatalog::load(path)
            .with_context(|| format!("loading rule catalog from '{}'", path.display())),
        None => RuleCatalog::builtin().context("compiling builtin rules"),
    }
}

/// Builds a `Scanner`, optionally applying a minimum severity threshold.
fn build_scanner(catalog: RuleCatalog, severity: Option<Severity>) -> Scanner {
    let mut scanner = Scanner::new(catalog);

    if let Some(severity) = severity {
        scanner = scanner.with_severity_threshold(severity);
    }

    scanner
}

/// Configures the global rayon thread pool with the requested number of
/// threads, if specified.
fn configure_thread_pool(concurrency: Option<usize>) -> super::Result {
    if let Some(n) = concurrency {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("failed to configure thread pool")?;
    }
    Ok(())
}

/// Reads every named file into a scan input, keeping raw bytes.
///
/// Undecodable content is the engine's concern; a path that cannot be read
/// at all is an error, since the user named it explicitly.
fn read_sources(paths: &[std::path::PathBuf]) -> super::Result<Vec<SourceFile>> {
    paths
        .iter()
        .map(|path| {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading '{}'", path.display()))?;
            Ok(SourceFile::new(path.display().to_string(), bytes))
        })
        .collect()
}

fn print_text(result: &ScanResult) {
    println!();

    for finding in &result.findings {
        println!(
            "{} {} {}",
            severity_indicator(finding.severity),
            colors::emphasis().apply_to(format!(
                "{}:{}:{}",
                finding.file_name, finding.span.line, finding.span.column
            )),
            colors::accent().apply_to(&finding.rule_id),
        );
        println!("    {}", colors::muted().apply_to(&finding.context_snippet));
    }

    if result.has_findings() {
        println!();
    }

    print_summary(result);
}

fn print_summary(result: &ScanResult) {
    let summary = &result.summary;

    if summary.total_findings == 0 {
        println!(
            "{} {}",
            colors::success().apply_to(indicators::SUCCESS),
            colors::secondary().apply_to(format!(
                "no flagged features in {} file(s), {} rules evaluated",
                summary.files_scanned, summary.rules_evaluated
            ))
        );
    } else {
        let by_level: Vec<String> = Severity::ALL
            .iter()
            .rev()
            .map(|&severity| (severity, summary.by_severity.get(severity)))
            .filter(|&(_, count)| count > 0)
            .map(|(severity, count)| format!("{} {severity}", severity_style(severity).apply_to(count)))
            .collect();

        println!(
            "{} {} {}",
            colors::error().apply_to(indicators::ERROR),
            colors::emphasis().apply_to(format!("{} finding(s)", summary.total_findings)),
            colors::muted().apply_to(format!("({})", by_level.join(", "))),
        );
        println!(
            "  {}",
            colors::muted().apply_to(format!(
                "{} file(s) scanned, {} rules evaluated",
                summary.files_scanned, summary.rules_evaluated
            ))
        );
    }

    if summary.files_unreadable > 0 {
        let names: Vec<&str> = result
            .files
            .iter()
            .filter(|f| f.unreadable)
            .map(|f| f.name.as_ref())
            .collect();
        crate::ui::print_warning(&format!(
            "{} unreadable file(s) skipped: {}",
            summary.files_unreadable,
            names.join(", ")
        ));
    }
}

fn print_json(result: &ScanResult) -> super::Result {
    let json = result.to_json_pretty().context("serialising scan result")?;
    println!("{json}");
    Ok(())
}

/// Persists the serialized result atomically - the "last scan" snapshot
/// consumed by dashboards and exporters.
fn write_snapshot(result: &ScanResult, path: &Path) -> super::Result {
    let json = result.to_json_pretty().context("serialising scan result")?;
    atomic_write(path, &json).with_context(|| format!("writing '{}'", path.display()))?;

    println!(
        "{} {}",
        colors::success().apply_to(indicators::SUCCESS),
        colors::secondary().apply_to(format!("scan result written to {}", path.display()))
    );
    Ok(())
}
