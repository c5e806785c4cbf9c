//! # Commands
//!
//! - `powerscan scan` - Scan web-source files against the rule catalog
//! - `powerscan rules` - List the active rules
//! - `powerscan init` - Create a starter rule file

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use console::style;
pub use powerscan_core::RULES_FILENAME;
use powerscan_core::prelude::*;

use crate::ui::colors;

const REPO_URL: &str = "https://github.com/powerscan/powerscan";

#[derive(Debug, Parser)]
#[command(
    name = "powerscan",
    version,
    styles = ui::clap_styles(),
    arg_required_else_help = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(visible_alias = "s")]
    Scan(ScanArgs),

    #[command(visible_alias = "r")]
    Rules(RulesArgs),

    Init(InitArgs),
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON (the serialized scan result).
    Json,
}

/// Arguments for the `powerscan scan` command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Files to scan.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Path to a TOML rule catalog. Defaults to the builtin rules.
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Minimum severity level to report.
    #[arg(short, long)]
    pub severity: Option<Severity>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Write the serialized scan result to a file (e.g. scan_results.json).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of parallel scanning threads.
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Always exit with code 0, even when findings exist.
    #[arg(long)]
    pub exit_zero: bool,
}

/// Arguments for the `powerscan rules` command.
#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// Path to a TOML rule catalog. Defaults to the builtin rules.
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Filter rules by applicable file type (markup, style, script).
    #[arg(short = 't', long = "type")]
    pub file_type: Option<FileType>,

    /// Filter rules by severity level.
    #[arg(short, long)]
    pub severity: Option<Severity>,

    /// Show rule details including regex and keywords.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the `powerscan init` command.
#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Write the rule file to a custom path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing rule file.
    #[arg(short, long)]
    pub force: bool,
}

fn main() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).without_time())
            .with(EnvFilter::from_default_env())
            .init();
    }

    let cli = parse_cli();

    match run(cli.command) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            ui::print_error(&format!("{e:#}"));
            std::process::exit(ui::exit::ERROR);
        }
    }
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn run(command: Command) -> commands::Result<i32> {
    match command {
        Command::Scan(args) => commands::scan::run(&args),
        Command::Rules(args) => commands::rules::run(&args),
        Command::Init(args) => commands::init::run(args.output, args.force),
    }
}

fn build_about() -> String {
    format!(
        r"
  {} checks frontend source files for risky, deprecated, and
  non-Baseline web features. Point it at your markup, stylesheets,
  and scripts; it reports every flagged usage with its location.",
        colors::accent().apply_to("powerscan").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    powerscan scan index.html app.js       Scan specific files
    powerscan scan src/*.css               Scan every stylesheet in src/
    powerscan scan app.js --format json    Output the full result as JSON
    powerscan scan app.js -o results.json  Persist the scan snapshot
    powerscan rules --type style           List stylesheet rules
    powerscan init                         Create a starter rule file

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
