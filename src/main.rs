//! `prdups`: a CLI tool for pull-request duplication analysis.
//!
//! Ingests the set of files changed by a pull request (as a JSON change set
//! or straight from a local git diff) and reports duplicated or
//! near-duplicated code fragments introduced by those changes. The core is
//! a six-stage pipeline: patch parsing, sliding-window block extraction,
//! normalization with content fingerprinting, exact and fuzzy duplicate
//! detection, overlap coalescing, and union-find pattern clustering.
//!
//! The dispatch pattern is uniform: parse CLI args with `clap`, load the
//! change set, and delegate to the analyzer's `run()` function. All errors
//! are printed to stderr and cause exit code 1.

/// The six-stage duplication pipeline and report formatters.
mod analyzer;
/// CLI argument definitions using `clap` derive macros.
mod cli;
/// Analyzer thresholds with optional TOML override file.
mod config;
/// Change-set extraction from a local git repository via libgit2.
mod git;
/// Change-set loading from JSON files or stdin.
mod input;
/// Shared report formatting utilities (separators, JSON output).
mod report_helpers;

use std::error::Error;

use clap::Parser;
use env_logger::Env;

use cli::{Cli, Commands, OutputArgs};
use config::AnalyzerConfig;

/// Run an analysis command, printing errors to stderr and exiting with
/// code 1 on failure.
fn run_command(f: impl FnOnce() -> Result<(), Box<dyn Error>>) {
    if let Err(err) = f() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Load the change set, analyze it, and print the selected report mode.
fn analyze_files(
    files: &[analyzer::types::FileDescriptor],
    output: &OutputArgs,
) -> Result<(), Box<dyn Error>> {
    for file in files {
        log::debug!(
            "{} {} (+{} -{})",
            file.status,
            file.filename,
            file.additions,
            file.deletions
        );
    }
    let config = AnalyzerConfig::load(output.config.as_deref())?;
    analyzer::run(files, &config, output.report, output.show_all, output.json)
}

/// Application entry point: initialize logging, parse CLI arguments, and
/// dispatch to the appropriate command.
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { input, output } => run_command(|| {
            let files = input::load_descriptors(input.as_deref())?;
            analyze_files(&files, &output)
        }),
        Commands::Diff {
            path,
            base,
            head,
            output,
        } => run_command(|| {
            let target = path.unwrap_or_else(|| std::path::PathBuf::from("."));
            let changes = git::ChangeSet::open(&target)?;
            let files = changes.pr_files(&base, &head)?;
            analyze_files(&files, &output)
        }),
    }
}
