/// CLI argument definitions for the `prdups` command.
///
/// Defines all subcommands, their arguments, and help text using the
/// `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "prdups", version, about = "Pull-request duplication analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output arguments shared by both analysis commands.
#[derive(Args)]
pub struct OutputArgs {
    /// Show detailed report with per-finding locations
    #[arg(short, long)]
    pub report: bool,

    /// Show all findings (default: top 20)
    #[arg(long)]
    pub show_all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// TOML file overriding analyzer thresholds
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// All available analysis subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a JSON change set (array of changed-file descriptors)
    #[command(long_about = "\
Analyze a JSON change set (array of changed-file descriptors).

The input document is an array of objects with the fields `filename`,
`status`, `additions`, `deletions`, and an optional unified-diff `patch`,
the shape a pull-request API returns for the files of a change. Reads from
stdin when no file is given.

Duplication is reported over the added lines only: identical and
near-identical blocks introduced across different files, with repeated
patterns collapsed into multi-file clusters.")]
    Analyze {
        /// JSON file with changed-file descriptors (default: stdin)
        input: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Analyze the changes between two git revisions
    Diff {
        /// Repository path (default: current directory)
        path: Option<PathBuf>,

        /// Base revision to diff against
        #[arg(long)]
        base: String,

        /// Head revision (default: HEAD)
        #[arg(long, default_value = "HEAD")]
        head: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}
