//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rdbspec",
    version,
    about = "RDB processor specification documents",
    long_about = "Author and inspect RDB processor specification documents.\n\n\
                  Documents are JSON files holding a versioned action history and the\n\
                  materialized specification state (tables, columns, query specifications)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new empty specification document.
    New(NewArgs),

    /// Apply actions from a JSON file to a document.
    Apply(ApplyArgs),

    /// Render a document's tables and query specifications.
    Show(ShowArgs),

    /// List the supported column types.
    ColumnTypes,
}

#[derive(Parser)]
pub struct NewArgs {
    /// Path to write the new document to.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Display name for the document.
    #[arg(long = "name")]
    pub name: Option<String>,
}

#[derive(Parser)]
pub struct ApplyArgs {
    /// Path to the document file.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Path to a JSON action object or array of action objects.
    #[arg(value_name = "ACTIONS")]
    pub actions: PathBuf,

    /// Validate and report without rewriting the document file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the document file.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Dump the materialized state as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
