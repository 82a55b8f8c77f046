//! CLI argument definitions for telemark.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "telemark",
    version,
    about = "Assemble the bank-telemarketing analysis report from pipeline artifacts",
    long_about = "Assemble the bank-telemarketing analysis report.\n\n\
                  Reads the CSV tables and confusion-matrix images produced by the\n\
                  external training pipeline, generates the coefficient charts, and\n\
                  writes a single HTML document with its assets."
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
    /// Render the report from a folder of pipeline artifacts.
    Render(RenderArgs),

    /// Verify an artifact folder without writing anything.
    Check(CheckArgs),

    /// Print the report outline.
    Blocks,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Path to the folder containing the pipeline's output artifacts.
    #[arg(value_name = "ARTIFACT_DIR")]
    pub artifact_dir: PathBuf,

    /// Output directory for the report (default: <ARTIFACT_DIR>/report).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Rows in the top-coefficient chart (default: report definition).
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Rows in the bottom-coefficient chart (default: report definition).
    #[arg(long = "bottom", value_name = "N")]
    pub bottom: Option<usize>,

    /// Inline generated charts into the document instead of writing
    /// separate SVG files.
    #[arg(long = "self-contained")]
    pub self_contained: bool,

    /// Skip manifest verification even when artifacts.toml is present.
    ///
    /// WARNING: Reports rendered with this flag may not match the artifact
    /// set the prose was written against.
    #[arg(long = "no-manifest-check")]
    pub no_manifest_check: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the folder containing the pipeline's output artifacts.
    #[arg(value_name = "ARTIFACT_DIR")]
    pub artifact_dir: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
