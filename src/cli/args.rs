//! CLI argument parsing using clap

use crate::types::DocumentFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Output format for textfilter commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// Encoding of the filter file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Detect from the file extension (`.toml` is TOML, anything else JSON)
    Auto,
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl FormatArg {
    /// Resolve to a concrete document format for the given file
    pub fn resolve(self, path: &Path) -> DocumentFormat {
        match self {
            FormatArg::Auto => DocumentFormat::from_path(path),
            FormatArg::Json => DocumentFormat::Json,
            FormatArg::Toml => DocumentFormat::Toml,
        }
    }
}

/// textfilter CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "textfilter")]
#[command(about = "Evaluate text against declarative filter files")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available textfilter subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check inputs against a filter file
    Check {
        /// Filter file to load
        filter: PathBuf,

        /// Inputs to check (read from stdin, one per line, when omitted)
        ///
        /// Everything after the first input is taken literally, including
        /// values that start with `-`, so options go before the inputs.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        inputs: Vec<String>,

        /// Drop invalid filter entries instead of failing
        #[arg(long)]
        skip_invalid: bool,

        /// Filter file encoding
        #[arg(long, default_value = "auto")]
        format: FormatArg,

        /// Output format
        #[arg(short, long, default_value = "human")]
        output: OutputFormat,
    },

    /// Parse a filter file and list its rules
    Validate {
        /// Filter file to load
        filter: PathBuf,

        /// Drop invalid filter entries instead of failing
        #[arg(long)]
        skip_invalid: bool,

        /// Filter file encoding
        #[arg(long, default_value = "auto")]
        format: FormatArg,

        /// Output format
        #[arg(short, long, default_value = "human")]
        output: OutputFormat,
    },
}
