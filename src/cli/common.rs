//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading filter files,
//! reading inputs, setting up logging and choosing output colors.

use crate::cli::args::ColorChoice;
use crate::error::FilterError;
use crate::filter::{ParseOptions, ParseReport, RuleSet};
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NO_MATCH: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;
pub const EXIT_NOT_A_FILTER: i32 = 4;

/// Errors shared by commands that load a filter file
#[derive(Debug, thiserror::Error)]
pub(crate) enum LoadError {
    #[error("Failed to read filter file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Filter(#[from] FilterError),

    #[error("{} is not a filter file (expected 'name' and 'filters')", .0.display())]
    NotAFilter(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl LoadError {
    /// Exit code for this error
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            LoadError::Filter(_) => EXIT_PARSE_ERROR,
            LoadError::NotAFilter(_) => EXIT_NOT_A_FILTER,
            LoadError::Read { .. } | LoadError::Io(_) => EXIT_ERROR,
        }
    }
}

/// A parsed filter file together with the entries that were dropped
pub(crate) struct LoadedFilter {
    pub rule_set: RuleSet,
    pub diagnostics: Vec<crate::filter::ParseDiagnostic>,
}

/// Read and parse a filter file
///
/// # Errors
///
/// Returns `LoadError::Read` if the file cannot be read, `LoadError::Filter`
/// if parsing fails and `LoadError::NotAFilter` if the document lacks the
/// top-level keys.
pub(crate) fn load_filter(path: &Path, options: &ParseOptions) -> Result<LoadedFilter, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let ParseReport {
        rule_set,
        diagnostics,
    } = RuleSet::parse_report(&text, options)?;

    let rule_set = rule_set.ok_or_else(|| LoadError::NotAFilter(path.to_path_buf()))?;

    for diagnostic in &diagnostics {
        eprintln!("Warning: {}", diagnostic);
    }

    Ok(LoadedFilter {
        rule_set,
        diagnostics,
    })
}

/// Read inputs from a reader, one per line (LF or CRLF)
pub(crate) fn read_inputs<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise the level is `warn`, or `debug`
/// with `--verbose`. Logs go to stderr, colored only when `color` allows it.
pub fn init_logging(verbose: bool, color: ColorChoice) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_ansi(stderr_ansi(color))
        .with_writer(io::stderr)
        .try_init();
}

/// Whether log lines on stderr may carry ANSI escapes
pub(crate) fn stderr_ansi(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    }
}

/// Map the CLI color choice onto termcolor for stdout
pub(crate) fn stdout_color(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}
