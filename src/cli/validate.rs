//! Validate command implementation
//!
//! This module implements the `textfilter validate` command, which parses a
//! filter file and lists the rules it defines along with any entries that
//! were dropped in skip-invalid mode.

use crate::cli::args::{ColorChoice, FormatArg, OutputFormat};
use crate::cli::common::{EXIT_SUCCESS, LoadError, load_filter, stdout_color};
use crate::filter::ParseOptions;
use crate::output::{HumanFormatter, JsonlFormatter};
use std::io::Write;
use std::path::Path;
use termcolor::StandardStream;

/// Exit code when entries were dropped
pub const EXIT_SKIPPED: i32 = 1;

/// Run the validate command
///
/// # Returns
///
/// Exit code:
/// - 0: Every filter entry is valid
/// - 1: Some entries were skipped (only with `--skip-invalid`)
/// - 2: Error (I/O)
/// - 3: Parse error (invalid document, entry or pattern)
/// - 4: The file is not a filter document
pub fn run_validate(
    filter: &Path,
    skip_invalid: bool,
    format: FormatArg,
    output: OutputFormat,
    color: ColorChoice,
) -> i32 {
    let options = ParseOptions {
        skip_invalid,
        format: format.resolve(filter),
    };

    match run_validate_inner(filter, &options, output, color) {
        Ok(0) => EXIT_SUCCESS,
        Ok(_) => EXIT_SKIPPED,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Returns the number of skipped entries
fn run_validate_inner(
    filter: &Path,
    options: &ParseOptions,
    output: OutputFormat,
    color: ColorChoice,
) -> Result<usize, LoadError> {
    let loaded = load_filter(filter, options)?;

    match output {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(stdout_color(color));
            HumanFormatter::new().write_validation(
                &mut stdout,
                &loaded.rule_set,
                &loaded.diagnostics,
            )?;
            stdout.flush()?;
        }
        OutputFormat::Jsonl => {
            let formatter = JsonlFormatter::new();
            print!(
                "{}",
                formatter.format_validation(&loaded.rule_set, &loaded.diagnostics)
            );
        }
    }

    Ok(loaded.diagnostics.len())
}
