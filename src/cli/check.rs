//! Check command implementation
//!
//! This module implements the `textfilter check` command, which:
//! - Loads and parses a filter file
//! - Collects inputs from the command line or stdin
//! - Evaluates every input against the rule set in parallel
//! - Formats output (human or JSONL)
//! - Returns an exit code reflecting whether anything matched

use crate::cli::args::{ColorChoice, FormatArg, OutputFormat};
use crate::cli::common::{
    EXIT_NO_MATCH, EXIT_SUCCESS, LoadError, load_filter, read_inputs, stdout_color,
};
use crate::filter::{ParseOptions, RuleSet};
use crate::output::{HumanFormatter, JsonlFormatter, MatchOutcome};
use std::io::{self, Write};
use std::path::Path;
use termcolor::StandardStream;

/// Run the check command
///
/// # Arguments
///
/// * `filter` - Path of the filter file
/// * `inputs` - Texts to check; stdin is read, one input per line, when empty
/// * `skip_invalid` - Drop invalid filter entries instead of failing
/// * `format` - Filter file encoding
/// * `output` - Output format (human or JSONL)
/// * `color` - Output coloring
///
/// # Returns
///
/// Exit code:
/// - 0: At least one input matched
/// - 1: No input matched
/// - 2: Error (I/O)
/// - 3: Parse error (invalid document, entry or pattern)
/// - 4: The file is not a filter document
pub fn run_check(
    filter: &Path,
    inputs: &[String],
    skip_invalid: bool,
    format: FormatArg,
    output: OutputFormat,
    color: ColorChoice,
) -> i32 {
    let options = ParseOptions {
        skip_invalid,
        format: format.resolve(filter),
    };

    match run_check_inner(filter, inputs, &options, output, color) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_NO_MATCH,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Internal implementation of check command
fn run_check_inner(
    filter: &Path,
    inputs: &[String],
    options: &ParseOptions,
    output: OutputFormat,
    color: ColorChoice,
) -> Result<bool, LoadError> {
    let loaded = load_filter(filter, options)?;

    let stdin_inputs;
    let inputs = if inputs.is_empty() {
        stdin_inputs = read_inputs(io::stdin().lock())?;
        stdin_inputs.as_slice()
    } else {
        inputs
    };

    if loaded.rule_set.is_empty() {
        eprintln!("Warning: Filter has no rules. Nothing will match.");
    }

    let outcomes = evaluate(&loaded.rule_set, inputs);
    let any_matched = outcomes.iter().any(MatchOutcome::matched);

    match output {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(stdout_color(color));
            HumanFormatter::new().write_matches(&mut stdout, &outcomes)?;
            stdout.flush()?;
        }
        OutputFormat::Jsonl => {
            let formatter = JsonlFormatter::new();
            print!(
                "{}",
                formatter.format_matches(loaded.rule_set.name(), &outcomes)
            );
        }
    }

    Ok(any_matched)
}

/// Evaluate inputs against the set, keeping input order
pub(crate) fn evaluate(rule_set: &RuleSet, inputs: &[String]) -> Vec<MatchOutcome> {
    rule_set
        .first_matches(inputs)
        .into_iter()
        .zip(inputs)
        .map(|(rule, input)| MatchOutcome {
            input: input.clone(),
            rule,
        })
        .collect()
}
