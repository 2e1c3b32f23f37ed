#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! Match results are printed one per line as `"<input>" matches? <bool>`,
//! with the verdict colored when the writer supports it.

use crate::filter::{ParseDiagnostic, RuleSet};
use crate::output::MatchOutcome;
use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Human-readable formatter
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write one line per outcome
    pub fn write_matches<W: WriteColor>(
        &self,
        out: &mut W,
        outcomes: &[MatchOutcome],
    ) -> io::Result<()> {
        for outcome in outcomes {
            write!(out, "\"{}\" matches? ", outcome.input)?;
            write_verdict(out, outcome.matched())?;
            writeln!(out)?;
        }
        Ok(())
    }

    /// Write the rules of a parsed set followed by any dropped entries
    pub fn write_validation<W: WriteColor>(
        &self,
        out: &mut W,
        rule_set: &RuleSet,
        diagnostics: &[ParseDiagnostic],
    ) -> io::Result<()> {
        let name = if rule_set.name().is_empty() {
            "<unnamed>"
        } else {
            rule_set.name()
        };
        writeln!(out, "Filter: {} ({} rules)", name, rule_set.len())?;

        for (index, rule) in rule_set.rules().iter().enumerate() {
            let case = if rule.case_sensitive() {
                "case-sensitive"
            } else {
                "case-insensitive"
            };
            writeln!(
                out,
                "  [{}] {} {:?} ({})",
                index,
                rule.method(),
                rule.pattern(),
                case
            )?;
        }

        if !diagnostics.is_empty() {
            writeln!(out)?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            writeln!(out, "Skipped {} invalid filters:", diagnostics.len())?;
            out.reset()?;
            for diagnostic in diagnostics {
                writeln!(out, "  {}", diagnostic)?;
            }
        }

        Ok(())
    }

    /// Format outcomes without color
    pub fn format_matches(&self, outcomes: &[MatchOutcome]) -> String {
        let mut buffer = Buffer::no_color();
        // Writes to an in-memory buffer cannot fail
        let _ = self.write_matches(&mut buffer, outcomes);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Format a validation listing without color
    pub fn format_validation(&self, rule_set: &RuleSet, diagnostics: &[ParseDiagnostic]) -> String {
        let mut buffer = Buffer::no_color();
        let _ = self.write_validation(&mut buffer, rule_set, diagnostics);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }
}

fn write_verdict<W: WriteColor>(out: &mut W, matched: bool) -> io::Result<()> {
    let color = if matched { Color::Green } else { Color::Red };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", matched)?;
    out.reset()
}
