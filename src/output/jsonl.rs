#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line:
//! 1. One record per input (`match`) or per rule and dropped entry
//!    (`rule`, `diagnostic`)
//! 2. One trailing `summary` record

use crate::filter::{ParseDiagnostic, RuleSet};
use crate::output::MatchOutcome;
use serde::Serialize;

/// JSONL output formatter
#[derive(Debug, Default)]
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format match outcomes, in input order, plus a summary record
    pub fn format_matches(&self, filter: &str, outcomes: &[MatchOutcome]) -> String {
        let mut output = String::new();

        for outcome in outcomes {
            push_record(
                &mut output,
                &MatchRecord {
                    record_type: "match",
                    input: &outcome.input,
                    matched: outcome.matched(),
                    rule: outcome.rule,
                },
            );
        }

        push_record(
            &mut output,
            &MatchSummaryRecord {
                record_type: "summary",
                filter,
                inputs: outcomes.len() as u64,
                matched: outcomes.iter().filter(|o| o.matched()).count() as u64,
            },
        );

        output
    }

    /// Format the rules of a parsed set, its dropped entries and a summary
    pub fn format_validation(&self, rule_set: &RuleSet, diagnostics: &[ParseDiagnostic]) -> String {
        let mut output = String::new();

        for (index, rule) in rule_set.rules().iter().enumerate() {
            push_record(
                &mut output,
                &RuleRecord {
                    record_type: "rule",
                    index,
                    method: rule.method(),
                    pattern: rule.pattern(),
                    case_sensitive: rule.case_sensitive(),
                },
            );
        }

        for diagnostic in diagnostics {
            push_record(
                &mut output,
                &DiagnosticRecord {
                    record_type: "diagnostic",
                    index: diagnostic.index,
                    kind: diagnostic.kind.as_str(),
                    message: diagnostic.to_string(),
                },
            );
        }

        push_record(
            &mut output,
            &ValidationSummaryRecord {
                record_type: "summary",
                filter: rule_set.name(),
                rules: rule_set.len() as u64,
                skipped: diagnostics.len() as u64,
            },
        );

        output
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Per-input record
#[derive(Debug, Serialize)]
struct MatchRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    input: &'a str,
    matched: bool,
    rule: Option<usize>,
}

/// Summary record for a check run
#[derive(Debug, Serialize)]
struct MatchSummaryRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    filter: &'a str,
    inputs: u64,
    matched: u64,
}

/// Parsed rule record
#[derive(Debug, Serialize)]
struct RuleRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    index: usize,
    method: &'a str,
    pattern: &'a str,
    case_sensitive: bool,
}

/// Dropped entry record
#[derive(Debug, Serialize)]
struct DiagnosticRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    index: usize,
    kind: &'static str,
    message: String,
}

/// Summary record for a validate run
#[derive(Debug, Serialize)]
struct ValidationSummaryRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    filter: &'a str,
    rules: u64,
    skipped: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DiagnosticKind;
    use crate::rules::EndsWithRule;
    use serde_json::Value;

    fn parse_lines(output: &str) -> Vec<Value> {
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_format_matches() {
        let outcomes = vec![
            MatchOutcome {
                input: "a.log".to_string(),
                rule: Some(0),
            },
            MatchOutcome {
                input: "a.txt".to_string(),
                rule: None,
            },
        ];

        let records = parse_lines(&JsonlFormatter::new().format_matches("logs", &outcomes));
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["type"], "match");
        assert_eq!(records[0]["input"], "a.log");
        assert_eq!(records[0]["matched"], true);
        assert_eq!(records[0]["rule"], 0);
        assert_eq!(records[1]["matched"], false);
        assert!(records[1]["rule"].is_null());
        assert_eq!(records[2]["type"], "summary");
        assert_eq!(records[2]["filter"], "logs");
        assert_eq!(records[2]["inputs"], 2);
        assert_eq!(records[2]["matched"], 1);
    }

    #[test]
    fn test_format_matches_empty_still_has_summary() {
        let records = parse_lines(&JsonlFormatter::new().format_matches("", &[]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["inputs"], 0);
    }

    #[test]
    fn test_format_validation() {
        let set = RuleSet::new("logs", vec![Box::new(EndsWithRule::new(".log", true))]);
        let diagnostics = vec![ParseDiagnostic::new(
            1,
            DiagnosticKind::UnknownMethod {
                method: "glob".to_string(),
                valid: vec!["contains".to_string()],
            },
        )];

        let records = parse_lines(&JsonlFormatter::new().format_validation(&set, &diagnostics));
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["type"], "rule");
        assert_eq!(records[0]["method"], "endswith");
        assert_eq!(records[0]["pattern"], ".log");
        assert_eq!(records[0]["case_sensitive"], true);
        assert_eq!(records[1]["type"], "diagnostic");
        assert_eq!(records[1]["index"], 1);
        assert_eq!(records[1]["kind"], "unknown_method");
        assert_eq!(records[2]["type"], "summary");
        assert_eq!(records[2]["rules"], 1);
        assert_eq!(records[2]["skipped"], 1);
    }
}
