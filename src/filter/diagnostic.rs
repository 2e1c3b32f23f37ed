#![forbid(unsafe_code)]

//! Per-entry parse diagnostics and the sinks that receive them

use crate::error::{FilterError, RuleError};
use std::fmt;

/// What was wrong with a single filter entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// One or more required keys are absent
    MissingParams {
        missing: Vec<String>,
        required: Vec<String>,
    },

    /// The method token is not registered
    UnknownMethod { method: String, valid: Vec<String> },

    /// A field is present but has the wrong type
    InvalidField {
        field: String,
        expected: &'static str,
    },

    /// The entry itself is not a mapping
    NotAMapping,

    /// The rule could not be constructed from its pattern
    PatternCompile(RuleError),
}

impl DiagnosticKind {
    /// Short machine-readable name of the diagnostic
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingParams { .. } => "missing_params",
            DiagnosticKind::UnknownMethod { .. } => "unknown_method",
            DiagnosticKind::InvalidField { .. } => "invalid_field",
            DiagnosticKind::NotAMapping => "not_a_mapping",
            DiagnosticKind::PatternCompile(_) => "pattern_compile",
        }
    }
}

impl From<RuleError> for DiagnosticKind {
    fn from(err: RuleError) -> Self {
        match err {
            RuleError::UnknownMethod { method, valid } => {
                DiagnosticKind::UnknownMethod { method, valid }
            }
            other => DiagnosticKind::PatternCompile(other),
        }
    }
}

/// A problem found in the filter entry at `index` (zero-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub index: usize,
    pub kind: DiagnosticKind,
}

impl ParseDiagnostic {
    pub fn new(index: usize, kind: DiagnosticKind) -> Self {
        ParseDiagnostic { index, kind }
    }

    /// Convert into the error that aborts a strict parse
    pub fn into_error(self) -> FilterError {
        match self.kind {
            DiagnosticKind::PatternCompile(err) => FilterError::Rule(err),
            _ => FilterError::Attribute(self),
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::MissingParams { missing, required } => write!(
                f,
                "Missing required params for filter {}: {} (required: {})",
                self.index,
                missing.join(", "),
                required.join(", ")
            ),
            DiagnosticKind::UnknownMethod { method, valid } => write!(
                f,
                "Unknown filter method in filter {}: {}. Possible methods: {}",
                self.index,
                method,
                valid.join(", ")
            ),
            DiagnosticKind::InvalidField { field, expected } => write!(
                f,
                "Invalid '{}' in filter {}: expected {}",
                field, self.index, expected
            ),
            DiagnosticKind::NotAMapping => {
                write!(f, "Filter {} is not a mapping", self.index)
            }
            DiagnosticKind::PatternCompile(err) => {
                write!(f, "Invalid pattern in filter {}: {}", self.index, err)
            }
        }
    }
}

/// Receives diagnostics for entries dropped by a skip-invalid parse
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: ParseDiagnostic);
}

impl DiagnosticSink for Vec<ParseDiagnostic> {
    fn report(&mut self, diagnostic: ParseDiagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that drops every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardDiagnostics;

impl DiagnosticSink for DiscardDiagnostics {
    fn report(&mut self, _diagnostic: ParseDiagnostic) {}
}

/// Sink that forwards each diagnostic to a callback
pub struct DiagnosticCallback<F>(pub F);

impl<F> DiagnosticSink for DiagnosticCallback<F>
where
    F: FnMut(ParseDiagnostic),
{
    fn report(&mut self, diagnostic: ParseDiagnostic) {
        (self.0)(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_params_message() {
        let diag = ParseDiagnostic::new(
            2,
            DiagnosticKind::MissingParams {
                missing: vec!["method".to_string()],
                required: vec!["text".to_string(), "method".to_string()],
            },
        );
        assert_eq!(
            diag.to_string(),
            "Missing required params for filter 2: method (required: text, method)"
        );
    }

    #[test]
    fn test_unknown_method_message() {
        let diag = ParseDiagnostic::new(
            0,
            DiagnosticKind::UnknownMethod {
                method: "startswith".to_string(),
                valid: vec!["contains".to_string(), "regex".to_string()],
            },
        );
        let msg = diag.to_string();
        assert!(msg.contains("filter 0"));
        assert!(msg.contains("startswith"));
        assert!(msg.contains("contains, regex"));
    }

    #[test]
    fn test_into_error_routes_pattern_failures_to_rule_error() {
        let diag = ParseDiagnostic::new(
            1,
            DiagnosticKind::PatternCompile(RuleError::InvalidRegex {
                pattern: "(".to_string(),
                message: "unclosed group".to_string(),
            }),
        );
        assert!(matches!(diag.into_error(), FilterError::Rule(_)));

        let diag = ParseDiagnostic::new(1, DiagnosticKind::NotAMapping);
        assert!(matches!(diag.into_error(), FilterError::Attribute(_)));
    }

    #[test]
    fn test_from_rule_error() {
        let kind: DiagnosticKind = RuleError::UnknownMethod {
            method: "x".to_string(),
            valid: vec![],
        }
        .into();
        assert_eq!(kind.as_str(), "unknown_method");
    }

    #[test]
    fn test_sinks() {
        let mut collected = Vec::new();
        collected.report(ParseDiagnostic::new(0, DiagnosticKind::NotAMapping));
        assert_eq!(collected.len(), 1);

        let mut count = 0;
        let mut callback = DiagnosticCallback(|_d: ParseDiagnostic| count += 1);
        callback.report(ParseDiagnostic::new(3, DiagnosticKind::NotAMapping));
        callback.report(ParseDiagnostic::new(4, DiagnosticKind::NotAMapping));
        drop(callback);
        assert_eq!(count, 2);

        DiscardDiagnostics.report(ParseDiagnostic::new(5, DiagnosticKind::NotAMapping));
    }
}
