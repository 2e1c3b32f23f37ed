//! Error types for textfilter
//!
//! Rule construction errors live in `RuleError`; everything that can abort a
//! filter document parse is collected in `FilterError`.

use crate::filter::ParseDiagnostic;

/// Rule-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Regex pattern failed to compile
    #[error("Invalid regex pattern '{pattern}': {message}")]
    InvalidRegex { pattern: String, message: String },

    /// No constructor is registered for the method token
    #[error("Unknown filter method '{method}'. Possible methods: {}", .valid.join(", "))]
    UnknownMethod { method: String, valid: Vec<String> },
}

/// Top-level error type for filter document parsing
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// Document text could not be decoded into a structured tree
    #[error("Filter file could not be parsed: {0}")]
    Parsing(String),

    /// A filter entry is missing parameters, has an unknown method or a
    /// wrongly-typed field
    #[error("{0}")]
    Attribute(ParseDiagnostic),

    /// A rule could not be constructed
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_regex_message() {
        let err = RuleError::InvalidRegex {
            pattern: "[unclosed".to_string(),
            message: "unclosed character class".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid regex pattern '[unclosed': unclosed character class"
        );
    }

    #[test]
    fn test_unknown_method_lists_valid_methods() {
        let err = RuleError::UnknownMethod {
            method: "startswith".to_string(),
            valid: vec!["contains".to_string(), "endswith".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'startswith'"));
        assert!(msg.contains("contains, endswith"));
    }

    #[test]
    fn test_rule_error_converts_into_filter_error() {
        let err: FilterError = RuleError::InvalidRegex {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        }
        .into();
        assert!(matches!(err, FilterError::Rule(_)));
        assert!(err.to_string().starts_with("Rule error:"));
    }
}
