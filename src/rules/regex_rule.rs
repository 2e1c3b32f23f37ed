#![forbid(unsafe_code)]

//! Regex-based rule implementation
//!
//! This module provides RegexRule, which reports a match when its compiled
//! expression is found anywhere in the text.

use crate::error::RuleError;
use crate::rules::Rule;
use crate::types::MatchMethod;
use regex::Regex;

/// A rule that matches text using a regular expression
///
/// The pattern is compiled once, at construction, and searched rather than
/// anchored: any match inside the text counts.
///
/// The `case_sensitive` flag is stored and reported but does not affect
/// matching. Case sensitivity of a regex comes from the expression itself,
/// e.g. an inline `(?i)` flag. The subject text is never lowercased.
pub struct RegexRule {
    pattern: Regex,
    case_sensitive: bool,
}

impl std::fmt::Debug for RegexRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexRule")
            .field("pattern", &self.pattern.as_str())
            .field("case_sensitive", &self.case_sensitive)
            .finish()
    }
}

impl RegexRule {
    /// Compile a RegexRule
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if the pattern does not compile.
    pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self, RuleError> {
        let compiled = Regex::new(pattern).map_err(|e| RuleError::InvalidRegex {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        Ok(RegexRule {
            pattern: compiled,
            case_sensitive,
        })
    }
}

impl Rule for RegexRule {
    fn method(&self) -> &str {
        MatchMethod::Regex.as_str()
    }

    fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}
