#![forbid(unsafe_code)]

//! Plain-text rules: substring containment and suffix matching
//!
//! When a rule is case-insensitive both the pattern and the subject are
//! lowercased before comparison. The pattern is lowered once, at construction.

use crate::rules::Rule;
use crate::types::MatchMethod;

/// Pattern text in the two forms the textual rules need
#[derive(Debug, Clone)]
struct TextPattern {
    original: String,
    folded: String,
    case_sensitive: bool,
}

impl TextPattern {
    fn new(pattern: &str, case_sensitive: bool) -> Self {
        let folded = if case_sensitive {
            pattern.to_string()
        } else {
            pattern.to_lowercase()
        };
        TextPattern {
            original: pattern.to_string(),
            folded,
            case_sensitive,
        }
    }

    /// Runs `check(subject, pattern)` with case folding applied as configured
    fn compare(&self, text: &str, check: impl Fn(&str, &str) -> bool) -> bool {
        if self.case_sensitive {
            check(text, &self.folded)
        } else {
            check(&text.to_lowercase(), &self.folded)
        }
    }
}

/// Matches when the pattern occurs anywhere in the text
#[derive(Debug, Clone)]
pub struct ContainsRule {
    pattern: TextPattern,
}

impl ContainsRule {
    pub fn new(pattern: &str, case_sensitive: bool) -> Self {
        ContainsRule {
            pattern: TextPattern::new(pattern, case_sensitive),
        }
    }
}

impl Rule for ContainsRule {
    fn method(&self) -> &str {
        MatchMethod::Contains.as_str()
    }

    fn pattern(&self) -> &str {
        &self.pattern.original
    }

    fn case_sensitive(&self) -> bool {
        self.pattern.case_sensitive
    }

    fn matches(&self, text: &str) -> bool {
        self.pattern
            .compare(text, |subject, pattern| subject.contains(pattern))
    }
}

/// Matches when the text ends with the pattern
#[derive(Debug, Clone)]
pub struct EndsWithRule {
    pattern: TextPattern,
}

impl EndsWithRule {
    pub fn new(pattern: &str, case_sensitive: bool) -> Self {
        EndsWithRule {
            pattern: TextPattern::new(pattern, case_sensitive),
        }
    }
}

impl Rule for EndsWithRule {
    fn method(&self) -> &str {
        MatchMethod::EndsWith.as_str()
    }

    fn pattern(&self) -> &str {
        &self.pattern.original
    }

    fn case_sensitive(&self) -> bool {
        self.pattern.case_sensitive
    }

    fn matches(&self, text: &str) -> bool {
        self.pattern
            .compare(text, |subject, pattern| subject.ends_with(pattern))
    }
}
