#![forbid(unsafe_code)]

//! Core Rule trait shared by every matching strategy

use std::fmt;

/// Trait that all rules must implement
///
/// A rule is one matching strategy over one pattern. Rules are immutable once
/// constructed. The trait is `Send + Sync` so a parsed rule set can be shared
/// across threads without locking.
pub trait Rule: Send + Sync + fmt::Debug {
    /// Returns the method token this rule was built from
    fn method(&self) -> &str;

    /// Returns the pattern as written in the filter document
    fn pattern(&self) -> &str;

    /// Returns the case-sensitivity flag the rule was constructed with
    fn case_sensitive(&self) -> bool;

    /// Returns true if the text satisfies this rule
    fn matches(&self, text: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock rule for testing trait implementation
    #[derive(Debug)]
    struct AlwaysRule {
        answer: bool,
    }

    impl Rule for AlwaysRule {
        fn method(&self) -> &str {
            "always"
        }

        fn pattern(&self) -> &str {
            ""
        }

        fn case_sensitive(&self) -> bool {
            true
        }

        fn matches(&self, _text: &str) -> bool {
            self.answer
        }
    }

    #[test]
    fn test_rule_trait_implementation() {
        let rule = AlwaysRule { answer: true };
        assert_eq!(rule.method(), "always");
        assert!(rule.matches("anything"));
        assert!(!AlwaysRule { answer: false }.matches("anything"));
    }

    #[test]
    fn test_rule_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Box<dyn Rule>>();
        assert_sync::<Box<dyn Rule>>();
    }
}
