#![forbid(unsafe_code)]

//! Named, ordered collection of rules evaluated under logical OR

use crate::rules::Rule;
use rayon::prelude::*;

/// A named set of rules
///
/// A text matches the set when at least one rule matches it. Rules keep the
/// order they had in the filter document. A set is immutable once built; to
/// change rules, build a new set.
#[derive(Debug)]
pub struct RuleSet {
    name: String,
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Create a rule set from already-built rules
    pub fn new(name: impl Into<String>, rules: Vec<Box<dyn Rule>>) -> Self {
        RuleSet {
            name: name.into(),
            rules,
        }
    }

    /// Returns the descriptive name of the set
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rules in document order
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Get the number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the set has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns true if any rule matches the text
    ///
    /// Rules are tried in order and evaluation stops at the first match. An
    /// empty set matches nothing.
    pub fn matches(&self, text: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(text))
    }

    /// Returns the index of the first rule matching the text
    pub fn first_match(&self, text: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(text))
    }

    /// Evaluate many inputs in parallel
    ///
    /// The result holds, for each input in order, the index of the first
    /// matching rule.
    pub fn first_matches<S>(&self, inputs: &[S]) -> Vec<Option<usize>>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.first_match(input.as_ref()))
            .collect()
    }

    /// Evaluate many inputs in parallel, returning one verdict per input
    pub fn matches_all<S>(&self, inputs: &[S]) -> Vec<bool>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.matches(input.as_ref()))
            .collect()
    }
}
