#![forbid(unsafe_code)]

//! Rule registry mapping method tokens to rule constructors
//!
//! The registry is the single extension point for matching strategies. The
//! builtin registry knows exactly `contains`, `endswith` and `regex`; callers
//! may register further tokens before parsing.

use crate::error::RuleError;
use crate::rules::{ContainsRule, EndsWithRule, RegexRule, Rule};
use crate::types::MatchMethod;
use std::collections::BTreeMap;

/// Builds a rule from its pattern and case-sensitivity flag
pub type RuleConstructor = fn(&str, bool) -> Result<Box<dyn Rule>, RuleError>;

/// Registry for rule constructors, keyed by method token
#[derive(Clone)]
pub struct RuleRegistry {
    constructors: BTreeMap<String, RuleConstructor>,
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("methods", &self.methods())
            .finish()
    }
}

impl RuleRegistry {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Create a registry holding the three builtin methods
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for method in MatchMethod::ALL {
            registry.register(method.as_str(), builtin_constructor(method));
        }
        registry
    }

    /// Register a constructor for a method token
    ///
    /// Returns the constructor previously registered for the token, if any.
    pub fn register(
        &mut self,
        method: impl Into<String>,
        constructor: RuleConstructor,
    ) -> Option<RuleConstructor> {
        self.constructors.insert(method.into(), constructor)
    }

    /// Check whether a method token is known
    pub fn contains(&self, method: &str) -> bool {
        self.constructors.contains_key(method)
    }

    /// Returns all registered method tokens, sorted
    pub fn methods(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    /// Build a rule for the given method
    ///
    /// # Errors
    ///
    /// Returns `RuleError::UnknownMethod` if the token is not registered, or
    /// whatever the constructor reports (e.g. `RuleError::InvalidRegex`).
    pub fn build(
        &self,
        method: &str,
        pattern: &str,
        case_sensitive: bool,
    ) -> Result<Box<dyn Rule>, RuleError> {
        let constructor =
            self.constructors
                .get(method)
                .ok_or_else(|| RuleError::UnknownMethod {
                    method: method.to_string(),
                    valid: self.methods().into_iter().map(String::from).collect(),
                })?;
        constructor(pattern, case_sensitive)
    }

    /// Get the number of registered methods
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

fn builtin_constructor(method: MatchMethod) -> RuleConstructor {
    match method {
        MatchMethod::Contains => build_contains,
        MatchMethod::EndsWith => build_ends_with,
        MatchMethod::Regex => build_regex,
    }
}

fn build_contains(pattern: &str, case_sensitive: bool) -> Result<Box<dyn Rule>, RuleError> {
    Ok(Box::new(ContainsRule::new(pattern, case_sensitive)))
}

fn build_ends_with(pattern: &str, case_sensitive: bool) -> Result<Box<dyn Rule>, RuleError> {
    Ok(Box::new(EndsWithRule::new(pattern, case_sensitive)))
}

fn build_regex(pattern: &str, case_sensitive: bool) -> Result<Box<dyn Rule>, RuleError> {
    Ok(Box::new(RegexRule::new(pattern, case_sensitive)?))
}
