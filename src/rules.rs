#![forbid(unsafe_code)]

//! Rule definitions and registry

mod regex_rule;
mod registry;
mod rule;
mod text_rule;

// Re-export core types
pub use regex_rule::RegexRule;
pub use registry::{RuleConstructor, RuleRegistry};
pub use rule::Rule;
pub use text_rule::{ContainsRule, EndsWithRule};
