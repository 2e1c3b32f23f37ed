#![forbid(unsafe_code)]

//! textfilter: declarative text filters
//!
//! A filter document names a set of rules (substring, suffix or regular
//! expression). Parsing it yields a [`RuleSet`]; a text matches the set when
//! any of its rules matches.
//!
//! ```
//! use textfilter::RuleSet;
//!
//! let doc = r#"{"name": "F", "filters": [{"text": "test", "method": "contains"}]}"#;
//! let set = RuleSet::parse(doc, false).unwrap().unwrap();
//! assert!(set.matches("TeSt"));
//! assert!(!set.matches("willnotmatch"));
//! ```

pub mod cli;
pub mod error;
pub mod filter;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{FilterError, RuleError};

// Re-export core domain types for convenient access
pub use filter::{ParseDiagnostic, ParseOptions, RuleSet};
pub use rules::{Rule, RuleRegistry};
pub use types::{DocumentFormat, MatchMethod};
