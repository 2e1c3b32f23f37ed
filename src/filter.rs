#![forbid(unsafe_code)]

//! Filter documents: parsing into rule sets and evaluating them

mod diagnostic;
mod parser;
mod ruleset;

pub use diagnostic::{
    DiagnosticCallback, DiagnosticKind, DiagnosticSink, DiscardDiagnostics, ParseDiagnostic,
};
pub use parser::{ParseOptions, ParseReport, decode_document};
pub use ruleset::RuleSet;
