#![forbid(unsafe_code)]

//! Core domain types for textfilter
//!
//! This module defines the fundamental types used throughout the crate.

use std::fmt;
use std::path::Path;

/// Matching strategies understood by the builtin rule registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchMethod {
    Contains,
    EndsWith,
    Regex,
}

impl MatchMethod {
    /// All builtin methods, in token order
    pub const ALL: [MatchMethod; 3] = [
        MatchMethod::Contains,
        MatchMethod::EndsWith,
        MatchMethod::Regex,
    ];

    /// Returns the method token used in filter documents
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMethod::Contains => "contains",
            MatchMethod::EndsWith => "endswith",
            MatchMethod::Regex => "regex",
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encodings a filter document may be written in
///
/// Both decode into the same generic tree, so the parser does not care which
/// one was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Toml,
}

impl DocumentFormat {
    /// Guess the format from a file extension
    ///
    /// Anything that is not `.toml` is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }

    /// Returns the format name
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Toml => "toml",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
