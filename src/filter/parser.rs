#![forbid(unsafe_code)]

//! Filter document parsing
//!
//! A filter document is a mapping with a `name` and an ordered `filters`
//! sequence. Each filter entry names a `method`, the pattern `text` and an
//! optional `case_sensitive` flag:
//!
//! ```json
//! {
//!     "name": "My Filter",
//!     "filters": [
//!         { "text": "test", "method": "contains", "case_sensitive": false },
//!         { "text": "([0-9a-fA-f]{2} ){4}\\d*", "method": "regex" }
//!     ]
//! }
//! ```
//!
//! Documents may be JSON or TOML. Both decode to the same generic tree before
//! any filter is looked at. Unrecognized keys are ignored.

use crate::error::FilterError;
use crate::filter::{DiagnosticKind, DiagnosticSink, DiscardDiagnostics, ParseDiagnostic, RuleSet};
use crate::rules::{Rule, RuleRegistry};
use crate::types::DocumentFormat;
use serde_json::{Map, Value};
use tracing::{debug, info};

// filter document keys
const KEY_NAME: &str = "name";
const KEY_FILTERS: &str = "filters";
// filter entry keys
const KEY_METHOD: &str = "method";
const KEY_TEXT: &str = "text";
const KEY_CASE_SENSITIVE: &str = "case_sensitive";
const REQUIRED_FILTER_PARAMS: [&str; 2] = [KEY_TEXT, KEY_METHOD];

/// How a filter document should be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Drop invalid filter entries instead of failing the whole parse
    pub skip_invalid: bool,

    /// Encoding of the document text
    pub format: DocumentFormat,
}

impl ParseOptions {
    /// Options for a JSON document with the given recovery mode
    pub fn new(skip_invalid: bool) -> Self {
        ParseOptions {
            skip_invalid,
            format: DocumentFormat::Json,
        }
    }

    /// Same options with another document format
    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = format;
        self
    }
}

/// Outcome of a parse that collects its diagnostics
#[derive(Debug)]
pub struct ParseReport {
    /// The parsed set, or `None` when the text is not a filter document
    pub rule_set: Option<RuleSet>,

    /// Entries dropped in skip-invalid mode, in document order
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Decode document text into a generic tree
///
/// # Errors
///
/// Returns `FilterError::Parsing` carrying the decoder's message if the text
/// is not valid for the format.
pub fn decode_document(text: &str, format: DocumentFormat) -> Result<Value, FilterError> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str(text).map_err(|e| FilterError::Parsing(e.to_string()))
        }
        DocumentFormat::Toml => {
            toml::from_str::<Value>(text).map_err(|e| FilterError::Parsing(e.to_string()))
        }
    }
}

impl RuleSet {
    /// Parse JSON document text with the builtin rule methods
    ///
    /// Returns `Ok(None)` when the document lacks a `name` or a `filters`
    /// sequence. With `skip_invalid` set, invalid entries are dropped and
    /// logged; otherwise the first invalid entry aborts the parse.
    ///
    /// # Errors
    ///
    /// - `FilterError::Parsing` if the text is not valid JSON
    /// - `FilterError::Attribute` if an entry is missing `text`/`method`, names
    ///   an unknown method or has a wrongly-typed field (strict mode only)
    /// - `FilterError::Rule` if a pattern fails to compile (strict mode only)
    pub fn parse(text: &str, skip_invalid: bool) -> Result<Option<RuleSet>, FilterError> {
        Self::parse_with(
            text,
            &ParseOptions::new(skip_invalid),
            &RuleRegistry::with_builtin(),
            &mut DiscardDiagnostics,
        )
    }

    /// Parse document text, collecting dropped-entry diagnostics
    pub fn parse_report(text: &str, options: &ParseOptions) -> Result<ParseReport, FilterError> {
        let mut diagnostics = Vec::new();
        let rule_set = Self::parse_with(
            text,
            options,
            &RuleRegistry::with_builtin(),
            &mut diagnostics,
        )?;
        Ok(ParseReport {
            rule_set,
            diagnostics,
        })
    }

    /// Parse document text with an explicit registry and diagnostic sink
    pub fn parse_with(
        text: &str,
        options: &ParseOptions,
        registry: &RuleRegistry,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Option<RuleSet>, FilterError> {
        let document = decode_document(text, options.format)?;
        Self::from_value(&document, options, registry, sink)
    }

    /// Build a rule set from an already-decoded document tree
    pub fn from_value(
        document: &Value,
        options: &ParseOptions,
        registry: &RuleRegistry,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Option<RuleSet>, FilterError> {
        let Some(top) = document.as_object() else {
            debug!("document root is not a mapping");
            return Ok(None);
        };

        let (Some(name), Some(filters)) = (top.get(KEY_NAME), top.get(KEY_FILTERS)) else {
            debug!("document lacks '{}' or '{}'", KEY_NAME, KEY_FILTERS);
            return Ok(None);
        };

        let Some(filters) = filters.as_array() else {
            debug!("'{}' is not a sequence", KEY_FILTERS);
            return Ok(None);
        };

        let name = name_text(name);
        let mut rules = Vec::with_capacity(filters.len());
        let mut skipped = 0usize;

        for (index, entry) in filters.iter().enumerate() {
            match parse_entry(entry, registry) {
                Ok(rule) => {
                    debug!(index, method = rule.method(), pattern = rule.pattern(), "accepted filter");
                    rules.push(rule);
                }
                Err(kind) => {
                    let diagnostic = ParseDiagnostic::new(index, kind);
                    if !options.skip_invalid {
                        return Err(diagnostic.into_error());
                    }
                    debug!(index, kind = diagnostic.kind.as_str(), "skipping filter: {}", diagnostic);
                    sink.report(diagnostic);
                    skipped += 1;
                }
            }
        }

        info!(name = %name, rules = rules.len(), skipped, "parsed filter document");
        Ok(Some(RuleSet::new(name, rules)))
    }
}

/// Parse one filter entry into a rule
fn parse_entry(entry: &Value, registry: &RuleRegistry) -> Result<Box<dyn Rule>, DiagnosticKind> {
    let Some(entry) = entry.as_object() else {
        return Err(DiagnosticKind::NotAMapping);
    };

    let missing: Vec<String> = REQUIRED_FILTER_PARAMS
        .iter()
        .filter(|key| !entry.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DiagnosticKind::MissingParams {
            missing,
            required: REQUIRED_FILTER_PARAMS.iter().map(|k| k.to_string()).collect(),
        });
    }

    let method = string_field(entry, KEY_METHOD)?;
    if !registry.contains(method) {
        return Err(DiagnosticKind::UnknownMethod {
            method: method.to_string(),
            valid: registry.methods().into_iter().map(String::from).collect(),
        });
    }

    let case_sensitive = match entry.get(KEY_CASE_SENSITIVE) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => {
            return Err(DiagnosticKind::InvalidField {
                field: KEY_CASE_SENSITIVE.to_string(),
                expected: "a boolean",
            });
        }
    };
    let text = string_field(entry, KEY_TEXT)?;

    registry
        .build(method, text, case_sensitive)
        .map_err(DiagnosticKind::from)
}

fn string_field<'a>(entry: &'a Map<String, Value>, key: &str) -> Result<&'a str, DiagnosticKind> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| DiagnosticKind::InvalidField {
            field: key.to_string(),
            expected: "a string",
        })
}

/// The name is kept opaque: non-string names are rendered as document text
fn name_text(name: &Value) -> String {
    match name {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
