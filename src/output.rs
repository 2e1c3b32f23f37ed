//! Output formatters (human and JSONL)

pub mod human;
pub mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;

/// Result of evaluating one input against a rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// The evaluated text
    pub input: String,

    /// Index of the first matching rule, if any
    pub rule: Option<usize>,
}

impl MatchOutcome {
    pub fn matched(&self) -> bool {
        self.rule.is_some()
    }
}
