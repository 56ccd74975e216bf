mod kb;
mod loader;
mod rules;

pub use kb::Vyakarana;
pub use rules::{DerivationPattern, InflectionPattern, SandhiRule};

/// Error type for knowledge-base loading and validation.
///
/// Every variant is fatal: a knowledge base that fails validation is never
/// handed to the engine.
#[derive(Debug, thiserror::Error)]
pub enum VyakaranaError {
    #[error("{table} line {line}: {message}")]
    Parse {
        table: &'static str,
        line: usize,
        message: String,
    },

    #[error("duplicate sandhi rule id {0:?}")]
    DuplicateId(String),

    #[error("rule {id}: priority {priority} outside 1..=10")]
    PriorityOutOfRange { id: String, priority: i64 },

    #[error("rule {id}: required pattern is empty")]
    EmptyPattern { id: String },

    #[error("rule {id}: pattern {pattern:?} is not NFC-normalized")]
    NotNfc { id: String, pattern: String },

    #[error("rule {id}: empty left pattern requires a left-context constraint")]
    Unanchored { id: String },

    #[error("rule {id}: forward application of its own patterns does not yield its result")]
    Inconsistent { id: String },
}
