mod apply;
mod split;

pub use apply::{SandhiOutput, apply};
pub use split::{Split, SplitOrigin, split};

/// Error type for forward sandhi combination.
#[derive(Debug, thiserror::Error)]
pub enum SandhiError {
    #[error("empty input")]
    EmptyInput,

    #[error("no sandhi rule applies for '{first}' + '{second}'")]
    NoRuleApplies { first: String, second: String },
}
