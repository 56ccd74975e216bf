mod builder;
mod kosha;

pub use kosha::Kosha;

/// Error type for kosha operations.
#[derive(Debug, thiserror::Error)]
pub enum KoshaError {
    #[error("line {line}: expected `word<TAB>frequency`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: frequency {value:?} is not a non-negative integer")]
    BadFrequency { line: usize, value: String },
}
