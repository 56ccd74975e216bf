//! Reversible tokenization of Sanskrit Devanagari text.
//!
//! The engine segments normalized text into word and separator runs,
//! proposes sandhi splits for each word, scores the candidates against the
//! grammar knowledge base and the frequency lexicon, and emits tokens whose
//! concatenation reproduces the normalized input byte-for-byte. When a
//! speculative emission would break that invariant, the tokenizer falls back
//! to the trivial one-token-per-run segmentation, which cannot fail.

mod candidate;
mod config;
mod engine;
mod scorer;
mod stats;
mod token;
mod verify;

pub use candidate::{Candidate, PartAnalysis, Scores};
pub use config::{Config, ConfigError, Weights};
pub use engine::Engine;
pub use scorer::{LEX_RULE_SCORE, NO_SPLIT_RULE_SCORE, SCORE_EPSILON};
pub use stats::Statistics;
pub use token::{Token, TokenAnalysis, TokenKind};

pub use padaccheda_kosha::Kosha;
pub use padaccheda_sandhi::{Split, SplitOrigin};
pub use padaccheda_vyakarana::{Vyakarana, VyakaranaError};
