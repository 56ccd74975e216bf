mod devanagari;
mod normalize;
mod segment;
mod syllable;

pub use devanagari::{
    CharType, classify, is_avagraha, is_halanta, is_matra, is_svar, is_vedic_accent, is_visarga,
    is_vyanjan,
};
pub use normalize::{normalize, strip_vedic_accents};
pub use segment::{RawToken, RawTokenClass, segment};
pub use syllable::{Akshara, split_aksharas};
