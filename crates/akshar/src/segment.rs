use crate::devanagari::{CharType, classify};

/// Coarse class of a run of characters, used by word/separator segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawTokenClass {
    /// Consonants, vowels, matras, virama, anusvara, chandrabindu, visarga,
    /// nukta, avagraha, and Vedic accents.
    Word,
    /// Unicode whitespace.
    Whitespace,
    /// Danda, double danda, and other Devanagari sign characters.
    Punctuation,
    /// Devanagari or ASCII digits.
    Digit,
    /// Everything else (Latin letters, foreign scripts, symbols).
    Other,
}

/// A half-open span `[start, end)` over the normalized input.
///
/// Spans produced by [`segment`] partition the input exactly: no gaps, no
/// overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken {
    pub start: usize,
    pub end: usize,
    pub class: RawTokenClass,
}

impl RawToken {
    /// The substring this span covers.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

fn char_class(c: char) -> RawTokenClass {
    if c.is_whitespace() {
        return RawTokenClass::Whitespace;
    }
    if c.is_ascii_digit() {
        return RawTokenClass::Digit;
    }
    match classify(c) {
        Some(
            CharType::Svar
            | CharType::Vyanjan
            | CharType::Matra
            | CharType::Halanta
            | CharType::Anusvara
            | CharType::Chandrabindu
            | CharType::Visarga
            | CharType::Nukta
            | CharType::Avagraha
            | CharType::VedicAccent,
        ) => RawTokenClass::Word,
        Some(CharType::Danda | CharType::OtherMark) => RawTokenClass::Punctuation,
        Some(CharType::Numeral) => RawTokenClass::Digit,
        None => RawTokenClass::Other,
    }
}

/// Segment text into class-coalesced runs.
///
/// Walks the string once and merges adjacent characters of the same class
/// into a single [`RawToken`]. The caller is expected to pass text already
/// normalized with [`crate::normalize`].
pub fn segment(text: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut run_class: Option<RawTokenClass> = None;

    for (pos, c) in text.char_indices() {
        let class = char_class(c);
        match run_class {
            Some(current) if current == class => {}
            Some(current) => {
                tokens.push(RawToken {
                    start: run_start,
                    end: pos,
                    class: current,
                });
                run_start = pos;
                run_class = Some(class);
            }
            None => {
                run_class = Some(class);
            }
        }
    }

    if let Some(class) = run_class {
        tokens.push(RawToken {
            start: run_start,
            end: text.len(),
            class,
        });
    }

    tokens
}
