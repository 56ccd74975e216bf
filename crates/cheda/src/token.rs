use padaccheda_akshar::RawTokenClass;
use padaccheda_types::{Linga, PratyayaKind, Vacana, Vibhakti};

/// Kind of an emitted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Whitespace,
    Punctuation,
    Digit,
    Other,
}

impl From<RawTokenClass> for TokenKind {
    fn from(class: RawTokenClass) -> Self {
        match class {
            RawTokenClass::Word => TokenKind::Word,
            RawTokenClass::Whitespace => TokenKind::Whitespace,
            RawTokenClass::Punctuation => TokenKind::Punctuation,
            RawTokenClass::Digit => TokenKind::Digit,
            RawTokenClass::Other => TokenKind::Other,
        }
    }
}

/// Non-authoritative annotations attached to a word token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenAnalysis {
    /// The underlying pada (pre-sandhi form) this surface fragment realizes.
    /// Equals the token text except across a transformed junction.
    pub pada: String,
    /// Stem of the best inflectional reading.
    pub stem: Option<String>,
    /// Case, number and gender of the best inflectional reading.
    pub vibhakti: Option<(Vibhakti, Vacana, Linga)>,
    /// Kind of the best derivational reading.
    pub pratyaya: Option<PratyayaKind>,
    /// Sandhi rule that licensed the split this fragment came from.
    pub rule_id: Option<String>,
}

/// An emitted output unit.
///
/// `text` is the authoritative property: an exact substring of the canonical
/// input. Concatenating token texts in order reproduces that input; the
/// annotations are advisory and may be dropped without losing anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub analysis: Option<TokenAnalysis>,
}

impl Token {
    pub(crate) fn plain(text: String, kind: TokenKind) -> Self {
        Token {
            text,
            kind,
            analysis: None,
        }
    }
}
