use padaccheda_akshar::RawToken;

use crate::token::Token;

/// Byte-exact round-trip check: the concatenated token texts must equal the
/// canonical string.
pub(crate) fn verify(canonical: &str, tokens: &[Token]) -> bool {
    let total: usize = tokens.iter().map(|t| t.text.len()).sum();
    if total != canonical.len() {
        return false;
    }
    let mut pos = 0;
    for token in tokens {
        if !canonical[pos..].starts_with(&token.text) {
            return false;
        }
        pos += token.text.len();
    }
    pos == canonical.len()
}

/// One token per raw span, verbatim. Cannot fail: the spans partition the
/// canonical string by construction.
pub(crate) fn safe_mode(canonical: &str, raw: &[RawToken]) -> Vec<Token> {
    raw.iter()
        .map(|rt| Token::plain(rt.text(canonical).to_string(), rt.class.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use padaccheda_akshar::segment;

    fn word(text: &str) -> Token {
        Token::plain(text.to_string(), TokenKind::Word)
    }

    #[test]
    fn test_verify_accepts_partition() {
        assert!(verify("रामः अत्र", &[
            word("रामः"),
            word(" "),
            word("अत्र")
        ]));
    }

    #[test]
    fn test_verify_rejects_gap_and_mutation() {
        assert!(!verify("रामः अत्र", &[word("रामः"), word("अत्र")]));
        assert!(!verify("रामः", &[word("रामं")]));
    }

    #[test]
    fn test_verify_empty() {
        assert!(verify("", &[]));
        assert!(!verify("क", &[]));
    }

    #[test]
    fn test_safe_mode_partitions() {
        let text = "धर्मक्षेत्रे कुरुक्षेत्रे। abc 42";
        let tokens = safe_mode(text, &segment(text));
        assert!(verify(text, &tokens));
    }
}
