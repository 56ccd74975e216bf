use padaccheda_types::PratyayaKind;
use padaccheda_vyakarana::Vyakarana;

/// One derivational reading of a surface word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationMatch {
    /// The word with the suffix removed.
    pub base: String,
    pub suffix: String,
    pub kind: PratyayaKind,
    pub category: String,
}

/// Match a surface word against the pratyaya suffix table.
///
/// Longest-suffix-first, all readings returned. An empty result is a
/// legitimate outcome: most words carry no recognizable derivational suffix.
pub fn analyze_derivation(word: &str, kb: &Vyakarana) -> Vec<DerivationMatch> {
    let mut matches = Vec::new();
    for pattern in kb.derivations() {
        let Some(base) = word.strip_suffix(&pattern.suffix) else {
            continue;
        };
        // Single-character residues (क from बालक minus ालक, say) are noise,
        // not bases.
        if base.chars().count() < 2 {
            continue;
        }
        matches.push(DerivationMatch {
            base: base.to_string(),
            suffix: pattern.suffix.clone(),
            kind: pattern.kind,
            category: pattern.category.clone(),
        });
    }
    matches
}
