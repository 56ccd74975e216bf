use padaccheda_akshar::{is_halanta, is_vyanjan};
use padaccheda_types::{Linga, StemClass, Vacana, Vibhakti};
use padaccheda_vyakarana::Vyakarana;

/// One inflectional reading of a surface word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectionMatch {
    /// The word with the ending removed.
    pub stem: String,
    pub ending: String,
    pub vibhakti: Vibhakti,
    pub vacana: Vacana,
    pub linga: Linga,
    pub stem_class: StemClass,
    pub priority: u8,
}

/// Match a surface word against the vibhakti ending table.
///
/// Patterns are scanned longest-ending-first and every compatible reading is
/// returned; ambiguity is the norm (e.g. -आः is nominative plural for more
/// than one stem class). Priority is only a downstream tie-break signal.
pub fn analyze_inflection(word: &str, kb: &Vyakarana) -> Vec<InflectionMatch> {
    let mut matches = Vec::new();
    for pattern in kb.inflections() {
        let Some(stem) = word.strip_suffix(&pattern.ending) else {
            continue;
        };
        if stem.is_empty() || !stem_shape_ok(stem, pattern.stem_class) {
            continue;
        }
        matches.push(InflectionMatch {
            stem: stem.to_string(),
            ending: pattern.ending.clone(),
            vibhakti: pattern.vibhakti,
            vacana: pattern.vacana,
            linga: pattern.linga,
            stem_class: pattern.stem_class,
            priority: pattern.priority,
        });
    }
    matches
}

/// The residual stem's final shape must fit the declared stem class. Endings
/// of vowel stems carry the theme vowel with them, so stripping them leaves a
/// bare consonant; consonant stems may additionally surface with a final
/// virama.
fn stem_shape_ok(stem: &str, class: StemClass) -> bool {
    let Some(last) = stem.chars().last() else {
        return false;
    };
    match class {
        StemClass::Halanta => is_vyanjan(last) || is_halanta(last),
        _ => is_vyanjan(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> Vyakarana {
        Vyakarana::bundled().unwrap()
    }

    #[test]
    fn test_nominative_singular() {
        let matches = analyze_inflection("रामः", &kb());
        assert!(
            matches.iter().any(|m| {
                m.stem == "राम"
                    && m.vibhakti == Vibhakti::Prathama
                    && m.vacana == Vacana::Eka
                    && m.stem_class == StemClass::A
            }),
            "got {matches:?}"
        );
    }

    #[test]
    fn test_ambiguous_plural() {
        // -आः is nominative plural of both a-stems and aa-stems
        let matches = analyze_inflection("रामाः", &kb());
        let classes: Vec<StemClass> = matches.iter().map(|m| m.stem_class).collect();
        assert!(classes.contains(&StemClass::A));
        assert!(classes.contains(&StemClass::Aa));
    }

    #[test]
    fn test_genitive() {
        let matches = analyze_inflection("रामस्य", &kb());
        assert!(
            matches
                .iter()
                .any(|m| m.stem == "राम" && m.vibhakti == Vibhakti::Shashthi)
        );
    }

    #[test]
    fn test_longest_ending_preferred_first() {
        // रामेषु: ेषु (loc pl) must be reported before े (loc sg)
        let matches = analyze_inflection("रामेषु", &kb());
        assert!(!matches.is_empty());
        assert_eq!(matches[0].ending, "ेषु");
        assert_eq!(matches[0].vacana, Vacana::Bahu);
    }

    #[test]
    fn test_stem_shape_gate() {
        // सीता reads as feminine aa-stem; the stem सीत ends in a bare
        // consonant as required
        let matches = analyze_inflection("सीता", &kb());
        assert!(
            matches
                .iter()
                .any(|m| m.stem == "सीत" && m.stem_class == StemClass::Aa)
        );
        // But a matra-final residue is rejected: no reading of "ताा" exists
        assert!(analyze_inflection("ताा", &kb()).is_empty());
    }

    #[test]
    fn test_halanta_stem() {
        let matches = analyze_inflection("मरुत्सु", &kb());
        assert!(
            matches.iter().any(|m| {
                m.stem == "मरुत्"
                    && m.stem_class == StemClass::Halanta
                    && m.vibhakti == Vibhakti::Saptami
            })
        );
    }

    #[test]
    fn test_no_match() {
        assert!(analyze_inflection("क", &kb()).is_empty());
        assert!(analyze_inflection("hello", &kb()).is_empty());
    }

    #[test]
    fn test_every_pattern_matches_a_synthetic_word() {
        let kb = kb();
        for pattern in kb.inflections() {
            let stem = match pattern.stem_class {
                StemClass::Halanta => "मरुत्",
                _ => "राम",
            };
            let word = format!("{stem}{}", pattern.ending);
            let matches = analyze_inflection(&word, &kb);
            assert!(
                matches.iter().any(|m| {
                    m.ending == pattern.ending
                        && m.vibhakti == pattern.vibhakti
                        && m.vacana == pattern.vacana
                        && m.stem_class == pattern.stem_class
                }),
                "ending {:?} did not match synthetic word {word:?}",
                pattern.ending
            );
        }
    }
}
