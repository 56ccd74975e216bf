use padaccheda_akshar::normalize;
use padaccheda_cheda::{Config, Engine, Kosha, TokenKind, Vyakarana};

fn engine() -> Engine {
    Engine::new(
        Vyakarana::bundled().unwrap(),
        Kosha::bundled(),
        Config::default(),
    )
    .unwrap()
}

fn engine_with(config: Config) -> Engine {
    Engine::new(Vyakarana::bundled().unwrap(), Kosha::bundled(), config).unwrap()
}

fn texts(engine: &Engine, input: &str) -> Vec<String> {
    engine
        .tokenize(input)
        .into_iter()
        .map(|t| t.text)
        .collect()
}

fn assert_reversible(engine: &Engine, input: &str) {
    let tokens = engine.tokenize(input);
    assert_eq!(
        Engine::detokenize(&tokens),
        normalize(input),
        "round trip failed for {input:?}"
    );
}

// Plain words separated by a space stay separate tokens.
#[test]
fn two_words_stay_separate() {
    let e = engine();
    assert_eq!(texts(&e, "राम सीता"), vec!["राम", " ", "सीता"]);
}

// The spaced surface keeps its words; the sandhi-joined form splits only
// because the winning candidate re-joins exactly.
#[test]
fn visarga_avagraha_round_trips() {
    let e = engine();
    assert_eq!(texts(&e, "रामः अत्र"), vec!["रामः", " ", "अत्र"]);

    let tokens = e.tokenize("रामोऽत्र");
    assert_eq!(Engine::detokenize(&tokens), "रामोऽत्र");
    // The winner restores रामः + अत्र via VIS01 and is emitted as surface
    // fragments with the pada forms riding as annotations.
    assert_eq!(tokens.len(), 2);
    let padas: Vec<&str> = tokens
        .iter()
        .map(|t| t.analysis.as_ref().unwrap().pada.as_str())
        .collect();
    assert_eq!(padas, vec!["रामः", "अत्र"]);
    assert_eq!(
        tokens[0].analysis.as_ref().unwrap().rule_id.as_deref(),
        Some("VIS01")
    );
}

// सुरोत्तमः splits through the guna rule and re-joins exactly.
#[test]
fn guna_compound_round_trips() {
    let e = engine();
    let candidates = e.analyze_word("सुरोत्तमः");
    assert!(
        candidates
            .iter()
            .any(|c| c.parts() == ["सुर", "उत्तमः"] && c.rule_label() == "VS13"),
        "pool must contain the VS13 split"
    );

    let tokens = e.tokenize("सुरोत्तमः");
    assert_eq!(Engine::detokenize(&tokens), "सुरोत्तमः");
}

#[test]
fn empty_input() {
    let e = engine();
    let tokens = e.tokenize("");
    assert!(tokens.is_empty());
    assert_eq!(Engine::detokenize(&tokens), "");
}

// The danda is its own token and the whole line round-trips.
#[test]
fn gita_opening_line() {
    let e = engine();
    let input = "धर्मक्षेत्रे कुरुक्षेत्रे।";
    let tokens = e.tokenize(input);
    assert_eq!(Engine::detokenize(&tokens), input);
    assert_eq!(tokens.last().unwrap().text, "।");
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Punctuation);
}

// Vedic accents stay on their base characters.
#[test]
fn vedic_accent_preserved() {
    let e = engine();
    let tokens = e.tokenize("अ\u{0952}");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "अ\u{0952}");
    assert_eq!(tokens[0].kind, TokenKind::Word);
}

#[test]
fn edge_inputs_round_trip() {
    let e = engine();
    for input in [
        "क",
        " ",
        "   \t\n",
        "१२३४",
        "42",
        "abc",
        "hello राम world",
        "।॥।",
        "क़\u{093C}",
        "श्लोक 42",
        "अग्निमीळे पुरोहितं यज्ञस्य देवमृत्विजम्।",
    ] {
        assert_reversible(&e, input);
    }
}

#[test]
fn determinism() {
    let e = engine();
    let input = "धर्मक्षेत्रे कुरुक्षेत्रे समवेता युयुत्सवः।";
    let first = e.tokenize(input);
    let second = e.tokenize(input);
    assert_eq!(first, second);

    // A fresh engine built from the same data agrees token for token.
    let other = engine();
    assert_eq!(other.tokenize(input), first);
}

#[test]
fn winners_rejoin() {
    let e = engine();
    for word in ["रामोऽत्र", "सुरोत्तमः", "नमस्ते", "इत्यादि", "देवेन्द्र", "संसार"] {
        let winner = &e.analyze_word(word)[0];
        if winner.parts().len() > 1 {
            assert_eq!(
                winner.split.rejoin(e.kb()).as_deref(),
                Some(word),
                "winner for {word:?} must re-join"
            );
        }
    }
}

#[test]
fn no_split_wins_for_plain_words() {
    let e = engine();
    for word in ["राम", "सीता", "गच्छति", "अस्ति"] {
        let winner = &e.analyze_word(word)[0];
        assert_eq!(winner.parts(), [word], "expected no-split for {word:?}");
    }
}

#[test]
fn safe_mode_totality_without_splitting() {
    let config = Config {
        enable_sandhi_splitting: false,
        ..Config::default()
    };
    let e = engine_with(config);
    for input in [
        "रामोऽत्र",
        "धर्मक्षेत्रे कुरुक्षेत्रे।",
        "सुरोत्तमः गच्छति",
        "abc १२३",
    ] {
        assert_reversible(&e, input);
        // Every word-class run stays one token
        for t in e.tokenize(input) {
            if t.kind == TokenKind::Word {
                assert!(t.analysis.as_ref().is_none_or(|a| a.rule_id.is_none()));
            }
        }
    }
    assert_eq!(e.statistics().fallback_count, 0);
}

#[test]
fn dropping_whitespace_is_lossy_but_ordered() {
    let config = Config {
        preserve_whitespace: false,
        ..Config::default()
    };
    let e = engine_with(config);
    let tokens = e.tokenize("राम सीता");
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Whitespace));
    assert_eq!(Engine::detokenize(&tokens), "रामसीता");
}

#[test]
fn stripping_accents_is_lossy() {
    let config = Config {
        preserve_vedic_accents: false,
        ..Config::default()
    };
    let e = engine_with(config);
    let tokens = e.tokenize("अ\u{0952}ग्निम्");
    assert_eq!(Engine::detokenize(&tokens), "अग्निम्");
}

#[test]
fn empty_lexicon_still_segments() {
    let e = Engine::new(
        Vyakarana::bundled().unwrap(),
        Kosha::empty(),
        Config::default(),
    )
    .unwrap();
    assert_reversible(&e, "धर्मक्षेत्रे कुरुक्षेत्रे।");
    // Frequency evidence is gone, so the candidate scores lean on rule
    // priority and morphology alone.
    let winner = &e.analyze_word("धर्मक्षेत्रे")[0];
    assert_eq!(winner.scores.freq, 0.0);
}

#[test]
fn annotations_carry_morphology() {
    let e = engine();
    let tokens = e.tokenize("रामस्य");
    assert_eq!(tokens.len(), 1);
    let analysis = tokens[0].analysis.as_ref().expect("रामस्य has readings");
    assert_eq!(analysis.stem.as_deref(), Some("राम"));
    assert!(analysis.vibhakti.is_some());
}

#[test]
fn tokenize_normalizes_input() {
    let e = engine();
    // Decomposed न + nukta composes under NFC before segmentation
    let input = "\u{0928}\u{093C}";
    let tokens = e.tokenize(input);
    assert_eq!(Engine::detokenize(&tokens), normalize(input));
    assert_eq!(tokens[0].text, "\u{0929}");
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // Reversibility, the primary invariant: over arbitrary Unicode.
        #[test]
        fn reversibility_any_unicode(s in "\\PC{0,40}") {
            let e = engine();
            let tokens = e.tokenize(&s);
            prop_assert_eq!(Engine::detokenize(&tokens), normalize(&s));
        }

        // Reversibility over Devanagari-dense text, where splitting actually
        // happens.
        #[test]
        fn reversibility_devanagari(s in "[\\u{0900}-\\u{097F} ।॥ऽ]{0,40}") {
            let e = engine();
            let tokens = e.tokenize(&s);
            prop_assert_eq!(Engine::detokenize(&tokens), normalize(&s));
        }

        // Partition: tokens are non-empty and cover the canonical form in
        // order.
        #[test]
        fn partition_devanagari(s in "[\\u{0900}-\\u{097F} ]{0,40}") {
            let e = engine();
            let canonical = normalize(&s);
            let mut pos = 0;
            for t in e.tokenize(&s) {
                prop_assert!(!t.text.is_empty());
                prop_assert!(canonical[pos..].starts_with(&t.text));
                pos += t.text.len();
            }
            prop_assert_eq!(pos, canonical.len());
        }
    }
}
