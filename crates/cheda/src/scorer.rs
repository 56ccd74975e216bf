use std::cmp::Ordering;

use padaccheda_kosha::Kosha;
use padaccheda_sandhi::{Split, SplitOrigin};

use crate::candidate::{Candidate, PartAnalysis, Scores};
use crate::config::Config;

/// Baseline rule score for the trivial no-split candidate.
pub const NO_SPLIT_RULE_SCORE: f64 = 0.5;
/// Baseline rule score for lexicon-driven concatenative splits.
pub const LEX_RULE_SCORE: f64 = 0.4;
/// Composites closer than this count as tied and fall through to the
/// structural tie-breaks.
pub const SCORE_EPSILON: f64 = 1e-9;

pub(crate) fn rule_score(origin: &SplitOrigin) -> f64 {
    match origin {
        SplitOrigin::Rule { priority, .. } => f64::from(*priority) / 10.0,
        SplitOrigin::LexLeft | SplitOrigin::LexRight => LEX_RULE_SCORE,
        SplitOrigin::NoSplit => NO_SPLIT_RULE_SCORE,
    }
}

/// Geometric mean of log-damped part frequencies, normalized against the
/// reference count. One unattested part zeroes the whole score: the reading
/// asserts that part exists as a word, and the lexicon disagrees.
pub(crate) fn freq_score(parts: &[String], kosha: &Kosha, frequency_reference: f64) -> f64 {
    let mut product = 1.0;
    for part in parts {
        let frequency = kosha.frequency(part);
        if frequency == 0 {
            return 0.0;
        }
        product *= (1.0 + frequency as f64).ln();
    }
    let geomean = product.powf(1.0 / parts.len() as f64);
    (geomean / (1.0 + frequency_reference).ln()).clamp(0.0, 1.0)
}

/// Additive morphological-validity score: 0.2 per side with an inflectional
/// reading, 0.2 per side with a derivational reading, plus a 0.2 bonus when
/// every side has some reading. Capped at 1.0; for a two-part candidate the
/// five contributions reach the cap exactly.
pub(crate) fn grammar_score(analyses: &[PartAnalysis]) -> f64 {
    let mut score: f64 = 0.0;
    for analysis in analyses {
        if !analysis.inflections.is_empty() {
            score += 0.2;
        }
        if !analysis.derivations.is_empty() {
            score += 0.2;
        }
    }
    if analyses.len() >= 2 && analyses.iter().all(PartAnalysis::has_any) {
        score += 0.2;
    }
    score.min(1.0)
}

pub(crate) fn score(
    split: &Split,
    analyses: &[PartAnalysis],
    kosha: &Kosha,
    config: &Config,
) -> Scores {
    let rule = rule_score(&split.origin);
    let freq = freq_score(&split.parts, kosha, config.frequency_reference);
    let grammar = grammar_score(analyses);
    let weights = &config.weights;
    let composite = weights.rule * rule + weights.freq * freq + weights.grammar * grammar;
    Scores {
        rule,
        freq,
        grammar,
        composite,
    }
}

/// Ranking order: best candidate first.
///
/// Composites are quantized to the tie epsilon so that near-equal scores fall
/// through to the deterministic structural tie-breaks: fewer parts, then
/// higher rule score, then lexicographic order of the joined parts, then the
/// strategy label. The result is a strict total order, so sorting is stable
/// across runs and platforms.
pub(crate) fn compare(a: &Candidate, b: &Candidate) -> Ordering {
    quantize(b.scores.composite)
        .cmp(&quantize(a.scores.composite))
        .then_with(|| a.split.parts.len().cmp(&b.split.parts.len()))
        .then_with(|| quantize(b.scores.rule).cmp(&quantize(a.scores.rule)))
        .then_with(|| a.split.parts.join("+").cmp(&b.split.parts.join("+")))
        .then_with(|| a.rule_label().cmp(b.rule_label()))
}

fn quantize(score: f64) -> i64 {
    (score / SCORE_EPSILON).round() as i64
}
