use padaccheda_sandhi::Split;
use padaccheda_shabda::{DerivationMatch, InflectionMatch};

/// Morphological readings of one part of a candidate.
#[derive(Debug, Clone, Default)]
pub struct PartAnalysis {
    pub inflections: Vec<InflectionMatch>,
    pub derivations: Vec<DerivationMatch>,
}

impl PartAnalysis {
    /// Whether any reading, inflectional or derivational, exists.
    pub fn has_any(&self) -> bool {
        !self.inflections.is_empty() || !self.derivations.is_empty()
    }
}

/// Component scores, each in [0, 1], plus the weighted mix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub rule: f64,
    pub freq: f64,
    pub grammar: f64,
    pub composite: f64,
}

/// A scored analysis of one word span.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub split: Split,
    /// One entry per part of the split.
    pub analyses: Vec<PartAnalysis>,
    pub scores: Scores,
}

impl Candidate {
    /// Underlying morpheme forms of the split.
    pub fn parts(&self) -> &[String] {
        &self.split.parts
    }

    /// Stable label of the originating strategy ("VS13", "lex-left", ...).
    pub fn rule_label(&self) -> &str {
        self.split.origin.label()
    }
}
