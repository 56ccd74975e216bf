use padaccheda_akshar::is_vyanjan;
use padaccheda_types::{
    Directions, LeftContext, Linga, PratyayaKind, SandhiCategory, StemClass, Vacana, Vibhakti,
};

/// One phonetic junction rule.
///
/// `left_pattern` matches the final substring of the left morpheme and
/// `right_pattern` the initial substring of the right morpheme; at a junction
/// the two are replaced by `result`. An empty `left_pattern` means the
/// junction consumes only the inherent अ of a final bare consonant, which is
/// invisible in the surface string; such rules carry a `left_context`
/// constraint so they stay anchored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandhiRule {
    /// Stable identifier, e.g. "VS13".
    pub id: String,
    pub category: SandhiCategory,
    pub left_pattern: String,
    pub right_pattern: String,
    pub result: String,
    /// 1..=10; higher is preferred.
    pub priority: u8,
    pub directions: Directions,
    pub left_context: LeftContext,
    /// Sutra citation, when the tradition records one.
    pub citation: Option<String>,
    /// Vedic-only rule (classical prose never triggers it).
    pub vedic: bool,
}

impl SandhiRule {
    /// Apply the rule forward: join `left` and `right` into one surface form.
    ///
    /// Returns `None` when the patterns or the left-context constraint do not
    /// match. The output equals
    /// `left - left_pattern ++ result ++ right - right_pattern`.
    pub fn apply(&self, left: &str, right: &str) -> Option<String> {
        let stem = left.strip_suffix(&self.left_pattern)?;
        if !left_context_ok(self.left_context, stem) {
            return None;
        }
        let tail = right.strip_prefix(&self.right_pattern)?;

        let mut out = String::with_capacity(stem.len() + self.result.len() + tail.len());
        out.push_str(stem);
        out.push_str(&self.result);
        out.push_str(tail);
        Some(out)
    }
}

fn left_context_ok(context: LeftContext, stem: &str) -> bool {
    match context {
        LeftContext::Any => true,
        LeftContext::InherentA => stem.chars().last().is_some_and(is_vyanjan),
        LeftContext::IU => stem
            .chars()
            .last()
            .is_some_and(|c| matches!(c, 'इ' | 'ई' | 'उ' | 'ऊ' | 'ि' | 'ी' | 'ु' | 'ू')),
    }
}

/// One vibhakti (case ending) pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectionPattern {
    /// Surface ending matched against the end of a word.
    pub ending: String,
    pub vibhakti: Vibhakti,
    pub vacana: Vacana,
    pub linga: Linga,
    pub stem_class: StemClass,
    /// Tie-break weight; longer endings carry higher priorities.
    pub priority: u8,
}

/// One pratyaya (derivational suffix) pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPattern {
    /// Surface suffix matched against the end of a word.
    pub suffix: String,
    pub kind: PratyayaKind,
    /// Free-form tag: "infinitive", "absolutive", "abstract", ...
    pub category: String,
}
