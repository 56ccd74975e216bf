use rustc_hash::{FxHashMap, FxHashSet};

use padaccheda_akshar::{normalize, split_aksharas};
use padaccheda_types::LeftContext;

use crate::VyakaranaError;
use crate::loader;
use crate::rules::{DerivationPattern, InflectionPattern, SandhiRule};

/// Bundled rule tables.
static SANDHI_DATA: &str = include_str!("../../../data/sandhi_rules.tsv");
static INFLECTION_DATA: &str = include_str!("../../../data/inflections.tsv");
static DERIVATION_DATA: &str = include_str!("../../../data/derivations.tsv");

/// Junction patterns are local: a pattern longer than this many aksharas is
/// almost certainly a whole word pasted into the table by mistake.
const MAX_PATTERN_AKSHARAS: usize = 2;

/// The immutable grammar knowledge base.
///
/// Holds the three rule tables and the derived indexes. Built once at
/// startup; every accessor takes `&self`, so a single instance can back any
/// number of concurrent tokenization calls.
pub struct Vyakarana {
    sandhi: Vec<SandhiRule>,
    inflections: Vec<InflectionPattern>,
    derivations: Vec<DerivationPattern>,
    /// result string -> indices into `sandhi`, reverse-directed rules only.
    reverse_index: FxHashMap<String, Vec<usize>>,
    /// Distinct byte lengths of reverse-rule results, ascending.
    reverse_result_lengths: Vec<usize>,
    /// rule id -> index into `sandhi`.
    id_index: FxHashMap<String, usize>,
}

impl Vyakarana {
    /// Assemble and validate a knowledge base from parsed tables.
    pub fn new(
        sandhi: Vec<SandhiRule>,
        mut inflections: Vec<InflectionPattern>,
        mut derivations: Vec<DerivationPattern>,
    ) -> Result<Self, VyakaranaError> {
        let mut seen_ids: FxHashSet<&str> = FxHashSet::default();
        for rule in &sandhi {
            if !seen_ids.insert(&rule.id) {
                return Err(VyakaranaError::DuplicateId(rule.id.clone()));
            }
            validate_rule(rule)?;
        }

        for pattern in &inflections {
            if pattern.ending.is_empty() {
                return Err(VyakaranaError::EmptyPattern {
                    id: "inflection ending".to_string(),
                });
            }
            if normalize(&pattern.ending) != pattern.ending {
                return Err(VyakaranaError::NotNfc {
                    id: "inflection ending".to_string(),
                    pattern: pattern.ending.clone(),
                });
            }
        }
        for pattern in &derivations {
            if pattern.suffix.is_empty() {
                return Err(VyakaranaError::EmptyPattern {
                    id: "derivation suffix".to_string(),
                });
            }
            if normalize(&pattern.suffix) != pattern.suffix {
                return Err(VyakaranaError::NotNfc {
                    id: "derivation suffix".to_string(),
                    pattern: pattern.suffix.clone(),
                });
            }
        }

        // Longest-match-first order for the analyzers. Char count (not byte
        // count) is the linguistically meaningful length here.
        inflections.sort_by(|a, b| {
            b.ending
                .chars()
                .count()
                .cmp(&a.ending.chars().count())
                .then(b.priority.cmp(&a.priority))
                .then_with(|| a.ending.cmp(&b.ending))
        });
        derivations.sort_by(|a, b| {
            b.suffix
                .chars()
                .count()
                .cmp(&a.suffix.chars().count())
                .then_with(|| a.suffix.cmp(&b.suffix))
        });

        let mut reverse_index: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        let mut id_index = FxHashMap::default();
        for (idx, rule) in sandhi.iter().enumerate() {
            id_index.insert(rule.id.clone(), idx);
            if rule.directions.reverse {
                reverse_index
                    .entry(rule.result.clone())
                    .or_default()
                    .push(idx);
            }
        }
        let mut reverse_result_lengths: Vec<usize> =
            reverse_index.keys().map(|r| r.len()).collect();
        reverse_result_lengths.sort_unstable();
        reverse_result_lengths.dedup();

        Ok(Vyakarana {
            sandhi,
            inflections,
            derivations,
            reverse_index,
            reverse_result_lengths,
            id_index,
        })
    }

    /// Load the bundled rule tables.
    pub fn bundled() -> Result<Self, VyakaranaError> {
        Self::new(
            loader::parse_sandhi(SANDHI_DATA)?,
            loader::parse_inflections(INFLECTION_DATA)?,
            loader::parse_derivations(DERIVATION_DATA)?,
        )
    }

    /// All sandhi rules, in table order.
    pub fn sandhi_rules(&self) -> &[SandhiRule] {
        &self.sandhi
    }

    /// Number of loaded sandhi rules. The table defines the count; nothing
    /// is hard-coded.
    pub fn rule_count(&self) -> usize {
        self.sandhi.len()
    }

    pub fn rule(&self, idx: usize) -> &SandhiRule {
        &self.sandhi[idx]
    }

    pub fn rule_by_id(&self, id: &str) -> Option<&SandhiRule> {
        self.id_index.get(id).map(|&idx| &self.sandhi[idx])
    }

    /// Index of a rule in table order, usable as a dense counter key.
    pub fn rule_position(&self, id: &str) -> Option<usize> {
        self.id_index.get(id).copied()
    }

    /// Reverse-directed rules whose `result` equals `junction`.
    pub fn reverse_rules(&self, junction: &str) -> &[usize] {
        self.reverse_index
            .get(junction)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct byte lengths of reverse-rule results, ascending. The
    /// splitter probes each length at each position, giving amortized
    /// constant work per (position, length) pair.
    pub fn reverse_result_lengths(&self) -> &[usize] {
        &self.reverse_result_lengths
    }

    /// Vibhakti patterns, longest ending first.
    pub fn inflections(&self) -> &[InflectionPattern] {
        &self.inflections
    }

    /// Pratyaya patterns, longest suffix first.
    pub fn derivations(&self) -> &[DerivationPattern] {
        &self.derivations
    }
}

fn validate_rule(rule: &SandhiRule) -> Result<(), VyakaranaError> {
    if rule.result.is_empty() || rule.right_pattern.is_empty() {
        return Err(VyakaranaError::EmptyPattern {
            id: rule.id.clone(),
        });
    }
    if rule.left_pattern.is_empty() && rule.left_context == LeftContext::Any {
        return Err(VyakaranaError::Unanchored {
            id: rule.id.clone(),
        });
    }

    for pattern in [&rule.left_pattern, &rule.right_pattern, &rule.result] {
        if !pattern.is_empty() && normalize(pattern) != *pattern {
            return Err(VyakaranaError::NotNfc {
                id: rule.id.clone(),
                pattern: pattern.clone(),
            });
        }
    }

    // Junction patterns describe the characters adjacent to the boundary,
    // never whole words. Oversized patterns are table corruption (the
    // classic case: a documentation example row pasted verbatim).
    for pattern in [&rule.left_pattern, &rule.right_pattern, &rule.result] {
        if split_aksharas(pattern).len() > MAX_PATTERN_AKSHARAS {
            return Err(VyakaranaError::Inconsistent {
                id: rule.id.clone(),
            });
        }
    }

    // Forward self-consistency: applying the rule to its own patterns,
    // anchored on a context-satisfying base, must splice in `result`.
    let base = match rule.left_context {
        LeftContext::IU => "नि",
        _ => "क",
    };
    let left = format!("{base}{}", rule.left_pattern);
    let expected = format!("{base}{}", rule.result);
    match rule.apply(&left, &rule.right_pattern) {
        Some(output) if output == expected => Ok(()),
        _ => Err(VyakaranaError::Inconsistent {
            id: rule.id.clone(),
        }),
    }
}
