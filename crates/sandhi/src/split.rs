use padaccheda_akshar::split_aksharas;
use padaccheda_kosha::Kosha;
use padaccheda_vyakarana::Vyakarana;

/// How a split hypothesis was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOrigin {
    /// Reverse application of a junction rule.
    Rule { id: String, priority: u8 },
    /// The left part is attested in the lexicon; the parts concatenate.
    LexLeft,
    /// The right part is attested in the lexicon; the parts concatenate.
    LexRight,
    /// The trivial segmentation.
    NoSplit,
}

impl SplitOrigin {
    /// Stable label used for de-duplication and diagnostics.
    pub fn label(&self) -> &str {
        match self {
            Self::Rule { id, .. } => id,
            Self::LexLeft => "lex-left",
            Self::LexRight => "lex-right",
            Self::NoSplit => "no-split",
        }
    }
}

/// One split hypothesis for a surface word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Underlying morpheme forms. Joining them (via the rule for rule-driven
    /// splits, by concatenation otherwise) reproduces the surface word.
    pub parts: Vec<String>,
    /// Surface fragments: substrings of the word, split at the junction.
    /// Their concatenation equals the word byte-for-byte.
    pub surface: Vec<String>,
    pub origin: SplitOrigin,
}

impl Split {
    /// Re-join the underlying parts into a surface form.
    ///
    /// Returns `None` when the parts no longer fit the recorded origin; a
    /// retained hypothesis always re-joins to the original word.
    pub fn rejoin(&self, kb: &Vyakarana) -> Option<String> {
        match (&self.origin, self.parts.as_slice()) {
            (SplitOrigin::NoSplit, [word]) => Some(word.clone()),
            (SplitOrigin::Rule { id, .. }, [left, right]) => {
                kb.rule_by_id(id)?.apply(left, right)
            }
            (SplitOrigin::LexLeft | SplitOrigin::LexRight, [left, right]) => {
                Some(format!("{left}{right}"))
            }
            _ => None,
        }
    }
}

/// Propose split hypotheses for one surface word.
///
/// Four strategies run independently and their results are merged:
///
/// 1. Rule-driven reverse application: every interior occurrence of a
///    reverse-directed rule's `result` licenses a hypothesis restoring the
///    rule's left and right patterns.
/// 2. Left-greedy lexicon scan, longest left part first.
/// 3. Right-greedy lexicon scan, longest right part first.
/// 4. The trivial no-split, always present (and always first).
///
/// A non-trivial hypothesis is kept only when re-joining its parts
/// reproduces `word` exactly; scoring and the candidate cap are the
/// caller's concern.
pub fn split(word: &str, kb: &Vyakarana, kosha: &Kosha) -> Vec<Split> {
    let mut results = vec![Split {
        parts: vec![word.to_string()],
        surface: vec![word.to_string()],
        origin: SplitOrigin::NoSplit,
    }];

    // Single-akshara words are atomic roots, not junctions.
    if split_aksharas(word).len() < 2 {
        return results;
    }

    // Strategy 1: rule-driven reverse application. Junction positions are
    // probed through the KB's result index; endpoints are excluded so both
    // sides keep surface material.
    for (pos, _) in word.char_indices().skip(1) {
        for &len in kb.reverse_result_lengths() {
            let end = pos + len;
            if end >= word.len() {
                // Lengths are ascending; longer results cannot fit either.
                break;
            }
            if !word.is_char_boundary(end) {
                continue;
            }
            for &rule_idx in kb.reverse_rules(&word[pos..end]) {
                let rule = kb.rule(rule_idx);
                let left = format!("{}{}", &word[..pos], rule.left_pattern);
                let right = format!("{}{}", rule.right_pattern, &word[end..]);

                // Re-joinability gate: forward application must restore the
                // surface word byte-for-byte.
                if rule.apply(&left, &right).as_deref() == Some(word) {
                    push_unique(
                        &mut results,
                        Split {
                            parts: vec![left, right],
                            surface: vec![word[..pos].to_string(), word[pos..].to_string()],
                            origin: SplitOrigin::Rule {
                                id: rule.id.clone(),
                                priority: rule.priority,
                            },
                        },
                    );
                }
            }
        }
    }

    // Strategies 2 and 3: lexicon-driven boundary search. Both parts are
    // surface substrings, so the join is plain concatenation and the
    // re-joinability gate holds by construction. The unattested side is left
    // for the analyzers and the scorer to judge.
    let boundaries: Vec<usize> = word.char_indices().skip(1).map(|(i, _)| i).collect();
    for &k in boundaries.iter().rev() {
        let (left, right) = word.split_at(k);
        if kosha.contains(left) {
            push_unique(
                &mut results,
                Split {
                    parts: vec![left.to_string(), right.to_string()],
                    surface: vec![left.to_string(), right.to_string()],
                    origin: SplitOrigin::LexLeft,
                },
            );
        }
    }
    for &k in &boundaries {
        let (left, right) = word.split_at(k);
        if kosha.contains(right) {
            push_unique(
                &mut results,
                Split {
                    parts: vec![left.to_string(), right.to_string()],
                    surface: vec![left.to_string(), right.to_string()],
                    origin: SplitOrigin::LexRight,
                },
            );
        }
    }

    results
}

/// De-duplicate by (parts, origin label); the pool stays small enough that a
/// linear scan beats hashing.
fn push_unique(results: &mut Vec<Split>, candidate: Split) {
    let duplicate = results.iter().any(|existing| {
        existing.parts == candidate.parts
            && existing.origin.label() == candidate.origin.label()
    });
    if !duplicate {
        results.push(candidate);
    }
}
