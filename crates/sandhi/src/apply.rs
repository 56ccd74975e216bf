use padaccheda_types::SandhiCategory;
use padaccheda_vyakarana::{SandhiRule, Vyakarana};

use crate::SandhiError;

/// Result of a forward sandhi combination.
#[derive(Debug, Clone)]
pub struct SandhiOutput {
    pub output: String,
    pub rule_id: String,
    pub category: SandhiCategory,
    pub citation: Option<String>,
}

/// Combine two morphemes into one surface form.
///
/// Every forward-directed rule is tried; the highest-priority applicable rule
/// wins, with table order breaking ties. Returns `NoRuleApplies` when the
/// junction admits no transformation (plain concatenation is the caller's
/// decision, not a rule).
pub fn apply(kb: &Vyakarana, first: &str, second: &str) -> Result<SandhiOutput, SandhiError> {
    if first.is_empty() || second.is_empty() {
        return Err(SandhiError::EmptyInput);
    }

    let mut best: Option<(&SandhiRule, String)> = None;
    for rule in kb.sandhi_rules() {
        if !rule.directions.forward {
            continue;
        }
        if let Some(output) = rule.apply(first, second) {
            let better = match &best {
                None => true,
                Some((current, _)) => rule.priority > current.priority,
            };
            if better {
                best = Some((rule, output));
            }
        }
    }

    match best {
        Some((rule, output)) => Ok(SandhiOutput {
            output,
            rule_id: rule.id.clone(),
            category: rule.category,
            citation: rule.citation.clone(),
        }),
        None => Err(SandhiError::NoRuleApplies {
            first: first.to_string(),
            second: second.to_string(),
        }),
    }
}
