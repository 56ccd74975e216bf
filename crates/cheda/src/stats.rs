use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free per-engine counters, so `&self` tokenization stays shareable
/// across threads.
pub(crate) struct EngineCounters {
    pub calls: AtomicU64,
    pub fallbacks: AtomicU64,
    pub words: AtomicU64,
    pub candidates: AtomicU64,
    /// Retained reverse-rule applications, parallel to KB table order.
    pub rule_matches: Vec<AtomicU64>,
}

impl EngineCounters {
    pub fn new(rule_count: usize) -> Self {
        EngineCounters {
            calls: AtomicU64::new(0),
            fallbacks: AtomicU64::new(0),
            words: AtomicU64::new(0),
            candidates: AtomicU64::new(0),
            rule_matches: (0..rule_count).map(|_| AtomicU64::new(0)).collect(),
        }
    }

    pub fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add(counter: &AtomicU64, amount: u64) {
        counter.fetch_add(amount, Ordering::Relaxed);
    }
}

/// A snapshot of the engine's counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Completed `tokenize` calls.
    pub total_calls: u64,
    /// Calls that fell back to safe mode.
    pub fallback_count: u64,
    /// Word-class runs processed.
    pub words_seen: u64,
    /// Candidates retained after the per-word cap, summed over all words.
    pub candidates_considered: u64,
    /// `candidates_considered / words_seen`; 0 when no words were seen.
    pub avg_candidates_per_word: f64,
    /// Per-rule retained reverse applications, in KB table order.
    pub rule_matches: Vec<(String, u64)>,
}
