use fst::Map;

use crate::KoshaError;
use crate::builder::build_fst_map;

/// Bundled seed lexicon (word, tab, occurrence count).
static LEXICON_DATA: &str = include_str!("../../../data/lexicon.tsv");

/// FST-based frequency lexicon.
///
/// Maps each surface word form to its corpus occurrence count and keeps the
/// derived maximum count for score normalization. The structure is immutable
/// after construction and safe to share across threads by reference.
pub struct Kosha {
    map: Map<Vec<u8>>,
    max_frequency: u64,
}

impl Kosha {
    /// Build from arbitrary (word, frequency) pairs.
    ///
    /// Entries are sorted internally; duplicate words keep the sum of their
    /// counts, so a lexicon can be assembled from multiple corpus shards.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut entries: Vec<(String, u64)> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

        let mut merged: Vec<(String, u64)> = Vec::with_capacity(entries.len());
        for (word, frequency) in entries {
            match merged.last_mut() {
                Some((last, count)) if *last == word => *count += frequency,
                _ => merged.push((word, frequency)),
            }
        }

        let max_frequency = merged.iter().map(|(_, f)| *f).max().unwrap_or(0);
        let fst_bytes = build_fst_map(&merged);
        let map = Map::new(fst_bytes).expect("FST should be valid");

        Kosha { map, max_frequency }
    }

    /// Parse a tab-separated `word<TAB>frequency` table.
    ///
    /// Empty lines and lines starting with `#` are skipped. Any other
    /// malformed line is an error; callers that want lenient behavior fall
    /// back to [`Kosha::empty`].
    pub fn from_tsv(data: &str) -> Result<Self, KoshaError> {
        let mut entries = Vec::new();
        for (idx, line) in data.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, frequency) =
                line.split_once('\t')
                    .ok_or_else(|| KoshaError::MalformedLine {
                        line: idx + 1,
                        content: line.to_string(),
                    })?;
            let frequency: u64 =
                frequency
                    .trim()
                    .parse()
                    .map_err(|_| KoshaError::BadFrequency {
                        line: idx + 1,
                        value: frequency.to_string(),
                    })?;
            entries.push((word.to_string(), frequency));
        }
        Ok(Self::from_entries(entries))
    }

    /// The bundled seed lexicon.
    pub fn bundled() -> Self {
        Self::from_tsv(LEXICON_DATA).expect("bundled lexicon should parse")
    }

    /// Parse a table, degrading to the empty lexicon on failure.
    ///
    /// A missing or corrupt lexicon is not fatal to tokenization: frequency
    /// scores collapse to 0 and segmentation leans on the rule table alone.
    pub fn from_tsv_or_empty(data: &str) -> Self {
        Self::from_tsv(data).unwrap_or_else(|_| Self::empty())
    }

    /// An empty lexicon. Every `frequency` lookup returns 0.
    pub fn empty() -> Self {
        Self::from_entries(std::iter::empty())
    }

    /// Check if a word form is attested.
    pub fn contains(&self, word: &str) -> bool {
        self.map.contains_key(word)
    }

    /// Occurrence count for a word form; 0 when unattested.
    pub fn frequency(&self, word: &str) -> u64 {
        self.map.get(word).unwrap_or(0)
    }

    /// The largest occurrence count in the lexicon.
    pub fn max_frequency(&self) -> u64 {
        self.max_frequency
    }

    /// Number of word forms.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
