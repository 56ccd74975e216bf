use std::sync::atomic::Ordering;

use padaccheda_akshar::{RawTokenClass, normalize, segment, strip_vedic_accents};
use padaccheda_kosha::Kosha;
use padaccheda_sandhi::{SplitOrigin, split};
use padaccheda_shabda::{analyze_derivation, analyze_inflection};
use padaccheda_vyakarana::Vyakarana;

use crate::candidate::{Candidate, PartAnalysis};
use crate::config::{Config, ConfigError};
use crate::scorer;
use crate::stats::{EngineCounters, Statistics};
use crate::token::{Token, TokenAnalysis, TokenKind};
use crate::verify::{safe_mode, verify};

/// The tokenization engine.
///
/// Holds the immutable knowledge base, lexicon and configuration. All
/// methods take `&self` and use call-local working storage, so one engine
/// can serve concurrent callers; the statistics counters are atomic.
pub struct Engine {
    kb: Vyakarana,
    kosha: Kosha,
    config: Config,
    counters: EngineCounters,
}

impl Engine {
    /// Create an engine. Fails only on invalid configuration; the knowledge
    /// base has already validated itself during loading.
    pub fn new(kb: Vyakarana, kosha: Kosha, config: Config) -> Result<Engine, ConfigError> {
        config.validate()?;
        let counters = EngineCounters::new(kb.rule_count());
        Ok(Engine {
            kb,
            kosha,
            config,
            counters,
        })
    }

    pub fn kb(&self) -> &Vyakarana {
        &self.kb
    }

    pub fn kosha(&self) -> &Kosha {
        &self.kosha
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tokenize text into a reversible token sequence.
    ///
    /// Total: any Unicode string is accepted, and the concatenation of the
    /// returned token texts equals the canonical (NFC) form of the input.
    /// Runtime anomalies never surface; the worst case is the trivial
    /// one-token-per-run segmentation.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        EngineCounters::bump(&self.counters.calls);

        let mut canonical = normalize(text);
        if !self.config.preserve_vedic_accents {
            canonical = strip_vedic_accents(&canonical);
        }

        let raw = segment(&canonical);
        let mut tokens = Vec::with_capacity(raw.len());
        for rt in &raw {
            let surface = rt.text(&canonical);
            if rt.class == RawTokenClass::Word {
                EngineCounters::bump(&self.counters.words);
                self.emit_word(surface, &mut tokens);
            } else {
                tokens.push(Token::plain(surface.to_string(), rt.class.into()));
            }
        }

        if !verify(&canonical, &tokens) {
            log::warn!("tokenization failed round-trip verification; re-emitting in safe mode");
            EngineCounters::bump(&self.counters.fallbacks);
            tokens = safe_mode(&canonical, &raw);
        }

        if !self.config.preserve_whitespace {
            tokens.retain(|t| t.kind != TokenKind::Whitespace);
        }
        tokens
    }

    /// Pure concatenation of token surface strings.
    pub fn detokenize(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Scored split candidates for a single word, best first.
    ///
    /// Diagnostic companion to `tokenize`: the winner of this ranking is
    /// exactly what tokenization would emit for the word.
    pub fn analyze_word(&self, word: &str) -> Vec<Candidate> {
        let canonical = normalize(word);
        self.candidates(&canonical)
    }

    /// Counter snapshot.
    pub fn statistics(&self) -> Statistics {
        let words_seen = self.counters.words.load(Ordering::Relaxed);
        let candidates_considered = self.counters.candidates.load(Ordering::Relaxed);
        Statistics {
            total_calls: self.counters.calls.load(Ordering::Relaxed),
            fallback_count: self.counters.fallbacks.load(Ordering::Relaxed),
            words_seen,
            candidates_considered,
            avg_candidates_per_word: if words_seen == 0 {
                0.0
            } else {
                candidates_considered as f64 / words_seen as f64
            },
            rule_matches: self
                .kb
                .sandhi_rules()
                .iter()
                .zip(&self.counters.rule_matches)
                .map(|(rule, counter)| (rule.id.clone(), counter.load(Ordering::Relaxed)))
                .collect(),
        }
    }

    /// Emit one word-class run as one or more tokens.
    fn emit_word(&self, word: &str, out: &mut Vec<Token>) {
        if !self.config.enable_sandhi_splitting {
            out.push(self.whole_word_token(word));
            return;
        }

        let candidates = self.candidates(word);
        EngineCounters::add(&self.counters.candidates, candidates.len() as u64);
        // The pool always holds at least the no-split candidate.
        let winner = &candidates[0];

        if winner.split.parts.len() == 1 {
            out.push(self.annotated_token(winner, 0, word));
            return;
        }

        // A multi-part winner is emitted as fragments only when the parts
        // re-join to the word and the fragments cover it exactly; any
        // discrepancy collapses to single-token emission.
        let rejoins = winner.split.rejoin(&self.kb).as_deref() == Some(word);
        let covers = winner.split.surface.concat() == word;
        if rejoins && covers {
            for (idx, fragment) in winner.split.surface.iter().enumerate() {
                out.push(self.annotated_token(winner, idx, fragment));
            }
        } else {
            log::debug!("winner for {word:?} does not re-join; emitting unsplit");
            out.push(self.whole_word_token(word));
        }
    }

    /// Build, score, rank, and cap the candidate pool for one word.
    fn candidates(&self, word: &str) -> Vec<Candidate> {
        let splits = split(word, &self.kb, &self.kosha);
        let mut candidates: Vec<Candidate> = splits
            .into_iter()
            .map(|split| {
                let analyses: Vec<PartAnalysis> =
                    split.parts.iter().map(|p| self.analyze_part(p)).collect();
                let scores = scorer::score(&split, &analyses, &self.kosha, &self.config);
                Candidate {
                    split,
                    analyses,
                    scores,
                }
            })
            .collect();

        candidates.sort_by(scorer::compare);
        candidates.truncate(self.config.max_candidates);

        for candidate in &candidates {
            if let SplitOrigin::Rule { id, .. } = &candidate.split.origin {
                if let Some(pos) = self.kb.rule_position(id) {
                    EngineCounters::bump(&self.counters.rule_matches[pos]);
                }
            }
        }
        candidates
    }

    fn analyze_part(&self, part: &str) -> PartAnalysis {
        PartAnalysis {
            inflections: analyze_inflection(part, &self.kb),
            derivations: if self.config.enable_derivation_analysis {
                analyze_derivation(part, &self.kb)
            } else {
                Vec::new()
            },
        }
    }

    /// A single token covering the whole word, annotated from its own
    /// morphology.
    fn whole_word_token(&self, word: &str) -> Token {
        let analysis = self.analyze_part(word);
        Token {
            text: word.to_string(),
            kind: TokenKind::Word,
            analysis: annotation(word, word, &analysis, None),
        }
    }

    /// A token for part `idx` of a candidate, carrying that part's readings.
    fn annotated_token(&self, candidate: &Candidate, idx: usize, fragment: &str) -> Token {
        let pada = &candidate.split.parts[idx];
        let part_analysis = &candidate.analyses[idx];
        let rule_id = match &candidate.split.origin {
            SplitOrigin::Rule { id, .. } => Some(id.clone()),
            _ => None,
        };
        Token {
            text: fragment.to_string(),
            kind: TokenKind::Word,
            analysis: annotation(fragment, pada, part_analysis, rule_id),
        }
    }
}

/// Assemble the advisory annotation; `None` when it would say nothing.
fn annotation(
    fragment: &str,
    pada: &str,
    part_analysis: &PartAnalysis,
    rule_id: Option<String>,
) -> Option<TokenAnalysis> {
    let informative = part_analysis.has_any() || pada != fragment || rule_id.is_some();
    if !informative {
        return None;
    }
    let best_inflection = part_analysis.inflections.first();
    Some(TokenAnalysis {
        pada: pada.to_string(),
        stem: best_inflection.map(|m| m.stem.clone()),
        vibhakti: best_inflection.map(|m| (m.vibhakti, m.vacana, m.linga)),
        pratyaya: part_analysis.derivations.first().map(|d| d.kind),
        rule_id,
    })
}
