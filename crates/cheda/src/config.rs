/// Weights of the three score components. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub rule: f64,
    pub freq: f64,
    pub grammar: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            rule: 0.40,
            freq: 0.30,
            grammar: 0.30,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.rule + self.freq + self.grammar
    }
}

/// Engine configuration.
///
/// The defaults keep tokenization reversible. `preserve_whitespace = false`
/// and `preserve_vedic_accents = false` are lossy: with either set,
/// concatenating the emitted tokens no longer reproduces the original input
/// (whitespace runs are dropped, accents are stripped). The round-trip
/// verifier then guards the partition of the reduced canonical form instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Emit whitespace runs as tokens.
    pub preserve_whitespace: bool,
    /// Keep Vedic accent marks on their base characters.
    pub preserve_vedic_accents: bool,
    /// Propose and emit sandhi splits. When off, every word run is one token.
    pub enable_sandhi_splitting: bool,
    /// Run the derivational-suffix analyzer.
    pub enable_derivation_analysis: bool,
    /// Candidate pool cap per word.
    pub max_candidates: usize,
    pub weights: Weights,
    /// Frequency treated as "very common" when normalizing lexicon counts.
    pub frequency_reference: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preserve_whitespace: true,
            preserve_vedic_accents: true,
            enable_sandhi_splitting: true,
            enable_derivation_analysis: true,
            max_candidates: 8,
            weights: Weights::default(),
            frequency_reference: 10_000.0,
        }
    }
}

/// Tolerance when checking that weights sum to 1.
pub(crate) const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.weights;
        for component in [w.rule, w.freq, w.grammar] {
            if !component.is_finite() || component < 0.0 {
                return Err(ConfigError::NegativeWeight);
            }
        }
        if (w.sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum { sum: w.sum() });
        }
        if self.max_candidates == 0 {
            return Err(ConfigError::NoCandidates);
        }
        if !self.frequency_reference.is_finite() || self.frequency_reference <= 0.0 {
            return Err(ConfigError::BadFrequencyReference);
        }
        Ok(())
    }
}

/// Construction-time configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("scoring weights must be finite and non-negative")]
    NegativeWeight,

    #[error("scoring weights sum to {sum}, expected 1")]
    WeightSum { sum: f64 },

    #[error("max_candidates must be at least 1")]
    NoCandidates,

    #[error("frequency_reference must be positive and finite")]
    BadFrequencyReference,
}
