use unicode_normalization::UnicodeNormalization;

use crate::devanagari::is_vedic_accent;

/// Normalize Devanagari text to Unicode canonical composition (NFC).
///
/// The normalized string is the canonical input for all downstream
/// segmentation; byte offsets are always measured against it. Vedic accent
/// marks are combining characters and survive NFC untouched.
///
/// Invariant: `normalize(normalize(s)) == normalize(s)` (idempotent)
pub fn normalize(text: &str) -> String {
    text.nfc().collect()
}

/// Remove Vedic accent marks, keeping their base characters.
///
/// This is lossy: concatenating tokens produced from the stripped string can
/// no longer reproduce the original accented input.
pub fn strip_vedic_accents(text: &str) -> String {
    text.chars().filter(|&c| !is_vedic_accent(c)).collect()
}
