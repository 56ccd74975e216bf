/// Classification of a Devanagari character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    /// स्वर (independent vowel): अ आ इ ई उ ऊ ऋ ए ऐ ओ औ
    Svar,
    /// व्यञ्जन (consonant): क ख ग ... ह
    Vyanjan,
    /// मात्रा (dependent vowel sign): ा ि ी ु ू ृ े ै ो ौ
    Matra,
    /// विराम (virama/halanta): ्
    Halanta,
    /// चन्द्रबिन्दु: ँ
    Chandrabindu,
    /// अनुस्वार: ं
    Anusvara,
    /// विसर्ग: ः
    Visarga,
    /// नुक्ता: ़
    Nukta,
    /// अवग्रह: ऽ
    Avagraha,
    /// Vedic pitch accents (udatta, anudatta, svarita) and the combining
    /// signs of the Vedic Extensions block.
    VedicAccent,
    /// अङ्क: ० १ २ ... ९
    Numeral,
    /// दण्ड: । ॥
    Danda,
    /// Other signs (abbreviation sign, high spacing dot, etc.)
    OtherMark,
}

/// Classify a character belonging to the Devanagari block or the Vedic
/// Extensions block. Returns `None` for everything else.
pub fn classify(c: char) -> Option<CharType> {
    match c {
        // U+0900: inverted chandrabindu, U+0901: chandrabindu
        '\u{0900}' | '\u{0901}' => Some(CharType::Chandrabindu),
        // U+0902: ं anusvara
        '\u{0902}' => Some(CharType::Anusvara),
        // U+0903: ः visarga
        '\u{0903}' => Some(CharType::Visarga),

        // U+0904-U+0914: independent vowels अ..औ (incl. rare short forms)
        '\u{0904}'..='\u{0914}' => Some(CharType::Svar),

        // U+0915-U+0939: consonants क..ह
        '\u{0915}'..='\u{0939}' => Some(CharType::Vyanjan),

        // U+093A-U+093B: rare combining vowel signs
        '\u{093A}'..='\u{093B}' => Some(CharType::Matra),

        // U+093C: ़ nukta
        '\u{093C}' => Some(CharType::Nukta),

        // U+093D: ऽ avagraha
        '\u{093D}' => Some(CharType::Avagraha),

        // U+093E-U+094C: matras ा ि ी ु ू ृ ॄ ॅ ॆ े ै ॉ ॊ ो ौ
        '\u{093E}'..='\u{094C}' => Some(CharType::Matra),

        // U+094D: ् virama
        '\u{094D}' => Some(CharType::Halanta),

        // U+094E-U+094F: prishthamatra E, AW
        '\u{094E}'..='\u{094F}' => Some(CharType::Matra),

        // U+0950: ॐ — sacred syllable, treated as an independent vowel
        '\u{0950}' => Some(CharType::Svar),

        // U+0951-U+0954: udatta, anudatta, grave, acute
        '\u{0951}'..='\u{0954}' => Some(CharType::VedicAccent),

        // U+0955-U+0957: length marks and candra-long E
        '\u{0955}'..='\u{0957}' => Some(CharType::Matra),

        // U+0958-U+095F: nukta consonants क़ ख़ ग़ ज़ ड़ ढ़ फ़ य़
        '\u{0958}'..='\u{095F}' => Some(CharType::Vyanjan),

        // U+0960-U+0961: vocalic ॠ ॡ
        '\u{0960}'..='\u{0961}' => Some(CharType::Svar),

        // U+0962-U+0963: vocalic matras ॢ ॣ
        '\u{0962}'..='\u{0963}' => Some(CharType::Matra),

        // U+0964: । danda, U+0965: ॥ double danda
        '\u{0964}' | '\u{0965}' => Some(CharType::Danda),

        // U+0966-U+096F: digits ०-९
        '\u{0966}'..='\u{096F}' => Some(CharType::Numeral),

        // U+0970: ॰ abbreviation sign, U+0971: ॱ high spacing dot
        '\u{0970}' | '\u{0971}' => Some(CharType::OtherMark),

        // U+0972-U+0977: regional vowels
        '\u{0972}'..='\u{0977}' => Some(CharType::Svar),

        // U+0978-U+097F: regional consonants
        '\u{0978}'..='\u{097F}' => Some(CharType::Vyanjan),

        // U+1CD0-U+1CFF: Vedic Extensions (tone marks, kathaka signs, ...)
        '\u{1CD0}'..='\u{1CFF}' => Some(CharType::VedicAccent),

        // U+A8E0-U+A8F1: combining cantillation digits (Samaveda)
        '\u{A8E0}'..='\u{A8F1}' => Some(CharType::VedicAccent),

        _ => None,
    }
}

/// Check if the character is an independent vowel (स्वर).
pub fn is_svar(c: char) -> bool {
    classify(c) == Some(CharType::Svar)
}

/// Check if the character is a consonant (व्यञ्जन).
pub fn is_vyanjan(c: char) -> bool {
    classify(c) == Some(CharType::Vyanjan)
}

/// Check if the character is a dependent vowel sign (मात्रा).
pub fn is_matra(c: char) -> bool {
    classify(c) == Some(CharType::Matra)
}

/// Check if the character is a virama (हलन्त).
pub fn is_halanta(c: char) -> bool {
    classify(c) == Some(CharType::Halanta)
}

/// Check if the character is a visarga.
pub fn is_visarga(c: char) -> bool {
    classify(c) == Some(CharType::Visarga)
}

/// Check if the character is an avagraha.
pub fn is_avagraha(c: char) -> bool {
    classify(c) == Some(CharType::Avagraha)
}

/// Check if the character is a Vedic accent mark.
pub fn is_vedic_accent(c: char) -> bool {
    classify(c) == Some(CharType::VedicAccent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowels() {
        let vowels = ['अ', 'आ', 'इ', 'ई', 'उ', 'ऊ', 'ऋ', 'ए', 'ऐ', 'ओ', 'औ'];
        for v in vowels {
            assert_eq!(classify(v), Some(CharType::Svar), "expected Svar for {v}");
        }
    }

    #[test]
    fn test_consonants() {
        let consonants = [
            'क', 'ख', 'ग', 'घ', 'ङ', 'च', 'छ', 'ज', 'झ', 'ञ', 'ट', 'ठ', 'ड', 'ढ', 'ण', 'त', 'थ',
            'द', 'ध', 'न', 'प', 'फ', 'ब', 'भ', 'म', 'य', 'र', 'ल', 'व', 'श', 'ष', 'स', 'ह',
        ];
        for c in consonants {
            assert_eq!(
                classify(c),
                Some(CharType::Vyanjan),
                "expected Vyanjan for {c}"
            );
        }
    }

    #[test]
    fn test_matras() {
        let matras = ['ा', 'ि', 'ी', 'ु', 'ू', 'ृ', 'े', 'ै', 'ो', 'ौ'];
        for m in matras {
            assert_eq!(classify(m), Some(CharType::Matra), "expected Matra for {m}");
        }
    }

    #[test]
    fn test_signs() {
        assert_eq!(classify('्'), Some(CharType::Halanta));
        assert_eq!(classify('ँ'), Some(CharType::Chandrabindu));
        assert_eq!(classify('ं'), Some(CharType::Anusvara));
        assert_eq!(classify('ः'), Some(CharType::Visarga));
        assert_eq!(classify('़'), Some(CharType::Nukta));
        assert_eq!(classify('ऽ'), Some(CharType::Avagraha));
    }

    #[test]
    fn test_vedic_accents() {
        // Udatta and anudatta from the main block
        assert_eq!(classify('\u{0951}'), Some(CharType::VedicAccent));
        assert_eq!(classify('\u{0952}'), Some(CharType::VedicAccent));
        // Vedic Extensions block
        assert_eq!(classify('\u{1CDA}'), Some(CharType::VedicAccent));
        assert!(is_vedic_accent('\u{0951}'));
        assert!(!is_vedic_accent('ा'));
    }

    #[test]
    fn test_numerals_and_dandas() {
        for c in '०'..='९' {
            assert_eq!(classify(c), Some(CharType::Numeral), "for {c}");
        }
        assert_eq!(classify('।'), Some(CharType::Danda));
        assert_eq!(classify('॥'), Some(CharType::Danda));
    }

    #[test]
    fn test_non_devanagari_returns_none() {
        assert!(classify('A').is_none());
        assert!(classify('z').is_none());
        assert!(classify('中').is_none());
        assert!(classify('0').is_none());
        assert!(classify(' ').is_none());
    }

    #[test]
    fn test_all_codepoints_in_block_classified() {
        for cp in 0x0900u32..=0x097Fu32 {
            if let Some(c) = char::from_u32(cp) {
                assert!(classify(c).is_some(), "U+{cp:04X} ({c}) not classified");
            }
        }
    }

    #[test]
    fn test_boolean_helpers() {
        assert!(is_svar('अ'));
        assert!(!is_svar('क'));
        assert!(is_vyanjan('क'));
        assert!(!is_vyanjan('अ'));
        assert!(is_matra('ा'));
        assert!(is_halanta('्'));
        assert!(is_visarga('ः'));
        assert!(is_avagraha('ऽ'));
    }
}
