/// The eight grammatical cases (विभक्ति).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vibhakti {
    /// प्रथमा — nominative.
    Prathama,
    /// द्वितीया — accusative.
    Dvitiya,
    /// तृतीया — instrumental.
    Tritiya,
    /// चतुर्थी — dative.
    Chaturthi,
    /// पञ्चमी — ablative.
    Panchami,
    /// षष्ठी — genitive.
    Shashthi,
    /// सप्तमी — locative.
    Saptami,
    /// सम्बोधन — vocative.
    Sambodhana,
}

impl Vibhakti {
    /// Map the conventional 1-8 case index to a variant.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Prathama),
            2 => Some(Self::Dvitiya),
            3 => Some(Self::Tritiya),
            4 => Some(Self::Chaturthi),
            5 => Some(Self::Panchami),
            6 => Some(Self::Shashthi),
            7 => Some(Self::Saptami),
            8 => Some(Self::Sambodhana),
            _ => None,
        }
    }

    /// The conventional 1-8 case index.
    pub fn index(self) -> u8 {
        match self {
            Self::Prathama => 1,
            Self::Dvitiya => 2,
            Self::Tritiya => 3,
            Self::Chaturthi => 4,
            Self::Panchami => 5,
            Self::Shashthi => 6,
            Self::Saptami => 7,
            Self::Sambodhana => 8,
        }
    }

    /// Canonical Devanagari label for display surfaces.
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Prathama => "प्रथमा",
            Self::Dvitiya => "द्वितीया",
            Self::Tritiya => "तृतीया",
            Self::Chaturthi => "चतुर्थी",
            Self::Panchami => "पञ्चमी",
            Self::Shashthi => "षष्ठी",
            Self::Saptami => "सप्तमी",
            Self::Sambodhana => "सम्बोधन",
        }
    }
}

/// Grammatical number (वचन).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vacana {
    /// एकवचन — singular.
    Eka,
    /// द्विवचन — dual.
    Dvi,
    /// बहुवचन — plural.
    Bahu,
}

impl Vacana {
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Eka => "एकवचन",
            Self::Dvi => "द्विवचन",
            Self::Bahu => "बहुवचन",
        }
    }
}

/// Grammatical gender (लिङ्ग).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Linga {
    /// पुंलिङ्ग — masculine.
    Pum,
    /// स्त्रीलिङ्ग — feminine.
    Stri,
    /// नपुंसकलिङ्ग — neuter.
    Napumsaka,
    /// Gender not recoverable from the ending alone.
    Ajnata,
}

impl Linga {
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Pum => "पुंलिङ्ग",
            Self::Stri => "स्त्रीलिङ्ग",
            Self::Napumsaka => "नपुंसकलिङ्ग",
            Self::Ajnata => "अज्ञात",
        }
    }
}

/// Stem class: the final phonetic element of a nominal stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemClass {
    /// -अ stems (राम, देव).
    A,
    /// -आ stems (सीता, विद्या).
    Aa,
    /// -इ stems (हरि, कवि).
    I,
    /// -ई stems (नदी, देवी).
    Ii,
    /// -उ stems (गुरु, वायु).
    U,
    /// -ऊ stems (वधू).
    Uu,
    /// -ऋ stems (पितृ, कर्तृ).
    Ri,
    /// Consonant-final stems (मरुत्, वाच्).
    Halanta,
}

/// Derivational suffix kind (प्रत्यय).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PratyayaKind {
    /// कृत् — primary suffix attached to a verbal root.
    Krt,
    /// तद्धित — secondary suffix attached to a nominal stem.
    Taddhita,
    /// स्त्री — feminine-forming suffix.
    Stri,
}

impl PratyayaKind {
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Krt => "कृत्",
            Self::Taddhita => "तद्धित",
            Self::Stri => "स्त्री",
        }
    }
}

/// Categories of sandhi rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SandhiCategory {
    /// स्वर सन्धि — vowels combining at the junction.
    Svara,
    /// व्यञ्जन सन्धि — consonant assimilation.
    Vyanjana,
    /// विसर्ग सन्धि — visarga transformations.
    Visarga,
    /// Special junctions (avagraha writing conventions and the like).
    Vishesha,
}

impl SandhiCategory {
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Svara => "स्वर सन्धि",
            Self::Vyanjana => "व्यञ्जन सन्धि",
            Self::Visarga => "विसर्ग सन्धि",
            Self::Vishesha => "विशेष सन्धि",
        }
    }
}

/// Which directions a sandhi rule may be applied in.
///
/// `forward` joins two morphemes into a surface form; `reverse` licenses a
/// split hypothesis when the rule's result is seen word-internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Directions {
    pub forward: bool,
    pub reverse: bool,
}

impl Directions {
    pub const FORWARD: Self = Self {
        forward: true,
        reverse: false,
    };
    pub const REVERSE: Self = Self {
        forward: false,
        reverse: true,
    };
    pub const BOTH: Self = Self {
        forward: true,
        reverse: true,
    };
}

/// Constraint on what must precede a rule's left pattern.
///
/// Flat rule tables cannot express "a bare consonant carries an inherent अ"
/// in the pattern string itself, so the constraint is a separate column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeftContext {
    /// No constraint.
    #[default]
    Any,
    /// The segment before the left pattern must end in a bare consonant,
    /// i.e. one carrying the inherent vowel अ.
    InherentA,
    /// The segment before the left pattern must end in an i- or u-class
    /// vowel (independent or matra).
    IU,
}
