use crate::devanagari::{CharType, classify};

/// A single syllable unit (akshara).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Akshara {
    /// The text of this akshara.
    pub text: String,
    /// Starting byte offset in the original string.
    pub start: usize,
    /// Ending byte offset in the original string.
    pub end: usize,
}

/// Split text into akshara (syllable) units with byte offsets.
///
/// Unit boundaries follow written convention rather than strict phonology:
/// a conjunct run (consonants chained by virama) stays with the vowel it
/// carries, a consonant silenced by virama in front of a vowelled consonant
/// closes the unit before it, and combining signs — anusvara, chandrabindu,
/// visarga, Vedic accents — never separate from the unit they mark. Anything
/// outside Devanagari becomes a one-character unit.
///
/// # Examples
///
/// ```
/// use padaccheda_akshar::split_aksharas;
///
/// let units = split_aksharas("रामः");
/// let texts: Vec<&str> = units.iter().map(|a| a.text.as_str()).collect();
/// assert_eq!(texts, vec!["रा", "मः"]);
/// ```
pub fn split_aksharas(text: &str) -> Vec<Akshara> {
    Scanner::new(text).run()
}

/// Cursor over the character sequence; `pos` is a char index, units are cut
/// by byte offset.
struct Scanner<'a> {
    text: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
    units: Vec<Akshara>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Scanner {
            text,
            chars: text.char_indices().collect(),
            pos: 0,
            units: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Akshara> {
        while self.pos < self.chars.len() {
            let start = self.pos;
            match self.type_at(0) {
                Some(CharType::Vyanjan) => self.consonant_unit(),
                Some(CharType::Svar) => {
                    self.pos += 1;
                    self.trailing_marks();
                }
                Some(ct) if is_combining_mark(ct) => {
                    // A mark with no base of its own joins the unit before
                    // it; at the very start of the text it stands alone.
                    self.pos += 1;
                    if self.absorb_into_previous() {
                        continue;
                    }
                }
                _ => self.pos += 1,
            }
            self.push_unit(start);
        }
        self.units
    }

    /// One unit anchored on a consonant: conjunct run, vowel material,
    /// closing consonants, then any combining marks.
    fn consonant_unit(&mut self) {
        self.pos += 1;
        self.conjunct_run();
        self.eat(CharType::Matra);
        self.eat(CharType::Nukta);
        self.closing_consonants();
        self.trailing_marks();
    }

    /// Virama + consonant pairs extending the cluster. A virama with
    /// nothing voiced after it (word-final, or before a non-consonant)
    /// terminates the unit.
    fn conjunct_run(&mut self) {
        while self.is_at(0, CharType::Halanta) {
            if self.is_at(1, CharType::Vyanjan) {
                self.pos += 2;
            } else {
                self.pos += 1;
                break;
            }
        }
    }

    /// A consonant silenced by virama closes this unit when the consonant
    /// after it carries its own vowel. A second virama beyond that
    /// consonant means a fresh conjunct run is forming, which belongs to
    /// the next unit instead.
    fn closing_consonants(&mut self) {
        while self.is_at(0, CharType::Vyanjan) && self.is_at(1, CharType::Halanta) {
            if !self.is_at(2, CharType::Vyanjan) || self.is_at(3, CharType::Halanta) {
                break;
            }
            self.pos += 2;
        }
    }

    fn trailing_marks(&mut self) {
        while self.type_at(0).is_some_and(is_combining_mark) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, ct: CharType) {
        if self.is_at(0, ct) {
            self.pos += 1;
        }
    }

    fn type_at(&self, offset: usize) -> Option<CharType> {
        self.chars
            .get(self.pos + offset)
            .and_then(|&(_, c)| classify(c))
    }

    fn is_at(&self, offset: usize, ct: CharType) -> bool {
        self.type_at(offset) == Some(ct)
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.chars
            .get(char_index)
            .map_or(self.text.len(), |&(byte, _)| byte)
    }

    fn push_unit(&mut self, start: usize) {
        let start_byte = self.byte_offset(start);
        let end_byte = self.byte_offset(self.pos);
        self.units.push(Akshara {
            text: self.text[start_byte..end_byte].to_string(),
            start: start_byte,
            end: end_byte,
        });
    }

    fn absorb_into_previous(&mut self) -> bool {
        let end_byte = self.byte_offset(self.pos);
        match self.units.last_mut() {
            Some(last) => {
                last.text = self.text[last.start..end_byte].to_string();
                last.end = end_byte;
                true
            }
            None => false,
        }
    }
}

fn is_combining_mark(ct: CharType) -> bool {
    matches!(
        ct,
        CharType::Anusvara | CharType::Chandrabindu | CharType::Visarga | CharType::VedicAccent
    )
}
