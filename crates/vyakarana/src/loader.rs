use padaccheda_types::{
    Directions, LeftContext, Linga, PratyayaKind, SandhiCategory, StemClass, Vacana, Vibhakti,
};

use crate::VyakaranaError;
use crate::rules::{DerivationPattern, InflectionPattern, SandhiRule};

/// Iterate data lines of a TSV table, skipping blanks and `#` comments.
fn data_lines(data: &str) -> impl Iterator<Item = (usize, &str)> {
    data.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_error(table: &'static str, line: usize, message: impl Into<String>) -> VyakaranaError {
    VyakaranaError::Parse {
        table,
        line,
        message: message.into(),
    }
}

/// A "-" cell encodes an empty pattern or an absent optional value.
fn cell(raw: &str) -> &str {
    if raw == "-" { "" } else { raw }
}

pub fn parse_sandhi(data: &str) -> Result<Vec<SandhiRule>, VyakaranaError> {
    const TABLE: &str = "sandhi_rules";
    let mut rules = Vec::new();

    for (line_no, line) in data_lines(data) {
        let fields: Vec<&str> = line.split('\t').collect();
        let [id, category, left, right, result, priority, directions, context, citation, vedic] =
            fields[..]
        else {
            return Err(parse_error(
                TABLE,
                line_no,
                format!("expected 10 columns, got {}", fields.len()),
            ));
        };

        let category = match category {
            "svara" => SandhiCategory::Svara,
            "vyanjana" => SandhiCategory::Vyanjana,
            "visarga" => SandhiCategory::Visarga,
            "vishesha" => SandhiCategory::Vishesha,
            other => {
                return Err(parse_error(
                    TABLE,
                    line_no,
                    format!("unknown category {other:?}"),
                ));
            }
        };

        let priority: i64 = priority
            .parse()
            .map_err(|_| parse_error(TABLE, line_no, format!("bad priority {priority:?}")))?;
        if !(1..=10).contains(&priority) {
            return Err(VyakaranaError::PriorityOutOfRange {
                id: id.to_string(),
                priority,
            });
        }

        let directions = match directions {
            "f" => Directions::FORWARD,
            "r" => Directions::REVERSE,
            "fr" => Directions::BOTH,
            other => {
                return Err(parse_error(
                    TABLE,
                    line_no,
                    format!("unknown directions {other:?}"),
                ));
            }
        };

        let left_context = match context {
            "-" => LeftContext::Any,
            "a" => LeftContext::InherentA,
            "iu" => LeftContext::IU,
            other => {
                return Err(parse_error(
                    TABLE,
                    line_no,
                    format!("unknown left context {other:?}"),
                ));
            }
        };

        let vedic = match vedic {
            "0" => false,
            "1" => true,
            other => {
                return Err(parse_error(
                    TABLE,
                    line_no,
                    format!("bad vedic flag {other:?}"),
                ));
            }
        };

        rules.push(SandhiRule {
            id: id.to_string(),
            category,
            left_pattern: cell(left).to_string(),
            right_pattern: cell(right).to_string(),
            result: cell(result).to_string(),
            priority: priority as u8,
            directions,
            left_context,
            citation: match cell(citation) {
                "" => None,
                c => Some(c.to_string()),
            },
            vedic,
        });
    }

    Ok(rules)
}

pub fn parse_inflections(data: &str) -> Result<Vec<InflectionPattern>, VyakaranaError> {
    const TABLE: &str = "inflections";
    let mut patterns = Vec::new();

    for (line_no, line) in data_lines(data) {
        let fields: Vec<&str> = line.split('\t').collect();
        let [ending, vibhakti, vacana, linga, stem_class, priority] = fields[..] else {
            return Err(parse_error(
                TABLE,
                line_no,
                format!("expected 6 columns, got {}", fields.len()),
            ));
        };

        let vibhakti_index: u8 = vibhakti
            .parse()
            .map_err(|_| parse_error(TABLE, line_no, format!("bad vibhakti {vibhakti:?}")))?;
        let vibhakti = Vibhakti::from_index(vibhakti_index)
            .ok_or_else(|| parse_error(TABLE, line_no, format!("bad vibhakti {vibhakti:?}")))?;

        let vacana = match vacana {
            "e" => Vacana::Eka,
            "d" => Vacana::Dvi,
            "b" => Vacana::Bahu,
            other => {
                return Err(parse_error(
                    TABLE,
                    line_no,
                    format!("unknown vacana {other:?}"),
                ));
            }
        };

        let linga = match linga {
            "m" => Linga::Pum,
            "f" => Linga::Stri,
            "n" => Linga::Napumsaka,
            "x" => Linga::Ajnata,
            other => {
                return Err(parse_error(
                    TABLE,
                    line_no,
                    format!("unknown linga {other:?}"),
                ));
            }
        };

        let stem_class = parse_stem_class(stem_class)
            .ok_or_else(|| parse_error(TABLE, line_no, format!("unknown stem class {stem_class:?}")))?;

        let priority: i64 = priority
            .parse()
            .map_err(|_| parse_error(TABLE, line_no, format!("bad priority {priority:?}")))?;
        if !(1..=10).contains(&priority) {
            return Err(VyakaranaError::PriorityOutOfRange {
                id: format!("ending {ending:?}"),
                priority,
            });
        }

        patterns.push(InflectionPattern {
            ending: ending.to_string(),
            vibhakti,
            vacana,
            linga,
            stem_class,
            priority: priority as u8,
        });
    }

    Ok(patterns)
}

fn parse_stem_class(code: &str) -> Option<StemClass> {
    match code {
        "a" => Some(StemClass::A),
        "aa" => Some(StemClass::Aa),
        "i" => Some(StemClass::I),
        "ii" => Some(StemClass::Ii),
        "u" => Some(StemClass::U),
        "uu" => Some(StemClass::Uu),
        "ri" => Some(StemClass::Ri),
        "hal" => Some(StemClass::Halanta),
        _ => None,
    }
}

pub fn parse_derivations(data: &str) -> Result<Vec<DerivationPattern>, VyakaranaError> {
    const TABLE: &str = "derivations";
    let mut patterns = Vec::new();

    for (line_no, line) in data_lines(data) {
        let fields: Vec<&str> = line.split('\t').collect();
        let [suffix, kind, category] = fields[..] else {
            return Err(parse_error(
                TABLE,
                line_no,
                format!("expected 3 columns, got {}", fields.len()),
            ));
        };

        let kind = match kind {
            "krt" => PratyayaKind::Krt,
            "taddhita" => PratyayaKind::Taddhita,
            "stri" => PratyayaKind::Stri,
            other => {
                return Err(parse_error(
                    TABLE,
                    line_no,
                    format!("unknown pratyaya kind {other:?}"),
                ));
            }
        };

        patterns.push(DerivationPattern {
            suffix: suffix.to_string(),
            kind,
            category: category.to_string(),
        });
    }

    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sandhi_line() {
        let rules = parse_sandhi("VS13\tsvara\t-\tउ\tो\t8\tfr\ta\t6.1.87\t0\n").unwrap();
        assert_eq!(rules.len(), 1);
        let r = &rules[0];
        assert_eq!(r.id, "VS13");
        assert_eq!(r.left_pattern, "");
        assert_eq!(r.right_pattern, "उ");
        assert_eq!(r.result, "ो");
        assert_eq!(r.priority, 8);
        assert_eq!(r.left_context, LeftContext::InherentA);
        assert!(r.directions.forward && r.directions.reverse);
        assert_eq!(r.citation.as_deref(), Some("6.1.87"));
        assert!(!r.vedic);
    }

    #[test]
    fn test_parse_sandhi_rejects_bad_priority() {
        let err = parse_sandhi("X1\tsvara\t-\tउ\tो\t11\tfr\ta\t-\t0\n").unwrap_err();
        assert!(matches!(
            err,
            VyakaranaError::PriorityOutOfRange { priority: 11, .. }
        ));
    }

    #[test]
    fn test_parse_sandhi_rejects_short_line() {
        assert!(parse_sandhi("X1\tsvara\t-\tउ\n").is_err());
    }

    #[test]
    fn test_parse_inflection_line() {
        let patterns = parse_inflections("ाः\t1\tb\tm\ta\t4\n").unwrap();
        assert_eq!(patterns.len(), 1);
        let p = &patterns[0];
        assert_eq!(p.ending, "ाः");
        assert_eq!(p.vibhakti, Vibhakti::Prathama);
        assert_eq!(p.vacana, Vacana::Bahu);
        assert_eq!(p.linga, Linga::Pum);
        assert_eq!(p.stem_class, StemClass::A);
    }

    #[test]
    fn test_parse_derivation_line() {
        let patterns = parse_derivations("तुम्\tkrt\tinfinitive\n").unwrap();
        assert_eq!(patterns[0].kind, PratyayaKind::Krt);
        assert_eq!(patterns[0].category, "infinitive");
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let rules = parse_sandhi("# header\n\nVS13\tsvara\t-\tउ\tो\t8\tfr\ta\t-\t0\n").unwrap();
        assert_eq!(rules.len(), 1);
    }
}
