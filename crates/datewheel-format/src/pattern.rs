use thiserror::Error;

/// A calendar field referenced by a pattern letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `y`
    Year,
    /// `M` (format) or `L` (stand-alone); both render the same here.
    Month,
    /// `d`
    Day,
    /// `E`
    Weekday,
    /// `H` (0-23)
    Hour24,
    /// `h` (1-12)
    Hour12,
    /// `m`
    Minute,
    /// `s`
    Second,
    /// `a`
    AmPm,
}

impl Field {
    fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'y' => Field::Year,
            'M' | 'L' => Field::Month,
            'd' => Field::Day,
            'E' => Field::Weekday,
            'H' => Field::Hour24,
            'h' => Field::Hour12,
            'm' => Field::Minute,
            's' => Field::Second,
            'a' => Field::AmPm,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    /// A run of the same pattern letter; `width` is the run length (`yyyy` => 4).
    Field { field: Field, width: usize },
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unsupported pattern letter '{field}' at offset {offset}")]
    UnsupportedField { field: char, offset: usize },
    #[error("unterminated quoted literal starting at offset {offset}")]
    UnterminatedQuote { offset: usize },
}

/// A parsed LDML-style date pattern (`yyyy`, `MMMM`, `h:mm a`, `'week' w`...).
///
/// Quoting follows `SimpleDateFormat`: text inside `'...'` is literal and `''` is an apostrophe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    tokens: Vec<PatternToken>,
}

impl DatePattern {
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            if ch == '\'' {
                if chars.next_if(|&(_, c)| c == '\'').is_some() {
                    literal.push('\'');
                    continue;
                }

                let mut closed = false;
                while let Some((_, c)) = chars.next() {
                    if c == '\'' {
                        if chars.next_if(|&(_, c)| c == '\'').is_some() {
                            literal.push('\'');
                            continue;
                        }
                        closed = true;
                        break;
                    }
                    literal.push(c);
                }
                if !closed {
                    return Err(PatternError::UnterminatedQuote { offset });
                }
                continue;
            }

            if ch.is_ascii_alphabetic() {
                let field = Field::from_letter(ch)
                    .ok_or(PatternError::UnsupportedField { field: ch, offset })?;
                let mut width = 1;
                while chars.next_if(|&(_, c)| c == ch).is_some() {
                    width += 1;
                }
                if !literal.is_empty() {
                    tokens.push(PatternToken::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(PatternToken::Field { field, width });
                continue;
            }

            literal.push(ch);
        }

        if !literal.is_empty() {
            tokens.push(PatternToken::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    pub fn contains_field(&self, field: Field) -> bool {
        self.tokens
            .iter()
            .any(|token| matches!(token, PatternToken::Field { field: f, .. } if *f == field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_fields_and_literals() {
        let pattern = DatePattern::parse("yyyy/MM/dd h:mm a").unwrap();
        assert_eq!(
            pattern.tokens(),
            &[
                PatternToken::Field { field: Field::Year, width: 4 },
                PatternToken::Literal("/".to_string()),
                PatternToken::Field { field: Field::Month, width: 2 },
                PatternToken::Literal("/".to_string()),
                PatternToken::Field { field: Field::Day, width: 2 },
                PatternToken::Literal(" ".to_string()),
                PatternToken::Field { field: Field::Hour12, width: 1 },
                PatternToken::Literal(":".to_string()),
                PatternToken::Field { field: Field::Minute, width: 2 },
                PatternToken::Literal(" ".to_string()),
                PatternToken::Field { field: Field::AmPm, width: 1 },
            ]
        );
        assert!(pattern.contains_field(Field::AmPm));
        assert!(!pattern.contains_field(Field::Second));
    }

    #[test]
    fn quoted_text_is_literal() {
        let pattern = DatePattern::parse("'Year' y 'o''clock' ''").unwrap();
        assert_eq!(
            pattern.tokens(),
            &[
                PatternToken::Literal("Year ".to_string()),
                PatternToken::Field { field: Field::Year, width: 1 },
                PatternToken::Literal(" o'clock '".to_string()),
            ]
        );
    }

    #[test]
    fn non_ascii_text_needs_no_quoting() {
        let pattern = DatePattern::parse("y年").unwrap();
        assert_eq!(
            pattern.tokens(),
            &[
                PatternToken::Field { field: Field::Year, width: 1 },
                PatternToken::Literal("年".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_unknown_letters_and_open_quotes() {
        assert_eq!(
            DatePattern::parse("yyyy QQ"),
            Err(PatternError::UnsupportedField { field: 'Q', offset: 5 })
        );
        assert_eq!(
            DatePattern::parse("h 'oclock"),
            Err(PatternError::UnterminatedQuote { offset: 2 })
        );
    }
}
