use std::fmt::Write as _;

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};

use crate::locale::{DateLocale, EN_US};
use crate::pattern::{DatePattern, Field, PatternError, PatternToken};

/// Locale + time zone used when rendering a calendar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub locale: &'static DateLocale,
    pub time_zone: FixedOffset,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: &EN_US,
            time_zone: Utc.fix(),
        }
    }
}

/// A date pattern bound to a locale.
///
/// The time zone is supplied per call so one instance can follow time-zone changes without being
/// rebuilt; the locale is fixed and a locale change means building a new `DateFormat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: DatePattern,
    locale: &'static DateLocale,
}

impl DateFormat {
    pub fn new(pattern: &str, locale: &'static DateLocale) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: DatePattern::parse(pattern)?,
            locale,
        })
    }

    pub fn pattern(&self) -> &DatePattern {
        &self.pattern
    }

    pub fn locale(&self) -> &'static DateLocale {
        self.locale
    }

    /// Render `value` as seen from `time_zone`.
    pub fn format(&self, value: &DateTime<Utc>, time_zone: FixedOffset) -> String {
        let local = value.with_timezone(&time_zone);
        let mut out = String::new();
        for token in self.pattern.tokens() {
            match token {
                PatternToken::Literal(text) => out.push_str(text),
                PatternToken::Field { field, width } => {
                    render_field(&mut out, *field, *width, &local, self.locale)
                }
            }
        }
        out
    }
}

/// Format a value with a one-off pattern.
pub fn format_datetime(
    value: &DateTime<Utc>,
    pattern: &str,
    options: &FormatOptions,
) -> Result<String, PatternError> {
    let format = DateFormat::new(pattern, options.locale)?;
    Ok(format.format(value, options.time_zone))
}

fn render_field(
    out: &mut String,
    field: Field,
    width: usize,
    local: &DateTime<FixedOffset>,
    locale: &DateLocale,
) {
    match field {
        Field::Year => {
            if width == 2 {
                push_padded(out, i64::from(local.year().rem_euclid(100)), 2);
            } else {
                push_padded(out, i64::from(local.year()), width);
            }
        }
        Field::Month => {
            let index = local.month0() as usize;
            match width {
                1 | 2 => push_padded(out, i64::from(local.month()), width),
                3 => out.push_str(locale.month_abbrevs[index]),
                _ => out.push_str(locale.month_names[index]),
            }
        }
        Field::Day => push_padded(out, i64::from(local.day()), width),
        Field::Weekday => {
            let index = local.weekday().num_days_from_monday() as usize;
            if width >= 4 {
                out.push_str(locale.weekday_names[index]);
            } else {
                out.push_str(locale.weekday_abbrevs[index]);
            }
        }
        Field::Hour24 => push_padded(out, i64::from(local.hour()), width),
        Field::Hour12 => {
            let (_, hour) = local.hour12();
            push_padded(out, i64::from(hour), width);
        }
        Field::Minute => push_padded(out, i64::from(local.minute()), width),
        Field::Second => push_padded(out, i64::from(local.second()), width),
        Field::AmPm => {
            let marker = if local.hour() < 12 { locale.am } else { locale.pm };
            out.push_str(marker);
        }
    }
}

fn push_padded(out: &mut String, value: i64, width: usize) {
    // Writing into a `String` cannot fail.
    let _ = write!(out, "{value:0width$}");
}
