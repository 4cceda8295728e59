//! Offset-calendar year display (e.g. Minguo years, Gregorian year minus 1911).
//!
//! Both directions work on already-formatted text: the first run of digits is treated as the year
//! and everything around it (era names, `年`, punctuation) is carried through untouched. Patterns
//! that render more than one digit group (year and day in one wheel) are not supported; the first
//! group is always taken to be the year.

use std::fmt::Write as _;
use std::sync::OnceLock;

use regex::Regex;

/// Years subtracted from the Gregorian year by the Minguo calendar.
pub const MINGUO_YEAR_OFFSET: i32 = 1911;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EraOffset {
    years: i32,
}

impl EraOffset {
    pub const MINGUO: EraOffset = EraOffset::new(MINGUO_YEAR_OFFSET);

    pub const fn new(years: i32) -> Self {
        Self { years }
    }

    pub const fn years(&self) -> i32 {
        self.years
    }

    /// Rewrite a standard-calendar rendering into its offset form (`2024年` -> `113年`).
    ///
    /// Only ASCII digits count. Returns `None` when the text has no digit run or the run is too
    /// long to fit an `i32`.
    pub fn to_offset_display(&self, formatted: &str) -> Option<String> {
        let found = first_digit_run().find(formatted)?;
        let year: i32 = match found.as_str().parse() {
            Ok(year) => year,
            Err(err) => {
                log::warn!(
                    "cannot read year digits {:?} in {formatted:?}: {err}",
                    found.as_str()
                );
                return None;
            }
        };
        let shifted = year.checked_sub(self.years)?;

        let mut out = String::with_capacity(formatted.len());
        out.push_str(&formatted[..found.start()]);
        // Writing into a `String` cannot fail.
        let _ = write!(out, "{shifted}");
        out.push_str(&formatted[found.end()..]);
        Some(out)
    }

    /// Recover the standard-calendar rendering from an offset display string (`113年` -> `2024年`).
    ///
    /// The result is `prefix + (digits + offset) + suffix`, where prefix/suffix are the non-digit
    /// runs immediately around the first digit run. Text with no digit run, or digits that don't
    /// parse, is returned unchanged.
    pub fn from_offset_display(&self, display: &str) -> String {
        let Some(caps) = affixed_digit_run().captures(display) else {
            return display.to_string();
        };
        let prefix = caps.get(1).map_or("", |m| m.as_str());
        let digits = caps.get(2).map_or("", |m| m.as_str());
        let suffix = caps.get(3).map_or("", |m| m.as_str());

        let year = match digits.parse::<i32>() {
            Ok(year) => year,
            Err(err) => {
                log::warn!("cannot read offset year digits {digits:?} in {display:?}: {err}");
                return display.to_string();
            }
        };
        match year.checked_add(self.years) {
            Some(year) => format!("{prefix}{year}{suffix}"),
            None => display.to_string(),
        }
    }
}

fn first_digit_run() -> &'static Regex {
    static DIGIT_RUN_RE: OnceLock<Regex> = OnceLock::new();
    DIGIT_RUN_RE.get_or_init(|| Regex::new(r"([0-9]+)").expect("valid regex"))
}

fn affixed_digit_run() -> &'static Regex {
    static AFFIXED_RE: OnceLock<Regex> = OnceLock::new();
    AFFIXED_RE.get_or_init(|| Regex::new(r"([^0-9]*)([0-9]+)([^0-9]*)").expect("valid regex"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn forward_replaces_only_the_year_digits() {
        let era = EraOffset::MINGUO;
        assert_eq!(era.to_offset_display("2024").as_deref(), Some("113"));
        assert_eq!(era.to_offset_display("2024年").as_deref(), Some("113年"));
        assert_eq!(era.to_offset_display("Year 2024 AD").as_deref(), Some("Year 113 AD"));
    }

    #[test]
    fn forward_misses_without_parseable_digits() {
        let era = EraOffset::MINGUO;
        assert_eq!(era.to_offset_display("year"), None);
        assert_eq!(era.to_offset_display(""), None);
        assert_eq!(era.to_offset_display("٢٠٢٤"), None);
        assert_eq!(era.to_offset_display("99999999999"), None);
    }

    #[test]
    fn inverse_restores_the_standard_year() {
        let era = EraOffset::MINGUO;
        assert_eq!(era.from_offset_display("113"), "2024");
        assert_eq!(era.from_offset_display("113年"), "2024年");
        assert_eq!(era.from_offset_display("民國113年"), "民國2024年");
    }

    #[test]
    fn inverse_passes_through_malformed_text() {
        let era = EraOffset::MINGUO;
        assert_eq!(era.from_offset_display("no digits"), "no digits");
        assert_eq!(era.from_offset_display("٢٠٢٤"), "٢٠٢٤");
        assert_eq!(era.from_offset_display("99999999999"), "99999999999");
    }

    #[test]
    fn non_ascii_digits_are_affixes() {
        let era = EraOffset::MINGUO;
        assert_eq!(era.to_offset_display("٢2024").as_deref(), Some("٢113"));
        assert_eq!(era.from_offset_display("٢113"), "٢2024");
    }

    #[test]
    fn inverse_keeps_only_the_affixes_around_the_first_digit_run() {
        // Only the first digit group is understood as the year.
        assert_eq!(EraOffset::MINGUO.from_offset_display("113年5月"), "2024年");
    }
}
