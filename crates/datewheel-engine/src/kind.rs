use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use datewheel_format::{DateFormat, DateLocale};

use crate::era::EraOffset;
use crate::picker::TextAlign;
use crate::state::State;

/// Per-field behaviour plugged into a [`crate::Wheel`] (year, month, hour, ...).
///
/// The engine owns the value/index bookkeeping; a kind only declares how its field is formatted,
/// which values it offers and when it is shown.
pub trait WheelKind {
    fn is_visible(&self, state: &State) -> bool;

    fn wrap_selector_wheel(&self) -> bool;

    fn text_align(&self) -> TextAlign;

    fn format_pattern(&self, state: &State) -> String;

    /// Every selectable value, in wheel order, rendered through `formatter`.
    ///
    /// Generators should render with [`WheelFormatter::wheel_value`] so the list is built exactly
    /// the way [`crate::Wheel::set_value`] renders its lookup target.
    fn values(&self, state: &State, formatter: &WheelFormatter) -> Vec<String>;

    /// Post-processing applied to each value before it is listed (and to lookup targets).
    fn to_display_value(&self, _state: &State, value: &str) -> String {
        value.to_string()
    }

    /// Offset-calendar display for year-like wheels. `None` means values are shown as formatted.
    fn era_offset(&self, _state: &State) -> Option<EraOffset> {
        None
    }
}

/// Formatting context a wheel rebuilds on every refresh: its pattern in the current locale, the
/// time zone, and the era offset when the wheel displays offset years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelFormatter {
    format: DateFormat,
    time_zone: FixedOffset,
    era: Option<EraOffset>,
}

impl WheelFormatter {
    pub fn new(format: DateFormat, time_zone: FixedOffset, era: Option<EraOffset>) -> Self {
        Self {
            format,
            time_zone,
            era,
        }
    }

    pub fn pattern(&self) -> &str {
        self.format.pattern().as_str()
    }

    pub fn locale(&self) -> &'static DateLocale {
        self.format.locale()
    }

    pub fn time_zone(&self) -> FixedOffset {
        self.time_zone
    }

    pub fn era(&self) -> Option<EraOffset> {
        self.era
    }

    /// Standard-calendar rendering of `value` in the wheel's locale and time zone.
    pub fn format(&self, value: &DateTime<Utc>) -> String {
        self.format.format(value, self.time_zone)
    }

    /// What the wheel lists for `value`: [`Self::format`], rewritten to offset years when an era
    /// offset is active. `None` when the era rewrite finds no usable year digits.
    pub fn wheel_value(&self, value: &DateTime<Utc>) -> Option<String> {
        let formatted = self.format(value);
        match self.era {
            Some(era) => era.to_offset_display(&formatted),
            None => Some(formatted),
        }
    }

    /// The instant whose wall-clock time in this time zone is the given fields.
    pub fn at_local(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Option<DateTime<Utc>> {
        self.time_zone
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .map(|local| local.with_timezone(&Utc))
    }
}
