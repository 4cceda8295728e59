use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};
use datewheel_format::{resolve_locale, DateLocale};
use serde::{Deserialize, Serialize};

use crate::era::EraOffset;

/// Year range used when no minimum/maximum date is configured.
pub const DEFAULT_MIN_YEAR: i32 = 1900;
pub const DEFAULT_MAX_YEAR: i32 = 2100;

/// Which fields the picker shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Date,
    Time,
    #[default]
    DateTime,
}

/// How year wheels display years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarDisplay {
    #[default]
    Gregorian,
    /// Gregorian year minus 1911 (`2024` is shown as `113`).
    Minguo,
}

/// Read-only configuration snapshot shared by every wheel of one picker.
///
/// The owning container builds a new snapshot when the configuration changes and hands it to each
/// wheel's `refresh`; wheels never observe a half-updated configuration and never depend on the
/// refresh order of their siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct State {
    /// BCP-47 or POSIX locale tag (`en-US`, `zh_TW`, ...).
    pub locale: String,
    /// Time zone as a fixed offset east of UTC, in minutes.
    pub time_zone_offset_minutes: i32,
    pub mode: Mode,
    pub calendar: CalendarDisplay,
    pub is_24_hour: bool,
    /// Minute wheel step. Must divide 60; anything else is treated as 1.
    pub minute_interval: u32,
    pub minimum_date: Option<DateTime<Utc>>,
    pub maximum_date: Option<DateTime<Utc>>,
    /// Derived by the container from the set of wheels it lays out.
    pub only_two_wheels_visible: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            time_zone_offset_minutes: 0,
            mode: Mode::default(),
            calendar: CalendarDisplay::default(),
            is_24_hour: false,
            minute_interval: 1,
            minimum_date: None,
            maximum_date: None,
            only_two_wheels_visible: false,
        }
    }
}

impl State {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn locale(&self) -> &'static DateLocale {
        resolve_locale(&self.locale)
    }

    /// The configured offset, or UTC when the offset is outside chrono's +/-24h range.
    pub fn time_zone(&self) -> FixedOffset {
        let offset = self
            .time_zone_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt);
        match offset {
            Some(offset) => offset,
            None => {
                log::warn!(
                    "time zone offset of {} minutes is out of range; using UTC",
                    self.time_zone_offset_minutes
                );
                Utc.fix()
            }
        }
    }

    #[must_use]
    pub fn has_only_two_wheels_visible(&self) -> bool {
        self.only_two_wheels_visible
    }

    pub fn era_offset(&self) -> Option<EraOffset> {
        match self.calendar {
            CalendarDisplay::Gregorian => None,
            CalendarDisplay::Minguo => Some(EraOffset::MINGUO),
        }
    }

    pub fn minute_step(&self) -> u32 {
        let interval = self.minute_interval;
        if interval == 0 || 60 % interval != 0 {
            log::warn!("minute interval {interval} does not divide an hour; using 1");
            return 1;
        }
        interval
    }

    /// Years covered by the year wheel, read in the configured time zone.
    pub fn year_range(&self) -> RangeInclusive<i32> {
        let tz = self.time_zone();
        let min = self
            .minimum_date
            .map_or(DEFAULT_MIN_YEAR, |d| d.with_timezone(&tz).year());
        let max = self
            .maximum_date
            .map_or(DEFAULT_MAX_YEAR, |d| d.with_timezone(&tz).year());
        if min > max {
            log::warn!("minimum date year {min} is after maximum date year {max}; swapping");
            return max..=min;
        }
        min..=max
    }
}
