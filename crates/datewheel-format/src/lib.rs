//! Locale/time-zone aware date rendering for picker wheels.
//!
//! This crate provides two layers:
//! - [`locale`] records carrying month/weekday names and AM/PM markers.
//! - A small LDML-style pattern engine (`yyyy`, `MMMM`, `d`, `EEE`, `h:mm a`, quoted literals)
//!   that renders a UTC instant as seen from a fixed-offset time zone.

pub mod locale;

mod pattern;
mod render;

pub use crate::pattern::{DatePattern, Field, PatternError, PatternToken};
pub use crate::render::{format_datetime, DateFormat, FormatOptions};

pub use locale::{get_locale, resolve_locale, DateLocale, EN_US, ZH_TW};
