use crate::kind::{WheelFormatter, WheelKind};
use crate::picker::TextAlign;
use crate::state::{Mode, State};

use super::render_all;

const REFERENCE_YEAR: i32 = 2000;

fn shows_time(state: &State) -> bool {
    state.mode != Mode::Date
}

/// Hour column. Lists `12, 1, ..., 11` on a 12-hour clock and `00 ..= 23` on a 24-hour clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct HourWheel;

impl WheelKind for HourWheel {
    fn is_visible(&self, state: &State) -> bool {
        shows_time(state)
    }

    fn wrap_selector_wheel(&self) -> bool {
        true
    }

    fn text_align(&self) -> TextAlign {
        TextAlign::Right
    }

    fn format_pattern(&self, state: &State) -> String {
        let pattern = if state.is_24_hour { "H" } else { "h" };
        pattern.to_string()
    }

    fn values(&self, state: &State, formatter: &WheelFormatter) -> Vec<String> {
        let hours = if state.is_24_hour { 24 } else { 12 };
        render_all(
            formatter,
            (0..hours).map(|hour| formatter.at_local(REFERENCE_YEAR, 1, 1, hour, 0)),
        )
    }

    fn to_display_value(&self, state: &State, value: &str) -> String {
        if state.is_24_hour && value.len() == 1 && value.bytes().all(|b| b.is_ascii_digit()) {
            format!("0{value}")
        } else {
            value.to_string()
        }
    }
}

/// Minute column, stepped by the configured minute interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinuteWheel;

impl WheelKind for MinuteWheel {
    fn is_visible(&self, state: &State) -> bool {
        shows_time(state)
    }

    fn wrap_selector_wheel(&self) -> bool {
        true
    }

    fn text_align(&self) -> TextAlign {
        TextAlign::Left
    }

    fn format_pattern(&self, _state: &State) -> String {
        "mm".to_string()
    }

    fn values(&self, state: &State, formatter: &WheelFormatter) -> Vec<String> {
        let step = state.minute_step() as usize;
        render_all(
            formatter,
            (0..60)
                .step_by(step)
                .map(|minute| formatter.at_local(REFERENCE_YEAR, 1, 1, 0, minute)),
        )
    }
}

/// AM/PM column; only shown on a 12-hour clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmPmWheel;

impl WheelKind for AmPmWheel {
    fn is_visible(&self, state: &State) -> bool {
        shows_time(state) && !state.is_24_hour
    }

    fn wrap_selector_wheel(&self) -> bool {
        false
    }

    fn text_align(&self) -> TextAlign {
        TextAlign::Center
    }

    fn format_pattern(&self, _state: &State) -> String {
        "a".to_string()
    }

    fn values(&self, _state: &State, formatter: &WheelFormatter) -> Vec<String> {
        render_all(
            formatter,
            [0, 12].map(|hour| formatter.at_local(REFERENCE_YEAR, 1, 1, hour, 0)),
        )
    }
}
