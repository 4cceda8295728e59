use crate::kind::{WheelFormatter, WheelKind};
use crate::picker::TextAlign;
use crate::state::{Mode, State};

use super::render_all;

/// A leap year with 31-day January, so every month and day-of-month renders.
const REFERENCE_YEAR: i32 = 2000;

#[derive(Debug, Clone, Copy, Default)]
pub struct MonthWheel;

impl WheelKind for MonthWheel {
    fn is_visible(&self, state: &State) -> bool {
        state.mode == Mode::Date
    }

    fn wrap_selector_wheel(&self) -> bool {
        true
    }

    fn text_align(&self) -> TextAlign {
        TextAlign::Left
    }

    fn format_pattern(&self, _state: &State) -> String {
        "MMMM".to_string()
    }

    fn values(&self, _state: &State, formatter: &WheelFormatter) -> Vec<String> {
        render_all(
            formatter,
            (1..=12).map(|month| formatter.at_local(REFERENCE_YEAR, month, 1, 12, 0)),
        )
    }
}

/// Day-of-month column (`1` ..= `31`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DateWheel;

impl WheelKind for DateWheel {
    fn is_visible(&self, state: &State) -> bool {
        state.mode == Mode::Date
    }

    fn wrap_selector_wheel(&self) -> bool {
        true
    }

    fn text_align(&self) -> TextAlign {
        TextAlign::Right
    }

    fn format_pattern(&self, _state: &State) -> String {
        "d".to_string()
    }

    fn values(&self, _state: &State, formatter: &WheelFormatter) -> Vec<String> {
        render_all(
            formatter,
            (1..=31).map(|day| formatter.at_local(REFERENCE_YEAR, 1, day, 12, 0)),
        )
    }
}
