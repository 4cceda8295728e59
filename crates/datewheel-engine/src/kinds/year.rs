use crate::era::EraOffset;
use crate::kind::{WheelFormatter, WheelKind};
use crate::picker::TextAlign;
use crate::state::{Mode, State};

use super::render_all;

/// Year column of the date mode.
///
/// Under the Minguo calendar the wheel lists offset years (`113` for 2024) and starts no earlier
/// than year 1 of the offset calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearWheel;

impl WheelKind for YearWheel {
    fn is_visible(&self, state: &State) -> bool {
        state.mode == Mode::Date
    }

    fn wrap_selector_wheel(&self) -> bool {
        false
    }

    fn text_align(&self) -> TextAlign {
        TextAlign::Center
    }

    fn format_pattern(&self, state: &State) -> String {
        match state.locale().id {
            "zh-TW" | "ja-JP" => "y年".to_string(),
            _ => "y".to_string(),
        }
    }

    fn values(&self, state: &State, formatter: &WheelFormatter) -> Vec<String> {
        let range = state.year_range();
        let first = match formatter.era() {
            Some(era) => (*range.start()).max(era.years() + 1),
            None => *range.start(),
        };
        render_all(
            formatter,
            (first..=*range.end()).map(|year| formatter.at_local(year, 1, 1, 0, 0)),
        )
    }

    fn era_offset(&self, state: &State) -> Option<EraOffset> {
        state.era_offset()
    }
}
