//! Standard wheel kinds for the usual date and time fields.

mod calendar;
mod clock;
mod year;

pub use calendar::{DateWheel, MonthWheel};
pub use clock::{AmPmWheel, HourWheel, MinuteWheel};
pub use year::YearWheel;

use chrono::{DateTime, Utc};

use crate::kind::WheelFormatter;

/// Render each date through `formatter`, dropping dates it cannot represent.
fn render_all(
    formatter: &WheelFormatter,
    dates: impl IntoIterator<Item = Option<DateTime<Utc>>>,
) -> Vec<String> {
    dates
        .into_iter()
        .flatten()
        .filter_map(|date| formatter.wheel_value(&date))
        .collect()
}
