use chrono::{DateTime, TimeZone, Utc};
use datewheel_engine::kinds::YearWheel;
use datewheel_engine::{
    CalendarDisplay, EraOffset, MemoryPicker, Mode, Picker, State, Wheel, WheelError, MINGUO_YEAR_OFFSET,
};
use pretty_assertions::assert_eq;

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

fn minguo_state(locale: &str) -> State {
    State {
        locale: locale.to_string(),
        mode: Mode::Date,
        calendar: CalendarDisplay::Minguo,
        ..State::default()
    }
}

fn year_wheel(state: &State) -> Wheel<MemoryPicker> {
    let mut wheel = Wheel::new(MemoryPicker::new(), Box::new(YearWheel), state).unwrap();
    wheel.refresh(state).unwrap();
    wheel
}

#[test]
fn lists_offset_years_from_year_one() {
    let wheel = year_wheel(&minguo_state("en-US"));
    assert!(wheel.uses_era_offset());
    assert_eq!(wheel.values().first().map(String::as_str), Some("1"));
    assert_eq!(wheel.values().last().map(String::as_str), Some("189"));
    assert_eq!(wheel.values().len(), 189);
}

#[test]
fn set_year_reads_back_standard_year() {
    let mut wheel = year_wheel(&minguo_state("en-US"));
    wheel.set_value(utc(2024, 6, 1));

    assert_eq!(wheel.value().unwrap(), "113");
    assert_eq!(wheel.year_value().unwrap(), "2024");
    assert_eq!(wheel.picker().cursor(), 112);
}

#[test]
fn suffixes_survive_both_directions() {
    let mut wheel = year_wheel(&minguo_state("zh-TW"));
    assert_eq!(wheel.values().first().map(String::as_str), Some("1年"));

    wheel.set_value(utc(2024, 6, 1));
    assert_eq!(wheel.value().unwrap(), "113年");
    assert_eq!(wheel.year_value().unwrap(), "2024年");
}

#[test]
fn gregorian_year_value_is_plain_value() {
    let state = State {
        mode: Mode::Date,
        ..State::default()
    };
    let mut wheel = year_wheel(&state);
    assert!(!wheel.uses_era_offset());
    assert_eq!(wheel.values().len(), 201);

    wheel.set_value(utc(2024, 6, 1));
    assert_eq!(wheel.value().unwrap(), "2024");
    assert_eq!(wheel.year_value().unwrap(), "2024");
}

#[test]
fn hidden_era_wheel_reports_the_standard_year() {
    let state = State {
        mode: Mode::Time,
        ..minguo_state("en-US")
    };
    let mut wheel = year_wheel(&state);
    wheel.set_value(utc(2024, 6, 1));
    assert_eq!(wheel.year_value().unwrap(), "2024");
    assert_eq!(wheel.value().unwrap(), "2024");
}

#[test]
fn switching_calendar_on_refresh_rebuilds_the_list() {
    let gregorian = State {
        mode: Mode::Date,
        ..State::default()
    };
    let mut wheel = year_wheel(&gregorian);
    assert_eq!(wheel.values().first().map(String::as_str), Some("1900"));

    wheel.refresh(&minguo_state("en-US")).unwrap();
    assert_eq!(wheel.values().first().map(String::as_str), Some("1"));
    wheel.set_value(utc(1949, 10, 1));
    assert_eq!(wheel.value().unwrap(), "38");
}

#[test]
fn year_is_read_in_the_configured_time_zone() {
    let state = State {
        time_zone_offset_minutes: 8 * 60,
        ..minguo_state("en-US")
    };
    let mut wheel = year_wheel(&state);
    // Already 2024 in UTC+8.
    wheel.set_value(Utc.with_ymd_and_hms(2023, 12, 31, 20, 0, 0).unwrap());
    assert_eq!(wheel.value().unwrap(), "113");
    assert_eq!(wheel.year_value().unwrap(), "2024");
}

#[test]
fn years_before_the_era_are_lookup_misses() {
    let mut wheel = year_wheel(&minguo_state("en-US"));
    wheel.set_value(utc(2000, 1, 1));
    let cursor = wheel.picker().cursor();

    wheel.set_value(utc(1900, 1, 1));
    assert_eq!(wheel.picker().cursor(), cursor);
    assert_eq!(wheel.value().unwrap(), "89");
}

#[test]
fn bounds_before_the_era_leave_an_empty_wheel() {
    let state = State {
        maximum_date: Some(utc(1905, 1, 1)),
        ..minguo_state("en-US")
    };
    let mut wheel = year_wheel(&state);
    assert!(wheel.values().is_empty());
    assert_eq!(wheel.picker().range(), (0, 0));

    wheel.set_value(utc(1900, 1, 1));
    assert_eq!(wheel.picker().cursor(), 0);
    assert_eq!(
        wheel.year_value(),
        Err(WheelError::CursorOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn offset_constant_is_1911() {
    assert_eq!(MINGUO_YEAR_OFFSET, 1911);
    assert_eq!(EraOffset::MINGUO.years(), 1911);
}

#[cfg(not(target_arch = "wasm32"))]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn era_round_trip(year in 1912i32..=2100) {
            let mut wheel = year_wheel(&minguo_state("en-US"));
            wheel.set_value(utc(year, 7, 1));
            let offset = year - MINGUO_YEAR_OFFSET;
            prop_assert_eq!(wheel.value().unwrap(), offset.to_string());
            prop_assert_eq!(wheel.year_value().unwrap(), year.to_string());
        }

        #[test]
        fn inverse_without_digits_is_identity(text in "[a-zA-Z年月 .,-]{0,16}") {
            prop_assert_eq!(EraOffset::MINGUO.from_offset_display(&text), text);
        }
    }
}
