use chrono::{DateTime, Utc};
use datewheel_format::DateFormat;

use crate::error::WheelError;
use crate::kind::{WheelFormatter, WheelKind};
use crate::picker::Picker;
use crate::state::{Mode, State};

/// Item padding when the container lays out only two wheels.
pub const TWO_WHEEL_PADDING: u32 = 10;
/// Item padding in date mode.
pub const DATE_MODE_PADDING: u32 = 15;
/// Item padding in time and datetime modes.
pub const TIME_MODE_PADDING: u32 = 5;

/// One picker column: keeps a [`Picker`]'s cursor and a list of formatted values in sync with a
/// semantic date.
///
/// `values` is index-aligned with the picker: cursor `i` shows `values[i]`. While the kind reports
/// the wheel as hidden, reads ignore the picker and format the last value passed to
/// [`Wheel::set_value`] instead.
pub struct Wheel<P> {
    picker: P,
    kind: Box<dyn WheelKind>,
    state: State,
    formatter: WheelFormatter,
    values: Vec<String>,
    user_value: Option<DateTime<Utc>>,
}

impl<P: Picker> Wheel<P> {
    /// Bind `kind` to `picker` and apply the picker's static properties.
    ///
    /// The value list stays empty until the first [`Wheel::refresh`].
    pub fn new(mut picker: P, kind: Box<dyn WheelKind>, state: &State) -> Result<Self, WheelError> {
        let formatter = build_formatter(kind.as_ref(), state)?;
        picker.set_text_align(kind.text_align());
        picker.set_wrap_selector_wheel(kind.wrap_selector_wheel());
        Ok(Self {
            picker,
            kind,
            state: state.clone(),
            formatter,
            values: Vec::new(),
            user_value: None,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.kind.is_visible(&self.state)
    }

    pub fn uses_era_offset(&self) -> bool {
        self.formatter.era().is_some()
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut P {
        &mut self.picker
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn formatter(&self) -> &WheelFormatter {
        &self.formatter
    }

    /// The current value list, already passed through the kind's display transform.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn value_at_index(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn last_user_value(&self) -> Option<&DateTime<Utc>> {
        self.user_value.as_ref()
    }

    /// Standard-calendar rendering of `date` with this wheel's pattern, locale and time zone.
    pub fn locale_string(&self, date: &DateTime<Utc>) -> String {
        self.formatter.format(date)
    }

    /// Record `date` and move the cursor to it.
    ///
    /// A cursor still at 0 is set directly so the first assignment doesn't animate; later moves
    /// scroll. A date that isn't in the list leaves the cursor alone (the value is still recorded).
    pub fn set_value(&mut self, date: DateTime<Utc>) {
        self.user_value = Some(date);
        let Some(index) = self.index_of_date(&date) else {
            return;
        };
        if self.picker.cursor() == 0 {
            log::debug!("setting wheel cursor to {index}");
            self.picker.set_cursor(index);
        } else {
            log::debug!("scrolling wheel cursor to {index}");
            self.picker.smooth_scroll_to(index);
        }
    }

    /// Scroll to `date` without recording it as the wheel's value.
    pub fn animate_to_date(&mut self, date: &DateTime<Utc>) {
        if let Some(index) = self.index_of_date(date) {
            self.picker.smooth_scroll_to(index);
        }
    }

    pub fn value(&self) -> Result<String, WheelError> {
        if !self.is_visible() {
            return self.format_user_value();
        }
        self.value_at_cursor()
    }

    /// Like [`Wheel::value`], but an offset-year display is converted back to the standard year.
    pub fn year_value(&self) -> Result<String, WheelError> {
        if !self.is_visible() {
            return self.format_user_value();
        }
        let display = self.value_at_cursor()?;
        Ok(match self.formatter.era() {
            Some(era) => era.from_offset_display(&display),
            None => display,
        })
    }

    /// The value `steps` positions before the cursor, wrapping around the list.
    pub fn past_value(&self, steps: usize) -> Result<String, WheelError> {
        if !self.is_visible() {
            return self.format_user_value();
        }
        let len = self.values.len();
        if len == 0 {
            return Err(WheelError::EmptyValues);
        }
        let cursor = self.picker.cursor();
        if cursor >= len {
            return Err(WheelError::CursorOutOfRange { index: cursor, len });
        }
        let index = (cursor + len - steps % len) % len;
        Ok(self.values[index].clone())
    }

    /// Adopt `state` and, if the wheel is visible, regenerate its values.
    ///
    /// The picker range is collapsed to `0..=0` before the new list is pushed and only then grown
    /// to the list's length, so the picker never holds a cursor beyond the list it displays.
    pub fn refresh(&mut self, state: &State) -> Result<(), WheelError> {
        self.formatter = build_formatter(self.kind.as_ref(), state)?;
        self.state = state.clone();
        if !self.is_visible() {
            return Ok(());
        }

        self.picker.set_range(0, 0);
        let values: Vec<String> = self
            .kind
            .values(&self.state, &self.formatter)
            .iter()
            .map(|value| self.kind.to_display_value(&self.state, value))
            .collect();
        self.picker.set_displayed_values(&values);
        if values.is_empty() {
            // The picker keeps its collapsed `0..=0` range; reads report `CursorOutOfRange`.
            log::debug!("wheel with pattern {:?} generated no values", self.formatter.pattern());
        } else {
            self.picker.set_range(0, values.len() - 1);
        }
        log::debug!(
            "refreshed wheel with pattern {:?}: {} values",
            self.formatter.pattern(),
            values.len()
        );
        self.values = values;
        Ok(())
    }

    pub fn update_visibility(&mut self) {
        let visible = self.is_visible();
        self.picker.set_visible(visible);
    }

    pub fn horizontal_padding(&self) -> u32 {
        horizontal_padding(&self.state)
    }

    pub fn apply_horizontal_padding(&mut self) {
        let padding = self.horizontal_padding();
        self.picker.set_horizontal_padding(padding);
    }

    fn index_of_date(&self, date: &DateTime<Utc>) -> Option<usize> {
        let Some(target) = self.formatter.wheel_value(date) else {
            log::debug!(
                "no offset year in {:?}; leaving wheel cursor unchanged",
                self.formatter.format(date)
            );
            return None;
        };
        let target = self.kind.to_display_value(&self.state, &target);
        let index = self.values.iter().position(|value| *value == target);
        if index.is_none() {
            log::debug!(
                "{target:?} is not among the wheel's {} values; leaving cursor unchanged",
                self.values.len()
            );
        }
        index
    }

    fn value_at_cursor(&self) -> Result<String, WheelError> {
        let index = self.picker.cursor();
        self.values
            .get(index)
            .cloned()
            .ok_or(WheelError::CursorOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    fn format_user_value(&self) -> Result<String, WheelError> {
        let value = self.user_value.as_ref().ok_or(WheelError::ValueNotSet)?;
        Ok(self.formatter.format(value))
    }
}

/// Item padding for a wheel under `state`'s layout.
pub fn horizontal_padding(state: &State) -> u32 {
    if state.has_only_two_wheels_visible() {
        return TWO_WHEEL_PADDING;
    }
    match state.mode {
        Mode::Date => DATE_MODE_PADDING,
        Mode::Time | Mode::DateTime => TIME_MODE_PADDING,
    }
}

fn build_formatter(kind: &dyn WheelKind, state: &State) -> Result<WheelFormatter, WheelError> {
    let format = DateFormat::new(&kind.format_pattern(state), state.locale())?;
    Ok(WheelFormatter::new(
        format,
        state.time_zone(),
        kind.era_offset(state),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_depends_on_layout_then_mode() {
        let mut state = State {
            mode: Mode::Date,
            ..State::default()
        };
        assert_eq!(horizontal_padding(&state), DATE_MODE_PADDING);

        state.mode = Mode::Time;
        assert_eq!(horizontal_padding(&state), TIME_MODE_PADDING);
        state.mode = Mode::DateTime;
        assert_eq!(horizontal_padding(&state), TIME_MODE_PADDING);

        state.only_two_wheels_visible = true;
        assert_eq!(horizontal_padding(&state), TWO_WHEEL_PADDING);
        state.mode = Mode::Date;
        assert_eq!(horizontal_padding(&state), TWO_WHEEL_PADDING);
    }
}
