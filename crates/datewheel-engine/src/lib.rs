//! Value/index synchronization for a single date or time picker wheel.
//!
//! A [`Wheel`] binds a [`Picker`] control (a scrollable list with a numeric cursor) to one calendar
//! field. It renders the field's selectable values with a locale-aware pattern, maps dates to
//! cursor positions and back, and answers value queries for hidden wheels from the last value it
//! was given. Year wheels can display offset-calendar years (see [`era`]).
//!
//! Everything here is single-threaded and synchronous: cursor moves are requests to the picker and
//! are never awaited.

pub mod era;
pub mod kinds;

mod error;
mod kind;
mod picker;
mod state;
mod wheel;

pub use crate::era::{EraOffset, MINGUO_YEAR_OFFSET};
pub use crate::error::WheelError;
pub use crate::kind::{WheelFormatter, WheelKind};
pub use crate::picker::{MemoryPicker, Picker, PickerOp, TextAlign};
pub use crate::state::{CalendarDisplay, Mode, State, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};
pub use crate::wheel::{
    horizontal_padding, Wheel, DATE_MODE_PADDING, TIME_MODE_PADDING, TWO_WHEEL_PADDING,
};
