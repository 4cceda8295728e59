use serde::{Deserialize, Serialize};

/// Horizontal alignment of the strings rendered inside a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// The scrollable numeric control a [`crate::Wheel`] drives.
///
/// Implementations wrap whatever widget the host UI uses. The cursor is an index into the list
/// passed to [`Picker::set_displayed_values`], bounded by [`Picker::set_range`].
pub trait Picker {
    fn cursor(&self) -> usize;
    /// Move the cursor without animating.
    fn set_cursor(&mut self, index: usize);
    /// Request an animated scroll to `index`. Fire-and-forget: a later request supersedes it.
    fn smooth_scroll_to(&mut self, index: usize);
    fn set_range(&mut self, min: usize, max: usize);
    fn set_displayed_values(&mut self, values: &[String]);
    fn set_visible(&mut self, visible: bool);
    fn set_wrap_selector_wheel(&mut self, wrap: bool);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_horizontal_padding(&mut self, padding: u32);
}

/// One call made against a [`MemoryPicker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOp {
    SetCursor(usize),
    SmoothScrollTo(usize),
    SetRange { min: usize, max: usize },
    SetDisplayedValues(Vec<String>),
    SetVisible(bool),
    SetWrapSelectorWheel(bool),
    SetTextAlign(TextAlign),
    SetHorizontalPadding(u32),
}

/// Headless [`Picker`] that keeps its state in memory and records every call.
///
/// Cursor writes are clamped into the current range, matching the usual number-picker widget
/// behaviour (shrinking the range to `0..=0` also resets the cursor to 0). Smooth scrolls land
/// immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryPicker {
    cursor: usize,
    min: usize,
    max: usize,
    displayed: Vec<String>,
    visible: bool,
    wrap_selector_wheel: bool,
    text_align: TextAlign,
    horizontal_padding: u32,
    ops: Vec<PickerOp>,
}

impl Default for MemoryPicker {
    fn default() -> Self {
        Self {
            cursor: 0,
            min: 0,
            max: 0,
            displayed: Vec::new(),
            visible: true,
            wrap_selector_wheel: false,
            text_align: TextAlign::Center,
            horizontal_padding: 0,
            ops: Vec::new(),
        }
    }
}

impl MemoryPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(&self) -> (usize, usize) {
        (self.min, self.max)
    }

    pub fn displayed_values(&self) -> &[String] {
        &self.displayed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn wraps(&self) -> bool {
        self.wrap_selector_wheel
    }

    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    pub fn horizontal_padding(&self) -> u32 {
        self.horizontal_padding
    }

    pub fn ops(&self) -> &[PickerOp] {
        &self.ops
    }

    /// Drain the recorded calls, e.g. after setup so a test only sees what follows.
    pub fn take_ops(&mut self) -> Vec<PickerOp> {
        std::mem::take(&mut self.ops)
    }

    fn clamp(&self, index: usize) -> usize {
        index.clamp(self.min, self.max.max(self.min))
    }
}

impl Picker for MemoryPicker {
    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, index: usize) {
        self.ops.push(PickerOp::SetCursor(index));
        self.cursor = self.clamp(index);
    }

    fn smooth_scroll_to(&mut self, index: usize) {
        self.ops.push(PickerOp::SmoothScrollTo(index));
        self.cursor = self.clamp(index);
    }

    fn set_range(&mut self, min: usize, max: usize) {
        self.ops.push(PickerOp::SetRange { min, max });
        self.min = min;
        self.max = max;
        self.cursor = self.clamp(self.cursor);
    }

    fn set_displayed_values(&mut self, values: &[String]) {
        self.ops.push(PickerOp::SetDisplayedValues(values.to_vec()));
        self.displayed = values.to_vec();
    }

    fn set_visible(&mut self, visible: bool) {
        self.ops.push(PickerOp::SetVisible(visible));
        self.visible = visible;
    }

    fn set_wrap_selector_wheel(&mut self, wrap: bool) {
        self.ops.push(PickerOp::SetWrapSelectorWheel(wrap));
        self.wrap_selector_wheel = wrap;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ops.push(PickerOp::SetTextAlign(align));
        self.text_align = align;
    }

    fn set_horizontal_padding(&mut self, padding: u32) {
        self.ops.push(PickerOp::SetHorizontalPadding(padding));
        self.horizontal_padding = padding;
    }
}
