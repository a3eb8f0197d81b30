use crossterm::event::KeyCode;
use ratatui::layout::Rect;

use crate::binding::{hit, Binding, BindingError};
use crate::events::SliderEvent;
use crate::value::RevertibleValue;
use crate::widgets::numeric::NumericInputState;

/// Numeric domain of a slider: integer values snap, floats do not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumType {
    Int,
    Float,
}

/// Screen rects resolved by the renderer, for mouse hit-testing
#[derive(Debug, Clone)]
pub struct SliderLayout {
    pub track: Rect,
    pub field: Rect,
    pub revert: Rect,
}

/// A slider with an inline numeric field and a revert-to-default affordance.
///
/// The committed value lives in a `RevertibleValue<f64>`; `Int` mode snaps
/// every commit to a whole number. The inline field edits a buffer that only
/// reaches the value on Enter, so half-typed numbers never commit.
#[derive(Debug)]
pub struct SliderField {
    label: String,
    min: f64,
    max: f64,
    num_type: NumType,
    display_range: bool,
    value: RevertibleValue<f64>,
    input: NumericInputState,
    binding: Binding<SliderLayout>,
}

impl SliderField {
    pub fn new(
        label: impl Into<String>,
        min: f64,
        max: f64,
        default_value: f64,
        num_type: NumType,
    ) -> Self {
        let default_value = Self::conform(default_value, min, max, num_type);
        let mut field = Self {
            label: label.into(),
            min,
            max,
            num_type,
            display_range: false,
            value: RevertibleValue::new(default_value),
            input: NumericInputState::new(),
            binding: Binding::Unbuilt,
        };
        field.sync_input();
        field
    }

    /// Show the tiny min/0/max range labels under the track
    pub fn with_display_range(mut self, display_range: bool) -> Self {
        self.display_range = display_range;
        self
    }

    /// Register a change callback on the underlying value
    pub fn on_change(mut self, f: impl FnMut(&f64) + 'static) -> Self {
        self.value = self.value.on_change(f);
        self
    }

    fn conform(v: f64, min: f64, max: f64, num_type: NumType) -> f64 {
        let v = v.clamp(min, max);
        match num_type {
            NumType::Int => v.round(),
            NumType::Float => v,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn num_type(&self) -> NumType {
        self.num_type
    }

    pub fn display_range(&self) -> bool {
        self.display_range
    }

    pub fn current(&self) -> f64 {
        *self.value.current()
    }

    pub fn is_dirty(&self) -> bool {
        self.value.is_dirty()
    }

    /// The inline field's editing state (renderer shows buffer + cursor)
    pub fn input(&self) -> &NumericInputState {
        &self.input
    }

    /// Current value as field text
    pub fn value_text(&self) -> String {
        match self.num_type {
            NumType::Int => format!("{}", self.current() as i64),
            NumType::Float => format!("{}", self.current()),
        }
    }

    /// Position of the current value in [0, 1] along the track
    pub fn normalized(&self) -> f64 {
        if (self.max - self.min).abs() < f64::EPSILON {
            0.0
        } else {
            ((self.current() - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        }
    }

    /// Keyboard step size: whole numbers for Int, 1% of the range for Float
    pub fn step(&self) -> f64 {
        match self.num_type {
            NumType::Int => 1.0,
            NumType::Float => (self.max - self.min) / 100.0,
        }
    }

    fn sync_input(&mut self) {
        let text = self.value_text();
        self.input.sync_from(&text);
    }

    /// Clamp, snap, and commit a value. Returns it when it differs from the
    /// current one.
    fn commit(&mut self, v: f64) -> Option<f64> {
        let v = Self::conform(v, self.min, self.max, self.num_type);
        if v == self.current() {
            self.sync_input();
            return None;
        }
        self.value.set(v);
        self.sync_input();
        Some(v)
    }

    /// Restore the default value; returns it if a restore happened
    pub fn restore_default(&mut self) -> Option<f64> {
        if self.value.restore_default() {
            self.sync_input();
            Some(self.current())
        } else {
            None
        }
    }

    /// Handle an event, returning the newly committed value if one landed
    pub fn handle_event(&mut self, event: SliderEvent) -> Option<f64> {
        match event {
            SliderEvent::Navigate(key) => match key {
                KeyCode::Left => self.commit(self.current() - self.step()),
                KeyCode::Right => self.commit(self.current() + self.step()),
                KeyCode::Home => self.commit(self.min),
                KeyCode::End => self.commit(self.max),
                _ => None,
            },
            SliderEvent::Input(key) => match key {
                KeyCode::Enter => match self.input.parse() {
                    Some(v) => self.commit(v),
                    None => {
                        // Unparseable buffer: abandon the edit
                        self.sync_input();
                        None
                    }
                },
                KeyCode::Esc => {
                    self.sync_input();
                    None
                }
                other => {
                    self.input.handle_key(other);
                    None
                }
            },
            SliderEvent::SetValue(v) => self.commit(v),
            SliderEvent::Revert => self.restore_default(),
        }
    }

    /// Store the renderer-resolved layout
    pub fn bind(&mut self, layout: SliderLayout) {
        self.binding.bind(layout);
    }

    /// Translate a mouse press into an event. A click on the track maps the
    /// column to a proportional value. Fails fast if the widget has never
    /// been rendered.
    pub fn event_at(&self, column: u16, row: u16) -> Result<Option<SliderEvent>, BindingError> {
        let layout = self.binding.get()?;
        if hit(layout.revert, column, row) {
            return Ok(Some(SliderEvent::Revert));
        }
        if hit(layout.track, column, row) && layout.track.width > 1 {
            let t = f64::from(column - layout.track.x) / f64::from(layout.track.width - 1);
            let v = self.min + t.clamp(0.0, 1.0) * (self.max - self.min);
            return Ok(Some(SliderEvent::SetValue(v)));
        }
        Ok(None)
    }
}

/// Percentage offsets for the zero label of a range display.
///
/// Only applies when the range spans zero. The offsets position the "0"
/// label proportionally between the end labels; 25% is subtracted from each
/// side to account for the end labels' own widths.
pub fn range_label_offsets(min: f64, max: f64) -> Option<(f64, f64)> {
    if min < 0.0 && max > 0.0 {
        let total_range = max - min;
        let left = (100.0 * min.abs() / total_range - 25.0).max(0.0);
        let right = (100.0 * max / total_range - 25.0).max(0.0);
        Some((left, right))
    } else {
        None
    }
}
