use crossterm::event::KeyCode;
use ratatui::layout::Rect;

use crate::binding::{hit, Binding, BindingError};
use crate::events::ButtonGroupEvent;
use crate::value::RevertibleValue;

/// Committed change reported by the button group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupChange {
    /// An option was chosen (exclusive: all siblings deselect)
    Chosen(String),
    /// The selection was cleared back to "none selected"
    Cleared,
}

/// Screen rects resolved by the renderer, for mouse hit-testing
#[derive(Debug, Clone)]
pub struct ButtonGroupLayout {
    /// One rect per option button, in option order
    pub buttons: Vec<Rect>,
    pub revert: Rect,
}

/// An exclusive button group (radio semantics) with a revert affordance.
///
/// Unlike the other controls, the default here is "nothing selected":
/// restoring clears the selection entirely rather than picking an option.
/// Options are addressed by index into a fixed list; the selection holds the
/// chosen label.
#[derive(Debug)]
pub struct ButtonGroupField {
    label: String,
    options: Vec<String>,
    selection: RevertibleValue<Option<String>>,
    /// Option the keyboard focus sits on
    focus: usize,
    binding: Binding<ButtonGroupLayout>,
}

impl ButtonGroupField {
    pub fn new(label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            label: label.into(),
            options,
            selection: RevertibleValue::new(None),
            focus: 0,
            binding: Binding::Unbuilt,
        }
    }

    /// Register a change callback on the underlying selection
    pub fn on_change(mut self, f: impl FnMut(&Option<String>) + 'static) -> Self {
        self.selection = self.selection.on_change(f);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Currently selected label, None when nothing is selected
    pub fn selected(&self) -> Option<&str> {
        self.selection.current().as_deref()
    }

    /// Index of the selected option, None when nothing is selected
    pub fn selected_index(&self) -> Option<usize> {
        let current = self.selected()?;
        self.options.iter().position(|opt| opt == current)
    }

    /// Option the keyboard focus sits on
    pub fn focused(&self) -> usize {
        self.focus
    }

    pub fn is_dirty(&self) -> bool {
        self.selection.is_dirty()
    }

    /// Choose an option by index. Out-of-range indices are ignored.
    pub fn choose(&mut self, index: usize) -> Option<GroupChange> {
        let Some(option) = self.options.get(index) else {
            log::debug!(
                "ignoring button group choice {} (only {} options)",
                index,
                self.options.len()
            );
            return None;
        };
        let option = option.clone();
        self.focus = index;
        self.selection.set(Some(option.clone()));
        Some(GroupChange::Chosen(option))
    }

    /// Restore the default: clears the selection entirely
    pub fn restore_default(&mut self) -> Option<GroupChange> {
        if self.selection.restore_default() {
            Some(GroupChange::Cleared)
        } else {
            None
        }
    }

    /// Handle an event, returning the committed change if one landed
    pub fn handle_event(&mut self, event: ButtonGroupEvent) -> Option<GroupChange> {
        if self.options.is_empty() {
            return None;
        }
        match event {
            ButtonGroupEvent::Navigate(key) => match key {
                KeyCode::Left => {
                    self.focus = self.focus.saturating_sub(1);
                    None
                }
                KeyCode::Right => {
                    self.focus = (self.focus + 1).min(self.options.len() - 1);
                    None
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.choose(self.focus),
                _ => None,
            },
            ButtonGroupEvent::Choose(index) => self.choose(index),
            ButtonGroupEvent::Revert => self.restore_default(),
        }
    }

    /// Store the renderer-resolved layout
    pub fn bind(&mut self, layout: ButtonGroupLayout) {
        self.binding.bind(layout);
    }

    /// Translate a mouse press into an event. Fails fast if the widget has
    /// never been rendered.
    pub fn event_at(
        &self,
        column: u16,
        row: u16,
    ) -> Result<Option<ButtonGroupEvent>, BindingError> {
        let layout = self.binding.get()?;
        if hit(layout.revert, column, row) {
            return Ok(Some(ButtonGroupEvent::Revert));
        }
        for (i, rect) in layout.buttons.iter().enumerate() {
            if hit(*rect, column, row) {
                return Ok(Some(ButtonGroupEvent::Choose(i)));
            }
        }
        Ok(None)
    }
}
