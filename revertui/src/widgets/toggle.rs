use ratatui::layout::Rect;

use crate::binding::{hit, Binding, BindingError};
use crate::events::ToggleEvent;
use crate::value::RevertibleValue;

/// Screen rects resolved by the renderer, for mouse hit-testing
#[derive(Debug, Clone)]
pub struct ToggleLayout {
    pub switch: Rect,
    pub revert: Rect,
}

/// A boolean switch with a revert-to-default affordance
#[derive(Debug)]
pub struct ToggleField {
    label: String,
    value: RevertibleValue<bool>,
    binding: Binding<ToggleLayout>,
}

impl ToggleField {
    pub fn new(label: impl Into<String>, default_value: bool) -> Self {
        Self {
            label: label.into(),
            value: RevertibleValue::new(default_value),
            binding: Binding::Unbuilt,
        }
    }

    /// Register a change callback on the underlying value
    pub fn on_change(mut self, f: impl FnMut(&bool) + 'static) -> Self {
        self.value = self.value.on_change(f);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_checked(&self) -> bool {
        *self.value.current()
    }

    pub fn is_dirty(&self) -> bool {
        self.value.is_dirty()
    }

    /// Restore the default state; returns it if a restore happened
    pub fn restore_default(&mut self) -> Option<bool> {
        if self.value.restore_default() {
            Some(self.is_checked())
        } else {
            None
        }
    }

    /// Handle an event, returning the new state when it changed
    pub fn handle_event(&mut self, event: ToggleEvent) -> Option<bool> {
        match event {
            ToggleEvent::Toggle => {
                let flipped = !self.is_checked();
                self.value.set(flipped);
                Some(flipped)
            }
            ToggleEvent::Set(checked) => {
                if checked == self.is_checked() {
                    None
                } else {
                    self.value.set(checked);
                    Some(checked)
                }
            }
            ToggleEvent::Revert => self.restore_default(),
        }
    }

    /// Store the renderer-resolved layout
    pub fn bind(&mut self, layout: ToggleLayout) {
        self.binding.bind(layout);
    }

    /// Translate a mouse press into an event. Fails fast if the widget has
    /// never been rendered.
    pub fn event_at(&self, column: u16, row: u16) -> Result<Option<ToggleEvent>, BindingError> {
        let layout = self.binding.get()?;
        if hit(layout.revert, column, row) {
            return Ok(Some(ToggleEvent::Revert));
        }
        if hit(layout.switch, column, row) {
            return Ok(Some(ToggleEvent::Toggle));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_scenario() {
        // default=true; set(false) -> dirty; set(true) -> clean
        let mut toggle = ToggleField::new("Shadows", true);
        assert_eq!(toggle.handle_event(ToggleEvent::Set(false)), Some(false));
        assert!(toggle.is_dirty());
        assert_eq!(toggle.handle_event(ToggleEvent::Set(true)), Some(true));
        assert!(!toggle.is_dirty());
    }

    #[test]
    fn test_flip_twice_returns_clean() {
        let mut toggle = ToggleField::new("Shadows", true);
        toggle.handle_event(ToggleEvent::Toggle);
        assert!(toggle.is_dirty());
        toggle.handle_event(ToggleEvent::Toggle);
        assert!(!toggle.is_dirty());
        assert!(toggle.is_checked());
    }

    #[test]
    fn test_set_same_value_reports_nothing() {
        let mut toggle = ToggleField::new("Shadows", true);
        assert_eq!(toggle.handle_event(ToggleEvent::Set(true)), None);
        assert!(!toggle.is_dirty());
    }

    #[test]
    fn test_revert() {
        let mut toggle = ToggleField::new("Shadows", false);
        toggle.handle_event(ToggleEvent::Toggle);
        assert_eq!(toggle.handle_event(ToggleEvent::Revert), Some(false));
        assert!(!toggle.is_dirty());
        // Second revert is a no-op
        assert_eq!(toggle.handle_event(ToggleEvent::Revert), None);
    }

    #[test]
    fn test_mouse_routing() {
        let mut toggle = ToggleField::new("Shadows", true);
        assert_eq!(toggle.event_at(0, 0), Err(BindingError::Unbuilt));
        toggle.bind(ToggleLayout {
            switch: Rect::new(0, 0, 6, 3),
            revert: Rect::new(7, 0, 3, 3),
        });
        assert_eq!(toggle.event_at(2, 1), Ok(Some(ToggleEvent::Toggle)));
        assert_eq!(toggle.event_at(8, 1), Ok(Some(ToggleEvent::Revert)));
        assert_eq!(toggle.event_at(40, 1), Ok(None));
    }
}
