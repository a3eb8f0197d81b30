use crossterm::event::KeyCode;
use ratatui::layout::Rect;

use crate::binding::{hit, Binding, BindingError};
use crate::events::StringFieldEvent;
use crate::value::RevertibleValue;

/// Screen rects resolved by the renderer, for mouse hit-testing
#[derive(Debug, Clone)]
pub struct StringFieldLayout {
    pub field: Rect,
    pub revert: Rect,
}

/// A labelled free-text input with a revert-to-default affordance.
///
/// Unlike the slider's numeric field there is no separate edit buffer:
/// every keystroke commits straight into the `RevertibleValue<String>`, so
/// the dirty flag tracks the text live. The cursor is a char offset, so
/// non-ASCII input edits correctly.
#[derive(Debug)]
pub struct StringField {
    label: String,
    value: RevertibleValue<String>,
    cursor: usize,
    binding: Binding<StringFieldLayout>,
}

impl StringField {
    pub fn new(label: impl Into<String>, default_value: impl Into<String>) -> Self {
        let default_value = default_value.into();
        let cursor = default_value.chars().count();
        Self {
            label: label.into(),
            value: RevertibleValue::new(default_value),
            cursor,
            binding: Binding::Unbuilt,
        }
    }

    /// Register a change callback on the underlying value
    pub fn on_change(mut self, f: impl FnMut(&String) + 'static) -> Self {
        self.value = self.value.on_change(f);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current text
    pub fn text(&self) -> &str {
        self.value.current()
    }

    /// Cursor position as a char offset into the text
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_dirty(&self) -> bool {
        self.value.is_dirty()
    }

    /// Replace the text; cursor moves to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.cursor = text.chars().count();
        self.value.set(text);
    }

    /// Restore the default text; returns it if a restore happened
    pub fn restore_default(&mut self) -> Option<String> {
        if self.value.restore_default() {
            self.cursor = self.text().chars().count();
            Some(self.text().to_string())
        } else {
            None
        }
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text()
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text().len())
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor);
                let mut text = self.text().to_string();
                text.insert(at, c);
                self.cursor += 1;
                self.value.set(text);
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    let mut text = self.text().to_string();
                    text.remove(at);
                    self.value.set(text);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.text().chars().count() {
                    let at = self.byte_offset(self.cursor);
                    let mut text = self.text().to_string();
                    text.remove(at);
                    self.value.set(text);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.text().chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text().chars().count(),
            _ => {}
        }
    }

    /// Handle an event, returning the text on `Submit`
    pub fn handle_event(&mut self, event: StringFieldEvent) -> Option<String> {
        match event {
            StringFieldEvent::Input(key) => {
                self.handle_key(key);
                None
            }
            StringFieldEvent::Submit => Some(self.text().to_string()),
            StringFieldEvent::Revert => {
                self.restore_default();
                None
            }
        }
    }

    /// Store the renderer-resolved layout
    pub fn bind(&mut self, layout: StringFieldLayout) {
        self.binding.bind(layout);
    }

    /// Translate a mouse press into an event. Fails fast if the widget has
    /// never been rendered.
    pub fn event_at(&self, column: u16, row: u16) -> Result<Option<StringFieldEvent>, BindingError> {
        let layout = self.binding.get()?;
        if hit(layout.revert, column, row) {
            return Ok(Some(StringFieldEvent::Revert));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(field: &mut StringField, s: &str) {
        for c in s.chars() {
            field.handle_event(StringFieldEvent::Input(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_commits_live() {
        let mut field = StringField::new("Glyph text", "Q");
        type_str(&mut field, "ed");
        assert_eq!(field.text(), "Qed");
        assert!(field.is_dirty());
    }

    #[test]
    fn test_retyping_default_goes_clean() {
        let mut field = StringField::new("Glyph text", "Q");
        field.handle_event(StringFieldEvent::Input(KeyCode::Backspace));
        assert!(field.is_dirty());
        type_str(&mut field, "Q");
        assert!(!field.is_dirty());
    }

    #[test]
    fn test_revert_restores_text_and_cursor() {
        let mut field = StringField::new("Glyph text", "Q");
        type_str(&mut field, "uux");
        assert_eq!(field.restore_default(), Some("Q".to_string()));
        assert_eq!(field.text(), "Q");
        assert_eq!(field.cursor(), 1);
        assert!(!field.is_dirty());
        // Second revert is a no-op
        assert_eq!(field.restore_default(), None);
    }

    #[test]
    fn test_submit_returns_current_text() {
        let mut field = StringField::new("Glyph text", "Q");
        type_str(&mut field, "!");
        assert_eq!(
            field.handle_event(StringFieldEvent::Submit),
            Some("Q!".to_string())
        );
    }

    #[test]
    fn test_cursor_motion_and_mid_insert() {
        let mut field = StringField::new("Glyph text", "ab");
        field.handle_event(StringFieldEvent::Input(KeyCode::Left));
        type_str(&mut field, "x");
        assert_eq!(field.text(), "axb");
        field.handle_event(StringFieldEvent::Input(KeyCode::Home));
        field.handle_event(StringFieldEvent::Input(KeyCode::Delete));
        assert_eq!(field.text(), "xb");
        field.handle_event(StringFieldEvent::Input(KeyCode::End));
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = StringField::new("Glyph text", "a");
        field.handle_event(StringFieldEvent::Input(KeyCode::Home));
        field.handle_event(StringFieldEvent::Input(KeyCode::Backspace));
        assert_eq!(field.text(), "a");
    }

    #[test]
    fn test_non_ascii_editing() {
        let mut field = StringField::new("Glyph text", "");
        type_str(&mut field, "héの");
        assert_eq!(field.text(), "héの");
        assert_eq!(field.cursor(), 3);
        field.handle_event(StringFieldEvent::Input(KeyCode::Left));
        field.handle_event(StringFieldEvent::Input(KeyCode::Backspace));
        assert_eq!(field.text(), "hの");
    }

    #[test]
    fn test_mouse_routing() {
        let mut field = StringField::new("Glyph text", "Q");
        assert_eq!(field.event_at(0, 0), Err(BindingError::Unbuilt));
        field.bind(StringFieldLayout {
            field: Rect::new(0, 0, 20, 3),
            revert: Rect::new(21, 0, 3, 3),
        });
        assert_eq!(field.event_at(22, 1), Ok(Some(StringFieldEvent::Revert)));
        assert_eq!(field.event_at(5, 1), Ok(None));
    }
}
