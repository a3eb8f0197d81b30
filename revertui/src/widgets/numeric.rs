use crossterm::event::KeyCode;

/// Editing state for the slider's inline number field.
///
/// Keeps an edit buffer with a cursor separate from the committed value, so
/// a half-typed number never flows into the slider. The owner commits on
/// Enter and abandons on Esc by re-syncing from the committed value.
#[derive(Debug, Clone, Default)]
pub struct NumericInputState {
    buffer: String,
    cursor: usize,
}

impl NumericInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in cells (the buffer is ASCII by construction)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the buffer with the committed value's text representation.
    /// Cursor moves to the end.
    pub fn sync_from(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    /// Handle an editing key, returns true if the buffer changed
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                self.buffer.insert(self.cursor, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.buffer.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.buffer.len());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.buffer.len();
                false
            }
            _ => false,
        }
    }

    /// Parse the buffer as a number, if it currently holds one
    pub fn parse(&self) -> Option<f64> {
        self.buffer.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(state: &mut NumericInputState, s: &str) {
        for c in s.chars() {
            state.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_builds_buffer() {
        let mut state = NumericInputState::new();
        type_str(&mut state, "-12.5");
        assert_eq!(state.buffer(), "-12.5");
        assert_eq!(state.cursor(), 5);
        assert_eq!(state.parse(), Some(-12.5));
    }

    #[test]
    fn test_rejects_non_numeric_chars() {
        let mut state = NumericInputState::new();
        type_str(&mut state, "1a2b");
        assert_eq!(state.buffer(), "12");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut state = NumericInputState::new();
        type_str(&mut state, "123");
        state.handle_key(KeyCode::Backspace);
        assert_eq!(state.buffer(), "12");
        state.handle_key(KeyCode::Home);
        state.handle_key(KeyCode::Delete);
        assert_eq!(state.buffer(), "2");
    }

    #[test]
    fn test_cursor_motion_and_insert() {
        let mut state = NumericInputState::new();
        type_str(&mut state, "15");
        state.handle_key(KeyCode::Left);
        state.handle_key(KeyCode::Char('0'));
        assert_eq!(state.buffer(), "105");
        state.handle_key(KeyCode::End);
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_garbage_does_not_parse() {
        let mut state = NumericInputState::new();
        type_str(&mut state, "--..5");
        assert_eq!(state.parse(), None);
    }

    #[test]
    fn test_sync_from_resets_cursor() {
        let mut state = NumericInputState::new();
        type_str(&mut state, "999");
        state.sync_from("0.5");
        assert_eq!(state.buffer(), "0.5");
        assert_eq!(state.cursor(), 3);
    }
}
