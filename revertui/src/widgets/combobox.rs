use crossterm::event::KeyCode;
use ratatui::layout::Rect;

use crate::binding::{hit, Binding, BindingError};
use crate::events::ComboBoxEvent;
use crate::value::RevertibleValue;

/// Dropdown open/highlight state for the combobox
#[derive(Debug, Clone, Default)]
pub struct ComboBoxState {
    is_open: bool,
    highlight: usize,
}

impl ComboBoxState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted(&self) -> usize {
        self.highlight
    }

    fn open_at(&mut self, index: usize) {
        self.is_open = true;
        self.highlight = index;
    }

    fn close(&mut self) {
        self.is_open = false;
    }

    fn navigate(&mut self, key: KeyCode, option_count: usize) {
        match key {
            KeyCode::Up => {
                self.highlight = self.highlight.saturating_sub(1);
            }
            KeyCode::Down => {
                if option_count > 0 && self.highlight < option_count - 1 {
                    self.highlight += 1;
                }
            }
            _ => {}
        }
    }
}

/// Screen rects resolved by the renderer, for mouse hit-testing
#[derive(Debug, Clone)]
pub struct ComboBoxLayout {
    pub body: Rect,
    pub revert: Rect,
    /// One rect per visible dropdown row, in option order
    pub option_rows: Vec<Rect>,
}

/// A combobox with a revert-to-default affordance.
///
/// The value domain is the option index (`RevertibleValue<usize>`); the
/// options list is fixed at construction.
#[derive(Debug)]
pub struct ComboBoxField {
    label: String,
    options: Vec<String>,
    value: RevertibleValue<usize>,
    state: ComboBoxState,
    binding: Binding<ComboBoxLayout>,
}

impl ComboBoxField {
    /// Create a combobox. An out-of-range default index is clamped (and
    /// logged); an empty options list yields a disabled control.
    pub fn new(label: impl Into<String>, options: Vec<String>, default_index: usize) -> Self {
        let max = options.len().saturating_sub(1);
        let default_index = if default_index > max {
            log::warn!(
                "combobox default index {} out of range for {} options, clamping",
                default_index,
                options.len()
            );
            max
        } else {
            default_index
        };
        Self {
            label: label.into(),
            options,
            value: RevertibleValue::new(default_index),
            state: ComboBoxState::default(),
            binding: Binding::Unbuilt,
        }
    }

    /// Register a change callback on the underlying value
    pub fn on_change(mut self, f: impl FnMut(&usize) + 'static) -> Self {
        self.value = self.value.on_change(f);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Currently selected index
    pub fn selected(&self) -> usize {
        *self.value.current()
    }

    /// Currently selected label, None when the options list is empty
    pub fn selected_label(&self) -> Option<&str> {
        self.options.get(self.selected()).map(String::as_str)
    }

    pub fn is_dirty(&self) -> bool {
        self.value.is_dirty()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn state(&self) -> &ComboBoxState {
        &self.state
    }

    /// Select an index programmatically. Out-of-range indices are ignored.
    pub fn set_selected(&mut self, index: usize) -> Option<usize> {
        if index >= self.options.len() {
            log::debug!(
                "ignoring combobox selection {} (only {} options)",
                index,
                self.options.len()
            );
            return None;
        }
        self.value.set(index);
        Some(index)
    }

    /// Restore the default index; returns it if a restore happened
    pub fn restore_default(&mut self) -> Option<usize> {
        self.state.close();
        if self.value.restore_default() {
            Some(self.selected())
        } else {
            None
        }
    }

    /// Handle an event, returning the newly committed index if one was
    /// selected.
    pub fn handle_event(&mut self, event: ComboBoxEvent) -> Option<usize> {
        if self.options.is_empty() {
            return None;
        }
        match event {
            ComboBoxEvent::Navigate(key) => {
                if !self.state.is_open() {
                    match key {
                        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                            self.state.open_at(self.selected());
                        }
                        _ => {}
                    }
                    None
                } else {
                    match key {
                        KeyCode::Up | KeyCode::Down => {
                            self.state.navigate(key, self.options.len());
                            None
                        }
                        KeyCode::Enter => {
                            let index = self.state.highlighted();
                            self.state.close();
                            self.set_selected(index)
                        }
                        KeyCode::Esc => {
                            self.state.close();
                            None
                        }
                        _ => None,
                    }
                }
            }
            ComboBoxEvent::Select(index) => {
                self.state.close();
                self.set_selected(index)
            }
            ComboBoxEvent::Blur => {
                self.state.close();
                None
            }
            ComboBoxEvent::Revert => {
                self.restore_default();
                None
            }
        }
    }

    /// Store the renderer-resolved layout
    pub fn bind(&mut self, layout: ComboBoxLayout) {
        self.binding.bind(layout);
    }

    /// Translate a mouse press into an event. Fails fast if the widget has
    /// never been rendered.
    pub fn event_at(&self, column: u16, row: u16) -> Result<Option<ComboBoxEvent>, BindingError> {
        let layout = self.binding.get()?;
        if hit(layout.revert, column, row) {
            return Ok(Some(ComboBoxEvent::Revert));
        }
        if self.state.is_open() {
            for (i, rect) in layout.option_rows.iter().enumerate() {
                if hit(*rect, column, row) {
                    return Ok(Some(ComboBoxEvent::Select(i)));
                }
            }
        }
        if hit(layout.body, column, row) {
            return Ok(Some(ComboBoxEvent::Navigate(KeyCode::Enter)));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_combo() -> ComboBoxField {
        ComboBoxField::new(
            "Quality",
            vec!["Low".into(), "Medium".into(), "High".into()],
            0,
        )
    }

    #[test]
    fn test_select_marks_dirty_and_revert_restores() {
        let mut combo = make_combo();
        assert_eq!(combo.handle_event(ComboBoxEvent::Select(2)), Some(2));
        assert!(combo.is_dirty());
        assert_eq!(combo.restore_default(), Some(0));
        assert_eq!(combo.selected(), 0);
        assert!(!combo.is_dirty());
    }

    #[test]
    fn test_selecting_default_stays_clean() {
        let mut combo = make_combo();
        combo.handle_event(ComboBoxEvent::Select(0));
        assert!(!combo.is_dirty());
    }

    #[test]
    fn test_keyboard_open_navigate_select() {
        let mut combo = make_combo();
        combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Enter));
        assert!(combo.is_open());
        combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Down));
        combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Down));
        let committed = combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Enter));
        assert_eq!(committed, Some(2));
        assert!(!combo.is_open());
        assert_eq!(combo.selected_label(), Some("High"));
    }

    #[test]
    fn test_highlight_clamps_at_ends() {
        let mut combo = make_combo();
        combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Enter));
        combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Up));
        assert_eq!(combo.state().highlighted(), 0);
        for _ in 0..5 {
            combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Down));
        }
        assert_eq!(combo.state().highlighted(), 2);
    }

    #[test]
    fn test_esc_and_blur_close_without_committing() {
        let mut combo = make_combo();
        combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Enter));
        combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Down));
        combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Esc));
        assert!(!combo.is_open());
        assert_eq!(combo.selected(), 0);

        combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Enter));
        combo.handle_event(ComboBoxEvent::Blur);
        assert!(!combo.is_open());
    }

    #[test]
    fn test_out_of_range_select_ignored() {
        let mut combo = make_combo();
        assert_eq!(combo.handle_event(ComboBoxEvent::Select(99)), None);
        assert!(!combo.is_dirty());
    }

    #[test]
    fn test_empty_options_ignores_everything() {
        let mut combo = ComboBoxField::new("Empty", vec![], 0);
        assert_eq!(combo.selected_label(), None);
        assert_eq!(combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Enter)), None);
        assert!(!combo.is_open());
    }

    #[test]
    fn test_mouse_before_render_fails_fast() {
        let combo = make_combo();
        assert_eq!(combo.event_at(0, 0), Err(BindingError::Unbuilt));
    }

    #[test]
    fn test_mouse_hits_after_bind() {
        let mut combo = make_combo();
        combo.bind(ComboBoxLayout {
            body: Rect::new(0, 0, 20, 3),
            revert: Rect::new(21, 0, 3, 3),
            option_rows: vec![
                Rect::new(0, 3, 20, 1),
                Rect::new(0, 4, 20, 1),
                Rect::new(0, 5, 20, 1),
            ],
        });
        assert_eq!(
            combo.event_at(22, 1),
            Ok(Some(ComboBoxEvent::Revert))
        );
        // Dropdown rows only hit while open
        assert_eq!(combo.event_at(5, 4), Ok(None));
        combo.handle_event(ComboBoxEvent::Navigate(KeyCode::Enter));
        assert_eq!(combo.event_at(5, 4), Ok(Some(ComboBoxEvent::Select(1))));
    }
}
