use crossterm::event::KeyCode;

/// Events for the combobox widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboBoxEvent {
    /// Dropdown navigation key (Up/Down/Enter/Esc/Space)
    Navigate(KeyCode),
    /// Select an option by index directly (e.g. mouse click on a row)
    Select(usize),
    /// Focus left the widget; closes the dropdown
    Blur,
    /// Restore the default index
    Revert,
}

/// Events for the boolean toggle widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleEvent {
    /// Flip the current state
    Toggle,
    /// Assign a concrete state
    Set(bool),
    /// Restore the default state
    Revert,
}

/// Events for the slider + numeric field widget
#[derive(Debug, Clone, PartialEq)]
pub enum SliderEvent {
    /// Step key on the slider track (Left/Right/Home/End)
    Navigate(KeyCode),
    /// Key routed to the inline numeric field (chars, cursor motion,
    /// Enter commits, Esc abandons the edit)
    Input(KeyCode),
    /// Assign a value directly (e.g. mouse click on the track)
    SetValue(f64),
    /// Restore the default value
    Revert,
}

/// Events for the exclusive button group widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonGroupEvent {
    /// Move the focused option (Left/Right), or choose it (Enter/Space)
    Navigate(KeyCode),
    /// Choose an option by index directly (e.g. mouse click on a button)
    Choose(usize),
    /// Restore the default: clears the selection entirely
    Revert,
}

/// Events for the free-text field widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringFieldEvent {
    /// Key routed to the text field (chars, cursor motion, Backspace/Delete)
    Input(KeyCode),
    /// Report the current text to the host
    Submit,
    /// Restore the default text
    Revert,
}

/// Events for the read-only path widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFieldEvent {
    /// Reveal the path in the platform file manager
    Open,
}
