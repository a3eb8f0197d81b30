use ratatui::layout::{Position, Rect};

/// Error for interactions that need a screen binding before one exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The widget has not been rendered yet, so no screen rects exist
    Unbuilt,
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingError::Unbuilt => {
                write!(f, "widget has no screen binding yet (not rendered)")
            }
        }
    }
}

impl std::error::Error for BindingError {}

/// Explicit two-state lifecycle for a widget's screen binding.
///
/// A widget starts `Unbuilt`; the renderer stores the resolved sub-rects on
/// every draw, moving it to `Built`. Mouse hit-testing before the first
/// render is a programmer error and fails fast with [`BindingError::Unbuilt`]
/// rather than being silently tolerated.
#[derive(Debug, Clone, Default)]
pub enum Binding<L> {
    #[default]
    Unbuilt,
    Built(L),
}

impl<L> Binding<L> {
    /// Store the layout resolved by the renderer
    pub fn bind(&mut self, layout: L) {
        *self = Binding::Built(layout);
    }

    /// Access the layout, failing fast if the widget was never rendered
    pub fn get(&self) -> Result<&L, BindingError> {
        match self {
            Binding::Unbuilt => Err(BindingError::Unbuilt),
            Binding::Built(layout) => Ok(layout),
        }
    }

    pub fn is_built(&self) -> bool {
        matches!(self, Binding::Built(_))
    }
}

/// Hit-test helper shared by the widgets' mouse handlers
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbuilt_fails_fast() {
        let binding: Binding<Rect> = Binding::Unbuilt;
        assert_eq!(binding.get(), Err(BindingError::Unbuilt));
        assert!(!binding.is_built());
    }

    #[test]
    fn test_bind_then_get() {
        let mut binding = Binding::Unbuilt;
        binding.bind(Rect::new(0, 0, 10, 1));
        assert!(binding.is_built());
        assert_eq!(binding.get().unwrap().width, 10);
    }

    #[test]
    fn test_hit() {
        let rect = Rect::new(2, 1, 4, 2);
        assert!(hit(rect, 2, 1));
        assert!(hit(rect, 5, 2));
        assert!(!hit(rect, 6, 1));
        assert!(!hit(rect, 2, 3));
    }
}
