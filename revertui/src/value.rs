/// The revert state machine every control in this crate wraps.
///
/// Binds a live value to a default fixed at construction, tracks whether the
/// two differ (dirty), and supports one-step restoration. The dirty flag is
/// recomputed on every mutation path so it can never desynchronize from
/// `current != default`.
pub struct RevertibleValue<T: PartialEq> {
    current: T,
    default: T,
    dirty: bool,
    on_change: Option<Box<dyn FnMut(&T)>>,
}

impl<T: PartialEq + Clone> RevertibleValue<T> {
    /// Create a value in the Clean state (`current == default`).
    pub fn new(default: T) -> Self {
        Self {
            current: default.clone(),
            default,
            dirty: false,
            on_change: None,
        }
    }

    /// Register a callback fired with the new value on every `set` and on
    /// each effective `restore_default`.
    pub fn on_change(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Get the live value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get the construction-time default
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Whether the live value differs from the default. Drives the revert
    /// affordance's enabled/disabled rendering.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the live value and recompute the dirty flag.
    /// Accepts any value of T; there are no error conditions.
    pub fn set(&mut self, value: T) {
        self.current = value;
        self.dirty = self.current != self.default;
        if let Some(f) = &mut self.on_change {
            f(&self.current);
        }
    }

    /// Restore the default value.
    ///
    /// When dirty, sets `current := default`, clears the flag, and fires the
    /// change callback. When already clean this is a documented no-op, so
    /// callers may invoke it unconditionally. Returns true if a restore
    /// actually happened.
    pub fn restore_default(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.current = self.default.clone();
        self.dirty = false;
        if let Some(f) = &mut self.on_change {
            f(&self.current);
        }
        true
    }
}

impl<T: PartialEq + std::fmt::Debug> std::fmt::Debug for RevertibleValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevertibleValue")
            .field("current", &self.current)
            .field("default", &self.default)
            .field("dirty", &self.dirty)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_starts_clean() {
        let v = RevertibleValue::new(0usize);
        assert!(!v.is_dirty());
        assert_eq!(*v.current(), 0);
        assert_eq!(*v.default_value(), 0);
    }

    #[test]
    fn test_dirty_tracks_inequality() {
        let mut v = RevertibleValue::new(0usize);
        v.set(2);
        assert!(v.is_dirty());
        v.set(0);
        assert!(!v.is_dirty());
    }

    #[test]
    fn test_combobox_index_scenario() {
        // default=0; set(2) -> dirty; restore -> current=0, clean
        let mut v = RevertibleValue::new(0usize);
        v.set(2);
        assert!(v.is_dirty());
        assert!(v.restore_default());
        assert_eq!(*v.current(), 0);
        assert!(!v.is_dirty());
    }

    #[test]
    fn test_bool_scenario() {
        // default=true; set(false) -> dirty; set(true) -> clean again
        let mut v = RevertibleValue::new(true);
        v.set(false);
        assert!(v.is_dirty());
        v.set(true);
        assert!(!v.is_dirty());
    }

    #[test]
    fn test_restore_is_idempotent() {
        let mut v = RevertibleValue::new(5i64);
        v.set(9);
        assert!(v.restore_default());
        // Second restore is an observable no-op
        assert!(!v.restore_default());
        assert_eq!(*v.current(), 5);
        assert!(!v.is_dirty());
    }

    #[test]
    fn test_restore_after_set_sequence() {
        let mut v = RevertibleValue::new(String::from("a"));
        for s in ["b", "c", "a", "d"] {
            v.set(s.to_string());
        }
        v.restore_default();
        assert_eq!(v.current(), "a");
        assert!(!v.is_dirty());
    }

    #[test]
    fn test_on_change_fires_on_set_and_restore() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut v = RevertibleValue::new(0.5f64).on_change(move |x| sink.borrow_mut().push(*x));

        v.set(0.75);
        assert!(v.is_dirty());
        v.restore_default();
        // Clean restore must not fire again
        v.restore_default();
        assert_eq!(*seen.borrow(), vec![0.75, 0.5]);
    }

    #[test]
    fn test_option_sentinel_domain() {
        // The button-group domain: default is "nothing selected"
        let mut v = RevertibleValue::new(None::<String>);
        v.set(Some("overcast".into()));
        assert!(v.is_dirty());
        v.restore_default();
        assert_eq!(*v.current(), None);
        assert!(!v.is_dirty());
    }
}
