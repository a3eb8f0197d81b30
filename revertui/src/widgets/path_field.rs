use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

use crate::binding::{hit, Binding, BindingError};
use crate::events::PathFieldEvent;

/// Screen rects resolved by the renderer, for mouse hit-testing
#[derive(Debug, Clone)]
pub struct PathFieldLayout {
    pub field: Rect,
    pub open: Rect,
}

/// A labelled, read-only path with an "open in file manager" affordance.
///
/// The path is not user-mutable, so this control carries no revert
/// affordance.
#[derive(Debug)]
pub struct PathField {
    label: String,
    path: PathBuf,
    binding: Binding<PathFieldLayout>,
}

impl PathField {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            binding: Binding::Unbuilt,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reveal the path in the platform file manager
    pub fn open(&self) -> anyhow::Result<()> {
        let program = if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        };
        Command::new(program)
            .arg(&self.path)
            .spawn()
            .with_context(|| format!("Failed to open path: {}", self.path.display()))?;
        Ok(())
    }

    /// Handle an event. `Open` spawns the file manager; failures propagate
    /// to the caller.
    pub fn handle_event(&self, event: PathFieldEvent) -> anyhow::Result<()> {
        match event {
            PathFieldEvent::Open => self.open(),
        }
    }

    /// Store the renderer-resolved layout
    pub fn bind(&mut self, layout: PathFieldLayout) {
        self.binding.bind(layout);
    }

    /// Translate a mouse press into an event. Fails fast if the widget has
    /// never been rendered.
    pub fn event_at(&self, column: u16, row: u16) -> Result<Option<PathFieldEvent>, BindingError> {
        let layout = self.binding.get()?;
        if hit(layout.open, column, row) {
            return Ok(Some(PathFieldEvent::Open));
        }
        Ok(None)
    }
}

/// Ellipsize from the left so the path's tail stays visible, measured in
/// display columns.
pub fn ellipsize_left(text: &str, max_cols: u16) -> String {
    let max_cols = max_cols as usize;
    let total: usize = text.chars().filter_map(|c| c.width()).sum();
    if total <= max_cols {
        return text.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }
    // Keep the widest suffix that fits after the ellipsis cell
    let budget = max_cols - 1;
    let mut width = 0;
    let mut tail = String::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        tail.push(c);
    }
    let tail: String = tail.chars().rev().collect();
    format!("…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path_untouched() {
        assert_eq!(ellipsize_left("/tmp/out", 20), "/tmp/out");
    }

    #[test]
    fn test_long_path_keeps_tail() {
        let path = "/home/user/projects/render/output/frames";
        let short = ellipsize_left(path, 12);
        assert_eq!(short, "…tput/frames");
        assert!(short.chars().count() <= 12);
    }

    #[test]
    fn test_exact_fit_untouched() {
        assert_eq!(ellipsize_left("abcdef", 6), "abcdef");
    }

    #[test]
    fn test_zero_width_budget() {
        assert_eq!(ellipsize_left("abcdef", 0), "");
    }

    #[test]
    fn test_wide_chars_measured_in_columns() {
        // Each CJK char occupies two columns
        let short = ellipsize_left("日本語のパス", 5);
        // 1 col ellipsis + two 2-col chars
        assert_eq!(short, "…パス");
    }

    #[test]
    fn test_mouse_before_render_fails_fast() {
        let field = PathField::new("Output", "/tmp/out");
        assert_eq!(field.event_at(0, 0), Err(BindingError::Unbuilt));
    }

    #[test]
    fn test_open_hit() {
        let mut field = PathField::new("Output", "/tmp/out");
        field.bind(PathFieldLayout {
            field: Rect::new(0, 0, 30, 3),
            open: Rect::new(31, 0, 3, 3),
        });
        assert_eq!(field.event_at(32, 1), Ok(Some(PathFieldEvent::Open)));
        assert_eq!(field.event_at(5, 1), Ok(None));
    }
}
