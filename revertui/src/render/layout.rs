use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::{Theme, WidgetConfig};

/// The shared row shape: attribute label | control body | revert cell
#[derive(Debug, Clone, Copy)]
pub struct FieldRow {
    pub label: Rect,
    pub body: Rect,
    pub revert: Rect,
}

/// Split a row area into the label column, control body, and revert cell
pub fn split_field_row(area: Rect, cfg: &WidgetConfig) -> FieldRow {
    let [label, body, revert] = Layout::horizontal([
        Constraint::Length(cfg.label_width),
        Constraint::Min(1),
        Constraint::Length(cfg.revert_width),
    ])
    .spacing(cfg.spacing)
    .areas(area);
    FieldRow { label, body, revert }
}

/// Single line vertically centered within an area
pub fn center_line(area: Rect) -> Rect {
    if area.height <= 1 {
        return area;
    }
    Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    }
}

/// Render the attribute-name label on the row's middle line
pub fn render_label(frame: &mut Frame, theme: &Theme, text: &str, area: Rect) {
    let widget = Paragraph::new(text).style(Style::default().fg(theme.text_primary));
    frame.render_widget(widget, center_line(area));
}

/// Render the revert affordance: accented while the control is dirty,
/// dimmed when there is nothing to revert.
pub fn render_revert(frame: &mut Frame, theme: &Theme, dirty: bool, area: Rect) {
    let color = if dirty {
        theme.accent_primary
    } else {
        theme.text_muted
    };
    let widget = Paragraph::new(" ⟲").style(Style::default().fg(color));
    frame.render_widget(widget, center_line(area));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_field_row_widths() {
        let cfg = WidgetConfig {
            label_width: 20,
            block_height: 3,
            spacing: 1,
            field_width: 8,
            revert_width: 4,
        };
        let row = split_field_row(Rect::new(0, 0, 80, 3), &cfg);
        assert_eq!(row.label.width, 20);
        assert_eq!(row.revert.width, 4);
        assert_eq!(row.body.x, 21);
        assert_eq!(row.body.width, 80 - 20 - 4 - 2);
    }

    #[test]
    fn test_center_line() {
        let line = center_line(Rect::new(0, 4, 10, 3));
        assert_eq!(line.y, 5);
        assert_eq!(line.height, 1);
        // Degenerate rows pass through
        let thin = center_line(Rect::new(0, 4, 10, 1));
        assert_eq!(thin.y, 4);
    }
}
