use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::{Theme, WidgetConfig};
use crate::render::layout::{render_label, render_revert, split_field_row};
use crate::widgets::{StringField, StringFieldLayout};

/// Render the text field row: label | editable text | revert cell
pub fn render_string_field(
    frame: &mut Frame,
    theme: &Theme,
    cfg: &WidgetConfig,
    field: &mut StringField,
    focused: bool,
    area: Rect,
) {
    let row = split_field_row(area, cfg);
    render_label(frame, theme, field.label(), row.label);
    render_revert(frame, theme, field.is_dirty(), row.revert);

    let body = Rect {
        height: cfg.block_height.min(row.body.height),
        ..row.body
    };
    let border_color = if focused {
        theme.accent_primary
    } else {
        theme.border_secondary
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    frame.render_widget(
        Paragraph::new(field.text().to_string()).style(Style::default().fg(theme.text_primary)),
        inner,
    );
    if focused && inner.width > 0 {
        // Cursor offset in display columns, not chars
        let before: String = field.text().chars().take(field.cursor()).collect();
        let cursor_x = inner.x + (before.width() as u16).min(inner.width - 1);
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }

    field.bind(StringFieldLayout {
        field: inner,
        revert: row.revert,
    });
}
