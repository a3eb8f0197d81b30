use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::config::{Theme, WidgetConfig};
use crate::render::layout::{center_line, render_label, split_field_row};
use crate::widgets::{ellipsize_left, PathField, PathFieldLayout};

/// Render the path row: label | read-only path (left-ellipsized so the tail
/// stays visible) | open-in-file-manager cell. No revert affordance: the
/// path is not user-mutable.
pub fn render_path_field(
    frame: &mut Frame,
    theme: &Theme,
    cfg: &WidgetConfig,
    field: &mut PathField,
    focused: bool,
    area: Rect,
) {
    let row = split_field_row(area, cfg);
    render_label(frame, theme, field.label(), row.label);

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

    let text = ellipsize_left(&field.path().to_string_lossy(), inner.width);
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(theme.text_muted)),
        inner,
    );

    // The open affordance sits in the tail cell and is always enabled
    let open = row.revert;
    frame.render_widget(
        Paragraph::new(" ▸").style(Style::default().fg(theme.accent_primary)),
        center_line(open),
    );

    field.bind(PathFieldLayout { field: inner, open });
}
