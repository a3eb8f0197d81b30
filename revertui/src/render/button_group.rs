use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::{Theme, WidgetConfig};
use crate::render::layout::{render_label, render_revert, split_field_row};
use crate::widgets::{ButtonGroupField, ButtonGroupLayout};

/// Render the button group row: label | one button per option | revert
/// cell. The selected option is filled with the accent color; the
/// keyboard-focused option gets the accent border.
pub fn render_button_group(
    frame: &mut Frame,
    theme: &Theme,
    cfg: &WidgetConfig,
    field: &mut ButtonGroupField,
    focused: bool,
    area: Rect,
) {
    let row = split_field_row(area, cfg);
    render_label(frame, theme, field.label(), row.label);
    render_revert(frame, theme, field.is_dirty(), row.revert);

    let height = cfg.block_height.min(row.body.height);
    let selected = field.selected_index();
    let focus = field.focused();

    let mut buttons = Vec::with_capacity(field.options().len());
    let mut x = row.body.x;
    let right_edge = row.body.x + row.body.width;
    for (i, option) in field.options().iter().enumerate() {
        let width = (option.width() as u16 + 4).min(right_edge.saturating_sub(x));
        if width < 3 {
            // Out of horizontal space; remaining buttons get empty rects so
            // indices still line up for hit-testing
            buttons.push(Rect::new(right_edge, row.body.y, 0, 0));
            continue;
        }
        let rect = Rect::new(x, row.body.y, width, height);
        x += width + cfg.spacing;

        let is_selected = selected == Some(i);
        let border_color = if focused && focus == i {
            theme.accent_primary
        } else {
            theme.border_secondary
        };
        let text_style = if is_selected {
            Style::default().fg(theme.bg_surface).bg(theme.accent_primary)
        } else {
            Style::default().fg(theme.text_primary)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        frame.render_widget(
            Paragraph::new(option.as_str())
                .alignment(Alignment::Center)
                .style(text_style),
            inner,
        );
        buttons.push(rect);
    }

    field.bind(ButtonGroupLayout {
        buttons,
        revert: row.revert,
    });
}
