use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::config::{Theme, WidgetConfig};
use crate::render::layout::{render_label, render_revert, split_field_row};
use crate::widgets::{ToggleField, ToggleLayout};

const SWITCH_WIDTH: u16 = 7;

/// Render the toggle row: label | checked/unchecked switch | revert cell
pub fn render_toggle(
    frame: &mut Frame,
    theme: &Theme,
    cfg: &WidgetConfig,
    field: &mut ToggleField,
    focused: bool,
    area: Rect,
) {
    let row = split_field_row(area, cfg);
    render_label(frame, theme, field.label(), row.label);
    render_revert(frame, theme, field.is_dirty(), row.revert);

    let switch = Rect {
        width: SWITCH_WIDTH.min(row.body.width),
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
    let inner = block.inner(switch);
    frame.render_widget(block, switch);

    let (glyph, color) = if field.is_checked() {
        ("[x]", theme.accent_primary)
    } else {
        ("[ ]", theme.text_muted)
    };
    frame.render_widget(
        Paragraph::new(glyph).style(Style::default().fg(color)),
        inner,
    );

    field.bind(ToggleLayout {
        switch,
        revert: row.revert,
    });
}
