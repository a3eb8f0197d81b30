use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::config::{Theme, WidgetConfig};
use crate::render::layout::{render_label, render_revert, split_field_row};
use crate::widgets::{ComboBoxField, ComboBoxLayout};

/// Render the combobox row: label | closed control (selection + dropdown
/// arrow) | revert cell. When the dropdown is open the option rows are drawn
/// over whatever sits below the control, so callers should render an open
/// combobox after its neighbors.
pub fn render_combo_box(
    frame: &mut Frame,
    theme: &Theme,
    cfg: &WidgetConfig,
    field: &mut ComboBoxField,
    focused: bool,
    area: Rect,
) {
    let row = split_field_row(area, cfg);
    render_label(frame, theme, field.label(), row.label);
    render_revert(frame, theme, field.is_dirty(), row.revert);

    let border_color = if focused {
        theme.accent_primary
    } else {
        theme.border_secondary
    };
    let disabled = field.options().is_empty();
    let text_color = if disabled {
        theme.text_muted
    } else {
        theme.text_primary
    };

    let body = Rect {
        height: cfg.block_height.min(row.body.height),
        ..row.body
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let [value_area, arrow_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(2)]).areas(inner);
    let selection = field.selected_label().unwrap_or("—");
    frame.render_widget(
        Paragraph::new(selection).style(Style::default().fg(text_color)),
        value_area,
    );
    frame.render_widget(
        Paragraph::new("▾")
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.text_muted)),
        arrow_area,
    );

    // Dropdown rows start directly under the control
    let mut option_rows = Vec::with_capacity(field.options().len());
    for i in 0..field.options().len() {
        let rect = Rect {
            x: body.x,
            y: body.y + body.height + i as u16,
            width: body.width,
            height: 1,
        };
        option_rows.push(rect.intersection(frame.area()));
    }

    if field.is_open() {
        for (i, (option, rect)) in field.options().iter().zip(&option_rows).enumerate() {
            if rect.is_empty() {
                continue;
            }
            let style = if i == field.state().highlighted() {
                Style::default().fg(theme.bg_surface).bg(theme.accent_primary)
            } else {
                Style::default().fg(theme.text_primary).bg(theme.bg_surface)
            };
            frame.render_widget(Paragraph::new(format!(" {option}")).style(style), *rect);
        }
    }

    field.bind(ComboBoxLayout {
        body,
        revert: row.revert,
        option_rows,
    });
}
