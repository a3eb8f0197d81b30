use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::{Theme, WidgetConfig};
use crate::render::layout::{render_label, render_revert, split_field_row};
use crate::widgets::slider::range_label_offsets;
use crate::widgets::{SliderField, SliderLayout};

/// Render the slider row: label | track + inline numeric field | revert
/// cell, with optional min/0/max range labels under the track.
///
/// The area should be `block_height` rows tall, plus one more when the
/// range display is enabled.
pub fn render_slider(
    frame: &mut Frame,
    theme: &Theme,
    cfg: &WidgetConfig,
    field: &mut SliderField,
    focused: bool,
    area: Rect,
) {
    let row = split_field_row(area, cfg);
    render_label(frame, theme, field.label(), row.label);
    render_revert(frame, theme, field.is_dirty(), row.revert);

    let control = Rect {
        height: cfg.block_height.min(row.body.height),
        ..row.body
    };
    let [track_area, field_area] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(cfg.field_width),
    ])
    .spacing(cfg.spacing)
    .areas(control);

    let border_color = if focused {
        theme.accent_primary
    } else {
        theme.border_secondary
    };

    // Track
    let track_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let track = track_block.inner(track_area);
    frame.render_widget(track_block, track_area);
    if track.width > 0 {
        let width = track.width as usize;
        let thumb = (field.normalized() * (width - 1) as f64).round() as usize;
        let line = Line::from(vec![
            Span::styled("█".repeat(thumb), Style::default().fg(theme.accent_primary)),
            Span::styled("●", Style::default().fg(theme.text_primary)),
            Span::styled(
                "─".repeat(width - thumb - 1),
                Style::default().fg(theme.border_primary),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), track);
    }

    // Inline numeric field
    let field_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let field_inner = field_block.inner(field_area);
    frame.render_widget(field_block, field_area);
    frame.render_widget(
        Paragraph::new(field.input().buffer().to_string())
            .style(Style::default().fg(theme.text_primary)),
        field_inner,
    );
    if focused && field_inner.width > 0 {
        let cursor_x = field_inner.x + (field.input().cursor() as u16).min(field_inner.width - 1);
        frame.set_cursor_position(Position::new(cursor_x, field_inner.y));
    }

    // Range labels under the track
    if field.display_range() && area.height > cfg.block_height {
        let labels_area = Rect {
            x: track.x,
            y: control.y + control.height,
            width: track.width,
            height: 1,
        };
        render_range_labels(frame, theme, field, labels_area);
    }

    field.bind(SliderLayout {
        track,
        field: field_inner,
        revert: row.revert,
    });
}

fn range_text(field: &SliderField, v: f64) -> String {
    match field.num_type() {
        crate::widgets::NumType::Int => format!("{}", v as i64),
        crate::widgets::NumType::Float => format!("{v}"),
    }
}

fn render_range_labels(frame: &mut Frame, theme: &Theme, field: &SliderField, area: Rect) {
    if area.width == 0 {
        return;
    }
    let style = Style::default().fg(theme.text_muted);
    let min_text = range_text(field, field.min());
    let max_text = range_text(field, field.max());

    frame.render_widget(Paragraph::new(min_text.clone()).style(style), area);
    frame.render_widget(
        Paragraph::new(max_text).alignment(ratatui::layout::Alignment::Right).style(style),
        area,
    );

    // Zero label, only when the range spans zero
    if let Some((left_pct, _)) = range_label_offsets(field.min(), field.max()) {
        let min_w = min_text.width() as u16;
        let offset = (left_pct / 100.0 * f64::from(area.width)).round() as u16;
        let x = (area.x + min_w + offset).min(area.x + area.width - 1);
        let zero_area = Rect { x, width: 1, ..area };
        frame.render_widget(Paragraph::new("0").style(style), zero_area);
    }
}
