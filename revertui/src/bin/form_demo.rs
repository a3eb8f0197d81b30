//! Interactive demo: one form containing every control in the crate.
//!
//! Tab / Shift-Tab move focus, `r` reverts the focused control, `q` quits.
//! Mouse clicks work everywhere, including the revert cells.

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};

use revertui::{
    render, ButtonGroupEvent, ButtonGroupField, ComboBoxEvent, ComboBoxField, NumType,
    PathField, PathFieldEvent, SliderEvent, SliderField, StringField, StringFieldEvent,
    ToggleEvent, ToggleField, UiConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Combo,
    Toggle,
    Slider,
    Group,
    Text,
    Path,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Combo,
        Focus::Toggle,
        Focus::Slider,
        Focus::Group,
        Focus::Text,
        Focus::Path,
    ];

    fn next(self) -> Focus {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Focus {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

struct Form {
    combo: ComboBoxField,
    toggle: ToggleField,
    slider: SliderField,
    group: ButtonGroupField,
    text: StringField,
    path: PathField,
    focus: Focus,
    status: String,
}

impl Form {
    fn new() -> Self {
        Self {
            combo: ComboBoxField::new(
                "Voxel size",
                vec!["0.25".into(), "0.5".into(), "1.0".into(), "2.0".into()],
                1,
            ),
            toggle: ToggleField::new("Animated", true),
            slider: SliderField::new("Flame size", -2.0, 6.0, 2.0, NumType::Float)
                .with_display_range(true),
            group: ButtonGroupField::new(
                "Sky type",
                vec!["Sunny".into(), "Cloudy".into(), "Overcast".into(), "Night".into()],
            ),
            text: StringField::new("Glyph text", "Q"),
            path: PathField::new("Output path", std::env::temp_dir()),
            focus: Focus::Combo,
            status: String::new(),
        }
    }

    fn revert_focused(&mut self) {
        match self.focus {
            Focus::Combo => {
                self.combo.handle_event(ComboBoxEvent::Revert);
            }
            Focus::Toggle => {
                self.toggle.handle_event(ToggleEvent::Revert);
            }
            Focus::Slider => {
                self.slider.handle_event(SliderEvent::Revert);
            }
            Focus::Group => {
                self.group.handle_event(ButtonGroupEvent::Revert);
            }
            Focus::Text => {
                self.text.handle_event(StringFieldEvent::Revert);
            }
            Focus::Path => {}
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus == Focus::Combo && focus != Focus::Combo {
            self.combo.handle_event(ComboBoxEvent::Blur);
        }
        self.focus = focus;
    }
}

fn main() -> Result<()> {
    env_logger::init();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    let cfg = UiConfig::default();
    let mut form = Form::new();

    loop {
        terminal.draw(|frame| draw(frame, &cfg, &mut form))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // The text field consumes plain chars, so the q/r shortcuts
                // only apply while it is not focused
                let typing = form.focus == Focus::Text;
                if (key.code == KeyCode::Char('q') && !typing)
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL))
                {
                    return Ok(());
                }
                match key.code {
                    KeyCode::Tab => form.set_focus(form.focus.next()),
                    KeyCode::BackTab => form.set_focus(form.focus.prev()),
                    KeyCode::Char('r') if !typing => form.revert_focused(),
                    code => handle_focused_key(&mut form, code),
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                handle_click(&mut form, mouse.column, mouse.row);
            }
            _ => {}
        }
    }
}

fn handle_focused_key(form: &mut Form, code: KeyCode) {
    match form.focus {
        Focus::Combo => {
            if let Some(index) = form.combo.handle_event(ComboBoxEvent::Navigate(code)) {
                form.status = format!("voxel size -> {}", form.combo.options()[index]);
            }
        }
        Focus::Toggle => {
            if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
                if let Some(checked) = form.toggle.handle_event(ToggleEvent::Toggle) {
                    form.status = format!("animated -> {checked}");
                }
            }
        }
        Focus::Slider => {
            let event = match code {
                KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End => {
                    SliderEvent::Navigate(code)
                }
                other => SliderEvent::Input(other),
            };
            if let Some(v) = form.slider.handle_event(event) {
                form.status = format!("flame size -> {v}");
            }
        }
        Focus::Group => {
            if let Some(change) = form.group.handle_event(ButtonGroupEvent::Navigate(code)) {
                form.status = format!("sky -> {change:?}");
            }
        }
        Focus::Text => {
            let event = match code {
                KeyCode::Enter => StringFieldEvent::Submit,
                other => StringFieldEvent::Input(other),
            };
            if let Some(text) = form.text.handle_event(event) {
                form.status = format!("glyph text -> {text:?}");
            }
        }
        Focus::Path => {
            if code == KeyCode::Enter {
                if let Err(e) = form.path.handle_event(PathFieldEvent::Open) {
                    log::error!("{e:#}");
                    form.status = format!("open failed: {e}");
                }
            }
        }
    }
}

fn handle_click(form: &mut Form, column: u16, row: u16) {
    if let Ok(Some(event)) = form.combo.event_at(column, row) {
        form.set_focus(Focus::Combo);
        form.combo.handle_event(event);
        return;
    }
    if form.combo.is_open() {
        // Click landed outside the dropdown
        form.combo.handle_event(ComboBoxEvent::Blur);
    }
    if let Ok(Some(event)) = form.toggle.event_at(column, row) {
        form.set_focus(Focus::Toggle);
        form.toggle.handle_event(event);
        return;
    }
    if let Ok(Some(event)) = form.slider.event_at(column, row) {
        form.set_focus(Focus::Slider);
        form.slider.handle_event(event);
        return;
    }
    if let Ok(Some(event)) = form.group.event_at(column, row) {
        form.set_focus(Focus::Group);
        form.group.handle_event(event);
        return;
    }
    if let Ok(Some(event)) = form.text.event_at(column, row) {
        form.set_focus(Focus::Text);
        form.text.handle_event(event);
        return;
    }
    if let Ok(Some(event)) = form.path.event_at(column, row) {
        form.set_focus(Focus::Path);
        if let Err(e) = form.path.handle_event(event) {
            log::error!("{e:#}");
            form.status = format!("open failed: {e}");
        }
    }
}

fn draw(frame: &mut Frame, cfg: &UiConfig, form: &mut Form) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(cfg.theme.border_primary))
        .title(" revertui demo — Tab: focus, r: revert, q: quit ");
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let h = cfg.widgets.block_height;
    let [combo_row, toggle_row, slider_row, group_row, text_row, path_row, _, status_row] =
        Layout::vertical([
            Constraint::Length(h),
            Constraint::Length(h),
            Constraint::Length(h + 1), // extra row for the range labels
            Constraint::Length(h),
            Constraint::Length(h),
            Constraint::Length(h),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let theme = &cfg.theme;
    let widgets = &cfg.widgets;
    render::render_toggle(frame, theme, widgets, &mut form.toggle, form.focus == Focus::Toggle, toggle_row);
    render::render_slider(frame, theme, widgets, &mut form.slider, form.focus == Focus::Slider, slider_row);
    render::render_button_group(frame, theme, widgets, &mut form.group, form.focus == Focus::Group, group_row);
    render::render_string_field(frame, theme, widgets, &mut form.text, form.focus == Focus::Text, text_row);
    render::render_path_field(frame, theme, widgets, &mut form.path, form.focus == Focus::Path, path_row);
    // Rendered last so an open dropdown overlays the rows below it
    render::render_combo_box(frame, theme, widgets, &mut form.combo, form.focus == Focus::Combo, combo_row);

    draw_status(frame, cfg, form, status_row);
}

fn draw_status(frame: &mut Frame, cfg: &UiConfig, form: &Form, area: Rect) {
    frame.render_widget(
        Paragraph::new(form.status.as_str()).style(Style::default().fg(cfg.theme.text_muted)),
        area,
    );
}
