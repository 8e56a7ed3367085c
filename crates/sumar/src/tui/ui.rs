//! TUI rendering: display panel, keypad grid, help sidebar.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use crate::core::InputEvent;
use crate::keypad::Keypad;

const APP_TITLE: &str = " sumar ";

const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "type operand"),
    ("+-*/", "operator"),
    ("Enter =", "evaluate"),
    ("Esc c", "clear"),
    ("Bksp", "delete last"),
    ("q ^C", "quit"),
];

/// Renders the calculator UI to the frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Top-level calculator widget.
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates the widget over the app state.
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn create_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Min(24),    // Display column
                Constraint::Length(22), // Keypad
                Constraint::Length(22), // Help sidebar
            ])
            .split(area)
            .to_vec()
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let style = if self.app.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let panel = Paragraph::new(Span::styled(self.app.display(), style))
            .right_aligned()
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        panel.render(chunks[0], buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(keys, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{keys:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        list.render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let chunks = Self::create_layout(area);
        if chunks.len() < 3 {
            return;
        }

        self.render_display(chunks[0], buf);
        KeypadWidget::new(self.app.keypad()).render(chunks[1], buf);
        Self::render_help(chunks[2], buf);
    }
}

/// Keypad grid widget with pressed-button highlight.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates the widget over a keypad.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(event: InputEvent, pressed: bool) -> Style {
        if pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match event {
            InputEvent::Digit(_) | InputEvent::Decimal => Style::default().fg(Color::White),
            InputEvent::Operator(_) => Style::default().fg(Color::Yellow),
            InputEvent::Evaluate => Style::default().fg(Color::Green),
            InputEvent::Clear | InputEvent::DeleteLast => Style::default().fg(Color::Red),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = Self::button_style(btn.event, btn.pressed);
            let label = format!("[{}]", btn.label);

            if btn_width >= 3 {
                let label_x = x + (btn_width.saturating_sub(3)) / 2;
                let label_y = y + btn_height / 2;
                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
