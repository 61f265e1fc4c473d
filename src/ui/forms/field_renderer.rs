//! Field rendering utilities for forms

use crate::state::Field;
use crate::ui::palette::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How a field should be drawn
pub struct FieldView<'a> {
    pub field: Field,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub is_active: bool,
    pub is_disabled: bool,
}

/// Rows a field needs below its input box for the error line
pub const ERROR_LINE_HEIGHT: u16 = 1;

/// Draw a labelled input box with its error line underneath
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                    // Input box
            Constraint::Length(ERROR_LINE_HEIGHT), // Error message
        ])
        .split(area);

    let border_style = if view.error.is_some() {
        Style::default().fg(palette.error)
    } else if view.is_disabled {
        Style::default().fg(palette.muted)
    } else {
        palette.border(view.is_active)
    };

    let text_style = if view.is_disabled {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(palette.foreground)
    };
    let cursor_style = Style::default().fg(palette.accent);
    let cursor = if view.is_active && !view.is_disabled {
        "▌"
    } else {
        ""
    };

    let content = if view.value.is_empty() {
        Paragraph::new(Line::from(vec![
            Span::styled(cursor, cursor_style),
            Span::styled(
                view.field.placeholder(),
                Style::default()
                    .fg(palette.muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]))
    } else if view.field.is_multiline() {
        let mut lines: Vec<Line> = view
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(view.value, text_style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", view.field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(error) = view.error {
        let line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(palette.error),
        ));
        frame.render_widget(line, chunks[1]);
    }
}
