//! Layout components (content area, status bar)

use super::palette::Palette;
use crate::app::App;
use crate::platform::THEME_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Key hints for the current view
fn help_text(view: View) -> &'static str {
    match view {
        View::Form => "Tab: next  Ctrl+S: submit  Ctrl+R: reset  F2: submissions  Ctrl+Q: quit",
        View::Submissions => "j/k: move  r: refresh  Esc: back  Ctrl+Q: quit",
    }
}

/// Draw the status bar: transient message or key hints, then the theme indicator
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let theme = app.theme.current();
    let theme_label = format!(
        " {} {}{} ({THEME_SHORTCUT}) ",
        theme.icon(),
        theme.as_str(),
        if app.theme.has_explicit_preference() {
            ""
        } else {
            " (system)"
        }
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(theme_label.chars().count() as u16 + 1),
        ])
        .split(area);

    let left = match &app.state.status_message {
        Some(msg) => Span::styled(format!(" {msg}"), Style::default().fg(palette.accent)),
        None => Span::styled(
            format!(" {}", help_text(app.state.current_view)),
            Style::default().fg(palette.muted),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(left)), chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(theme_label, Style::default().fg(palette.foreground))),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_one_status_row() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_help_text_differs_per_view() {
        assert_ne!(help_text(View::Form), help_text(View::Submissions));
    }
}
