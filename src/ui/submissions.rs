//! Submissions listing view

use super::palette::Palette;
use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::api::SubmissionRecord;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the list of stored submissions with a detail pane for the selection
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let submissions = &app.state.submissions;
    let block = Block::default()
        .title(format!(" Submissions ({}) ", submissions.len()))
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(true));

    if submissions.is_empty() {
        let empty = Paragraph::new("No submissions yet.\n\nPress 'r' to refresh, Esc to go back.")
            .style(Style::default().fg(palette.muted))
            .block(block);
        frame.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = submissions
            .iter()
            .map(|s| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<16} ", s.submitted_at_display()),
                        Style::default().fg(palette.muted),
                    ),
                    Span::styled(s.full_name.clone(), Style::default().fg(palette.foreground)),
                ]))
            })
            .collect();
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
        render_scrollable_list(frame, chunks[0], list, app.state.selected_index);
    }

    draw_detail(frame, chunks[1], submissions.get(app.state.selected_index), palette);
}

fn draw_detail(
    frame: &mut Frame,
    area: Rect,
    record: Option<&SubmissionRecord>,
    palette: &Palette,
) {
    let block = Block::default()
        .title(" Detail ")
        .borders(Borders::ALL)
        .border_style(palette.border(false));

    let Some(record) = record else {
        frame.render_widget(block, area);
        return;
    };

    let label = Style::default().fg(palette.muted);
    let mut lines = vec![
        Line::from(vec![Span::styled("Name:      ", label), Span::raw(record.full_name.clone())]),
        Line::from(vec![Span::styled("Email:     ", label), Span::raw(record.email.clone())]),
        Line::from(vec![Span::styled("Phone:     ", label), Span::raw(record.phone.clone())]),
        Line::from(vec![
            Span::styled("Submitted: ", label),
            Span::raw(record.submitted_at_display()),
        ]),
        Line::from(""),
    ];
    lines.extend(record.message.lines().map(|l| Line::from(l.to_string())));

    let detail = Paragraph::new(lines)
        .style(Style::default().fg(palette.foreground))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(detail, area);
}
