//! Contact form view

use super::field_renderer::{draw_field, FieldView, ERROR_LINE_HEIGHT};
use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{ContactForm, Field, FormButton, SubmitStatus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::palette::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SINGLE_LINE_FIELD_HEIGHT: u16 = 3 + ERROR_LINE_HEIGHT;

/// Draw the contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Contact Us ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status_height = if form.status().is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                        // Description
            Constraint::Length(status_height),            // Status banner
            Constraint::Length(SINGLE_LINE_FIELD_HEIGHT), // Full name
            Constraint::Length(SINGLE_LINE_FIELD_HEIGHT), // Email
            Constraint::Length(SINGLE_LINE_FIELD_HEIGHT), // Phone
            Constraint::Min(4 + ERROR_LINE_HEIGHT),       // Message
            Constraint::Length(1),                        // Character count
            Constraint::Length(BUTTON_HEIGHT),            // Actions
            Constraint::Length(1),                        // Footer
        ])
        .horizontal_margin(1)
        .split(inner);

    let description = Paragraph::new(Line::from(Span::styled(
        "We'd love to hear from you! Fill out the form below and we'll get back \
         to you as soon as possible.",
        Style::default().fg(palette.muted),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[0]);

    if let Some(status) = form.status() {
        draw_status_banner(frame, chunks[1], status, palette);
    }

    for field in Field::ALL {
        let view = FieldView {
            field,
            value: form.data().get(field),
            error: form.errors().get(field),
            is_active: form.focused_field() == Some(field),
            is_disabled: form.is_submitting(),
        };
        draw_field(frame, chunks[2 + field.index()], &view, palette);
    }

    draw_char_count(frame, chunks[6], form, palette);
    draw_actions(frame, chunks[7], form, palette);

    let footer = Paragraph::new(Line::from(Span::styled(
        "* Required fields",
        Style::default().fg(palette.muted),
    )));
    frame.render_widget(footer, chunks[8]);
}

fn draw_status_banner(frame: &mut Frame, area: Rect, status: &SubmitStatus, palette: &Palette) {
    let (icon, color) = match status {
        SubmitStatus::Success(_) => ("✅", palette.success),
        SubmitStatus::Error(_) => ("❌", palette.error),
    };
    let banner = Paragraph::new(Line::from(vec![
        Span::raw(format!("{icon} ")),
        Span::styled(
            status.message(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (Esc to dismiss)", Style::default().fg(palette.muted)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(banner, area);
}

fn draw_char_count(frame: &mut Frame, area: Rect, form: &ContactForm, palette: &Palette) {
    let max = Field::Message.max_chars().unwrap_or_default();
    let color = if form.char_count_warning() {
        palette.warning
    } else {
        palette.muted
    };
    let count = Paragraph::new(Span::styled(
        format!("{}/{max} characters", form.char_count()),
        Style::default().fg(color),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(count, area);
}

fn draw_actions(frame: &mut Frame, area: Rect, form: &ContactForm, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Length(24),
            Constraint::Min(0),
        ])
        .split(area);

    let on_row = form.is_actions_row_active();
    let enabled = !form.is_submitting();
    let submit_label = if form.is_submitting() {
        "⏳ Submitting...".to_string()
    } else {
        format!("{} ({SUBMIT_SHORTCUT})", FormButton::Submit.label())
    };

    render_button(
        frame,
        chunks[0],
        &submit_label,
        on_row && form.selected_button == FormButton::Submit,
        enabled,
        palette,
    );
    render_button(
        frame,
        chunks[1],
        &format!("{} ({RESET_SHORTCUT})", FormButton::Reset.label()),
        on_row && form.selected_button == FormButton::Reset,
        enabled,
        palette,
    );
}
