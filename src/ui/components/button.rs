//! Button component for TUI

use crate::ui::palette::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button; disabled buttons are drawn muted and never highlighted
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
    palette: &Palette,
) {
    let highlighted = is_selected && is_enabled;
    let border_style = palette.border(highlighted);

    let text_style = if highlighted {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else if !is_enabled {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(palette.foreground)
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
