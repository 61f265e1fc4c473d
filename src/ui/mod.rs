//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod palette;
mod submissions;
mod widgets;

use crate::app::App;
use crate::state::View;
use palette::Palette;
use ratatui::{widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme.current());
    let area = frame.area();

    // Paint the theme background across the whole screen
    frame.render_widget(Block::default().style(palette.base()), area);

    let (main_area, status_area) = layout::create_layout(area);

    match app.state.current_view {
        View::Form => forms::draw(frame, main_area, app, &palette),
        View::Submissions => submissions::draw(frame, main_area, app, &palette),
    }

    layout::draw_status_bar(frame, status_area, app, &palette);

    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error, &palette);
    }
}
