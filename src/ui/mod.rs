mod input_box;
mod layout;
mod nav_bar;
mod pages;
mod skill_modal;
mod status_bar;
mod theme;
mod toast;
mod widgets;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::Theme::panel_bg()), area);

    let app_layout = layout::compute_layout(area);

    nav_bar::render(frame, app_layout.nav_bar, state);
    pages::render(frame, app_layout.content, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlays
    skill_modal::render(frame, state);
    toast::render(frame, app_layout.content, state);
}
