mod chatbot;
mod features;
mod home;
mod skills;
mod voice;

use crate::app::route::Route;
use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.route {
        Route::Home => home::render(frame, area, state),
        Route::Skills => skills::render(frame, area, state),
        Route::VoiceMode => voice::render(frame, area, state),
        Route::Chatbot => chatbot::render(frame, area, state),
        Route::Features => features::render(frame, area, state),
    }
}
