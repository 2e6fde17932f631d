use crate::app::state::*;
use crate::content::chatbot::INPUT_PLACEHOLDER;
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::{Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.chat_focus == ChatFocus::Input;
    let block = widgets::panel("Message", focused).padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_text = &state.input.text;
    let send_style = if state.input.is_blank() {
        Theme::disabled()
    } else {
        Theme::key_hint()
    };
    let mic = if state.session.listening { "🎙 on " } else { "🎙 off" };

    let body = if input_text.is_empty() {
        Span::styled(INPUT_PLACEHOLDER, Theme::muted())
    } else {
        Span::styled(input_text.as_str(), Theme::input_text())
    };
    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_PRIMARY)),
        body,
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    // Right-aligned mic state and send button
    let trailer = Line::from(vec![
        Span::styled(format!("{}  ", mic), Theme::secondary()),
        widgets::button("Send ⏎", send_style),
    ]);
    let trailer_w = trailer.width() as u16;
    if inner.width > trailer_w + 10 {
        let trailer_area = Rect::new(inner.right() - trailer_w, inner.y, trailer_w, 1);
        frame.render_widget(Paragraph::new(trailer), trailer_area);
    }

    if focused {
        // Cursor offset: chevron "❯ " (2 cells)
        let prompt_offset = 2u16;
        let before_cursor = input_text[..state.input.cursor].width() as u16;
        let cursor_x = inner.x + prompt_offset + before_cursor;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}
