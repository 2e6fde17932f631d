use crate::app::route::Route;
use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", state.route.path()),
        Style::default().fg(Theme::ACCENT_GREEN).bg(Theme::BG_ELEVATED),
    ));

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    if state.session.listening {
        parts.push(Span::styled(
            " ● listening ",
            Style::default().fg(Theme::ACCENT_ROSE).bg(Theme::BG_ELEVATED),
        ));
    }

    // Focus indicator on the right
    let hint = match state.route {
        Route::Chatbot => match state.chat_focus {
            ChatFocus::Input => "INPUT",
            ChatFocus::QuickQuestions => "QUESTIONS",
        },
        _ => "Esc home · q quit",
    };
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hint.width() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", hint),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
