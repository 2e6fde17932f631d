use crate::app::route::Route;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Style::default().bg(Theme::BG_ELEVATED);

    let mut spans = vec![Span::styled(
        " ✿ SkillSprout ",
        Style::default()
            .fg(Theme::ACCENT_GREEN)
            .bg(Theme::BG_ELEVATED)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled("│", Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED)));

    for (i, route) in Route::ALL.iter().enumerate() {
        let style = if *route == state.route {
            Theme::selected()
        } else {
            Style::default().fg(Theme::TEXT_SECONDARY).bg(Theme::BG_ELEVATED)
        };
        spans.push(Span::styled(
            format!(" F{}", i + 1),
            Style::default().fg(Theme::ACCENT_AMBER).bg(Theme::BG_ELEVATED),
        ));
        spans.push(Span::styled(format!(" {} ", route.title()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg), area);
}
