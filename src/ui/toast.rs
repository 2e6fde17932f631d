use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// Stack of notifications in the top-right corner, newest at the bottom.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.width < TOAST_WIDTH + 2 {
        return;
    }
    let x = area.right() - TOAST_WIDTH - 1;

    for (i, toast) in state.toasts.iter().enumerate() {
        let y = area.y + i as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, TOAST_WIDTH, TOAST_HEIGHT);
        frame.render_widget(Clear, rect);

        let block = Block::default()
            .title(format!(" {} ", toast.notification.title))
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Style::default().fg(Theme::ACCENT_GREEN))
            .style(Style::default().bg(Theme::BG_ELEVATED));

        let body = Paragraph::new(Span::styled(
            toast.notification.description.as_str(),
            Theme::body(),
        ))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(body, rect);
    }
}
