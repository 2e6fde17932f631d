use crate::app::state::AppState;
use crate::content::features::{FeatureStatus, FEATURES, FEATURE_CATEGORIES};
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

fn badge_color(status: FeatureStatus) -> Color {
    match status {
        FeatureStatus::Active => Theme::ACCENT_GREEN,
        FeatureStatus::Beta => Theme::ACCENT_AMBER,
        FeatureStatus::ComingSoon => Theme::TEXT_MUTED,
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(FEATURE_CATEGORIES.len() as u16 + 2),
            Constraint::Length(1),
        ])
        .split(area);

    let items: Vec<ListItem> = FEATURES
        .iter()
        .map(|f| {
            let button_style = if f.status.is_enabled() {
                Theme::key_hint()
            } else {
                Theme::disabled()
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:<18}", f.title), Theme::heading()),
                    Span::styled(format!(" {} ", f.status.badge()), Theme::badge(badge_color(f.status))),
                    Span::raw("  "),
                    widgets::button(f.status.button_label(), button_style),
                ]),
                Line::from(Span::styled(format!("  {}", f.description), Theme::secondary())),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(widgets::panel("Features", true))
        .highlight_style(Style::default().bg(Theme::BG_ELEVATED))
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected(Some(state.feature_cursor));
    frame.render_stateful_widget(list, rows[0], &mut list_state);

    let block = widgets::panel("Categories", false);
    let inner = block.inner(rows[1]);
    frame.render_widget(block, rows[1]);
    let lines: Vec<Line> = FEATURE_CATEGORIES
        .iter()
        .map(|(title, blurb)| {
            Line::from(vec![
                Span::styled(format!("{}: ", title), Theme::body()),
                Span::styled(*blurb, Theme::muted()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

    frame.render_widget(
        Paragraph::new(widgets::key_help(&[("↑↓", "select"), ("Enter", "activate")])),
        rows[2],
    );
}
