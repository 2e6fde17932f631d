use crate::app::state::AppState;
use crate::content::dashboard::*;
use crate::content::skills::CATEGORIES;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Hero
            Constraint::Min(8),    // Categories + dashboard
            Constraint::Length(1), // Key help
        ])
        .split(area);

    render_hero(frame, rows[0]);

    let (left, right) = layout::sidebar_split(rows[1], (rows[1].width / 2).max(30));
    render_categories(frame, left, state);
    render_dashboard(frame, right);

    frame.render_widget(
        Paragraph::new(widgets::key_help(&[
            ("↑↓", "category"),
            ("Enter", "learn more"),
            ("s", "skills"),
            ("v", "voice"),
            ("c", "chat"),
            ("f", "features"),
        ])),
        rows[2],
    );
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let block = widgets::panel("Welcome", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", HERO_TITLE), Theme::heading()),
            Span::styled(HERO_HIGHLIGHT, Theme::highlight()),
        ]),
        Line::from(Span::styled(HERO_SUBTITLE, Theme::secondary())),
    ];

    let mut highlights = Vec::new();
    for (title, _) in HERO_HIGHLIGHTS {
        highlights.push(Span::styled("✓ ", Style::default().fg(Theme::ACCENT_GREEN)));
        highlights.push(Span::styled(format!("{}   ", title), Theme::body()));
    }
    lines.push(Line::from(highlights));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_categories(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = widgets::panel("Learning Categories", true);

    let items: Vec<ListItem> = CATEGORIES
        .iter()
        .map(|c| {
            ListItem::new(vec![
                Line::from(Span::styled(c.title, Theme::heading())),
                Line::from(vec![
                    Span::styled(format!("  {}", c.duration), Theme::secondary()),
                    Span::styled(" · ", Theme::muted()),
                    Span::styled(c.level, Theme::secondary()),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::selected())
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default().with_selected(Some(state.category_cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_dashboard(frame: &mut Frame, area: Rect) {
    let block = widgets::panel("Your Progress", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar_width = (inner.width as usize).saturating_sub(26).clamp(6, 30);

    let mut lines = vec![Line::from(Span::styled(
        format!("Current path: {}", CURRENT_PATH),
        Theme::heading(),
    ))];
    let mut overall = vec![Span::styled(format!("{:<20}", "Overall"), Theme::body())];
    overall.extend(widgets::progress_bar(OVERALL_PROGRESS, bar_width));
    lines.push(Line::from(overall));

    for (name, pct, badge) in PATH_MODULES {
        let mut row = vec![Span::styled(format!("{:<20}", name), Theme::secondary())];
        row.extend(widgets::progress_bar(*pct, bar_width));
        row.push(Span::styled(format!("  {}", badge), Theme::muted()));
        lines.push(Line::from(row));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Achievements", Theme::heading())));
    for (title, detail) in ACHIEVEMENTS {
        lines.push(Line::from(vec![
            Span::styled("★ ", Style::default().fg(Theme::ACCENT_AMBER)),
            Span::styled(format!("{}  ", title), Theme::body()),
            Span::styled(*detail, Theme::muted()),
        ]));
    }

    lines.push(Line::from(""));
    let mut stats = Vec::new();
    for (value, label) in QUICK_STATS {
        stats.push(Span::styled(*value, Theme::highlight()));
        stats.push(Span::styled(format!(" {}   ", label), Theme::secondary()));
    }
    lines.push(Line::from(stats));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("What you get", Theme::heading())));
    for (title, blurb) in FEATURE_GRID {
        lines.push(Line::from(vec![
            Span::styled(format!("• {}: ", title), Theme::body()),
            Span::styled(*blurb, Theme::muted()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
