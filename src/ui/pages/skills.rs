use crate::app::state::AppState;
use crate::content::skills::{
    category, my_skill, LearningCategory, ProgressSkill, CATEGORIES, CERTIFICATION_HINT, MY_SKILLS,
};
use crate::session::SkillTab;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Tabs, Wrap};

const TABS: [SkillTab; 2] = [SkillTab::MySkills, SkillTab::Available];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Min(6),    // List + details
            Constraint::Length(1), // Key help
        ])
        .split(area);

    let session = &state.session;
    let selected_tab = TABS.iter().position(|t| *t == session.selected_tab).unwrap_or(0);
    let tabs = Tabs::new(TABS.iter().map(|t| t.title()))
        .select(selected_tab)
        .style(Theme::secondary())
        .highlight_style(Theme::selected())
        .divider("│");
    frame.render_widget(tabs, rows[0]);

    let (left, right) = layout::sidebar_split(rows[1], 34);

    let titles: Vec<&str> = match session.selected_tab {
        SkillTab::MySkills => MY_SKILLS.iter().map(|s| s.title).collect(),
        SkillTab::Available => CATEGORIES.iter().map(|c| c.title).collect(),
    };
    let selected = session
        .selected_tab
        .skill_ids()
        .iter()
        .position(|id| *id == session.selected_skill);
    let items: Vec<ListItem> = titles
        .into_iter()
        .map(|t| ListItem::new(Span::styled(t, Theme::body())))
        .collect();
    let list = List::new(items)
        .block(widgets::panel(session.selected_tab.title(), true))
        .highlight_style(Theme::selected())
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, left, &mut list_state);

    match session.selected_tab {
        SkillTab::MySkills => {
            if let Some(skill) = my_skill(session.selected_skill) {
                render_progress(frame, right, skill);
            }
        }
        SkillTab::Available => {
            if let Some(cat) = category(session.selected_skill) {
                render_category(frame, right, cat);
            }
        }
    }

    let help: &[(&str, &str)] = match session.selected_tab {
        SkillTab::MySkills => &[("Tab", "switch tab"), ("↑↓", "select")],
        SkillTab::Available => &[("Tab", "switch tab"), ("↑↓", "select"), ("Enter", "learn more")],
    };
    frame.render_widget(Paragraph::new(widgets::key_help(help)), rows[2]);
}

fn render_progress(frame: &mut Frame, area: Rect, skill: &ProgressSkill) {
    let block = widgets::panel(skill.title, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar_width = (inner.width as usize).saturating_sub(40).clamp(6, 24);
    let mut lines = Vec::new();
    for module in skill.modules {
        let status = module.status();
        let mut row = vec![Span::styled(format!("{:<22}", module.name), Theme::body())];
        row.extend(widgets::progress_bar(module.progress, bar_width));
        row.push(Span::raw("  "));
        row.push(widgets::button(status.button_label(), Theme::key_hint()));
        lines.push(Line::from(row));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("🏅 ", Style::default().fg(Theme::ACCENT_AMBER)),
        Span::styled(CERTIFICATION_HINT, Theme::muted()),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_category(frame: &mut Frame, area: Rect, cat: &LearningCategory) {
    let block = widgets::panel(cat.title, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(cat.description, Theme::secondary())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Duration  ", Theme::muted()),
            Span::styled(cat.duration, Theme::body()),
        ]),
        Line::from(vec![
            Span::styled("Level     ", Theme::muted()),
            Span::styled(cat.level, Theme::body()),
        ]),
        Line::from(""),
    ];
    lines.push(Line::from(widgets::button("Learn More ⏎", Theme::key_hint())));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
