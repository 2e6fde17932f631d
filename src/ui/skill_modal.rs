use crate::app::state::AppState;
use crate::content::skills::{category, LEARNER_COUNT, SUCCESS_RATE};
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(cat) = state.modal.and_then(category) else {
        return;
    };

    let popup_area = layout::popup_area(frame.area(), 70, 80, 60, 20);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", cat.title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 3 || inner.width < 20 {
        return;
    }

    let details = &cat.details;
    let mut lines = vec![
        Line::from(Span::styled(cat.description, Theme::secondary())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Duration ", Theme::muted()),
            Span::styled(cat.duration, Theme::body()),
            Span::styled("   Level ", Theme::muted()),
            Span::styled(cat.level, Theme::body()),
        ]),
        Line::from(vec![
            Span::styled(LEARNER_COUNT, Theme::highlight()),
            Span::styled(" learners   ", Theme::secondary()),
            Span::styled(SUCCESS_RATE, Theme::highlight()),
            Span::styled(" success rate", Theme::secondary()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Course Modules", Theme::heading())),
    ];
    for (i, module) in details.modules.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), Theme::muted()),
            Span::styled(*module, Theme::body()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("What You'll Achieve", Theme::heading())));
    for outcome in details.outcomes {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(Theme::ACCENT_GREEN)),
            Span::styled(*outcome, Theme::body()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Tools Needed", Theme::heading())));
    lines.push(Line::from(Span::styled(
        format!("  {}", details.tools.join(" · ")),
        Theme::secondary(),
    )));

    let body_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body_area);

    // Footer buttons
    let footer_area = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
    let footer = Line::from(vec![
        widgets::button("Enter  Start Learning Now", Theme::key_hint()),
        Span::raw("  "),
        widgets::button("l/Esc  Save for Later", Theme::secondary()),
    ]);
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), footer_area);
}
