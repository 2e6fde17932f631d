use crate::app::state::AppState;
use crate::content::dashboard::{TUTORIAL_STEPS, TUTORIAL_SUMMARY, TUTORIAL_TITLE, VOICE_COMMANDS};
use crate::session::voice::{Language, PlaybackSpeed, VoiceKind};
use crate::session::SessionState;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

const PULSE: [&str; 4] = ["◜", "◝", "◞", "◟"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(area);

    let (left, right) = layout::sidebar_split(rows[0], 32);
    render_settings(frame, left, &state.session);
    render_tutorial(frame, right, &state.session, state.tick_count);

    frame.render_widget(
        Paragraph::new(widgets::key_help(&[
            ("Space", "listen"),
            ("p", "play/pause"),
            ("←→", "step"),
            ("l", "language"),
            ("s", "speed"),
            ("g", "voice"),
            ("a", "auto-play"),
        ])),
        rows[1],
    );
}

fn option_row<T: PartialEq + std::fmt::Display>(label: &str, all: &[T], current: &T) -> Line<'static> {
    let mut spans = vec![Span::styled(format!("{:<10}", label), Theme::muted())];
    for option in all {
        let style = if option == current {
            Theme::selected()
        } else {
            Theme::secondary()
        };
        spans.push(Span::styled(format!(" {} ", option), style));
    }
    Line::from(spans)
}

fn render_settings(frame: &mut Frame, area: Rect, session: &SessionState) {
    let block = widgets::panel("Voice Settings", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{:<10}", "Language"), Theme::muted()),
        Span::styled(session.language.native_name(), Theme::highlight()),
    ])];
    let others: Vec<String> = Language::ALL.iter().map(|l| l.to_string()).collect();
    lines.push(Line::from(Span::styled(
        format!("{:<10}{}", "", others.join(" · ")),
        Theme::muted(),
    )));
    lines.push(Line::from(""));
    lines.push(option_row("Speed", &PlaybackSpeed::ALL, &session.speed));
    lines.push(option_row("Voice", &VoiceKind::ALL, &session.voice));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<10}", "Auto-play"), Theme::muted()),
        if session.auto_play {
            Span::styled(" On ", Theme::badge(Theme::ACCENT_GREEN))
        } else {
            Span::styled(" Off ", Theme::badge(Theme::TEXT_MUTED))
        },
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Try saying", Theme::heading())));
    for command in VOICE_COMMANDS {
        lines.push(Line::from(Span::styled(format!("  \"{}\"", command), Theme::secondary())));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_tutorial(frame: &mut Frame, area: Rect, session: &SessionState, tick: u64) {
    let block = widgets::panel(TUTORIAL_TITLE, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total = TUTORIAL_STEPS.len();
    let step = session.step.min(total.saturating_sub(1));

    let mut step_row = vec![
        Span::styled(format!("Step {} of {}", step + 1, total), Theme::heading()),
        Span::raw("  "),
    ];
    step_row.extend(widgets::progress_bar(((step + 1) * 100 / total.max(1)) as u16, 20));

    let mut lines = vec![
        Line::from(Span::styled(TUTORIAL_SUMMARY, Theme::secondary())),
        Line::from(""),
        Line::from(step_row),
        Line::from(""),
    ];
    if let Some(text) = TUTORIAL_STEPS.get(step) {
        lines.push(Line::from(Span::styled(*text, Theme::body())));
    }
    lines.push(Line::from(""));

    let frame_idx = (tick / 4) as usize % PULSE.len();
    let mic = if session.listening {
        Span::styled(
            format!("{} Listening... speak now", PULSE[frame_idx]),
            Style::default().fg(Theme::ACCENT_ROSE).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("🎙 Press Space to speak", Theme::muted())
    };
    let playback = if session.playing {
        Span::styled(format!("  ▶ Playing ({})", session.speed), Theme::highlight())
    } else {
        Span::styled("  ⏸ Paused", Theme::secondary())
    };
    lines.push(Line::from(vec![mic, playback]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
