use crate::app::state::*;
use crate::chat::{ChatMessage, Sender};
use crate::content::chatbot::INPUT_HINT;
use crate::ui::input_box;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::widgets;
use ratatui::prelude::*;
use ratatui::widgets::{
    List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

const TYPING_FRAMES: [&str; 4] = ["●○○", "○●○", "○○●", "○●○"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (main, sidebar) = layout::sidebar_split(area, area.width.saturating_sub(40).max(30));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Transcript
            Constraint::Length(1), // Typing indicator
            Constraint::Length(3), // Input
            Constraint::Length(1), // Hint
        ])
        .split(main);

    render_transcript(frame, rows[0], state);
    render_typing(frame, rows[1], state);
    input_box::render(frame, rows[2], state);
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", INPUT_HINT), Theme::muted())),
        rows[3],
    );

    render_quick_questions(frame, sidebar, state);
}

/// Header, wrapped body and a blank spacer for one message.
fn message_lines(msg: &ChatMessage, width: usize, timestamp_format: &str) -> Vec<Line<'static>> {
    let (name, style, indent) = match msg.sender {
        Sender::User => ("You", Theme::user_bubble(), "  "),
        Sender::Bot => ("Assistant", Theme::bot_bubble(), ""),
    };
    let ts = msg.timestamp.format(timestamp_format).to_string();

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{}{} ", indent, name), style.add_modifier(Modifier::BOLD)),
        Span::styled(ts, Theme::timestamp()),
    ])];
    let body_width = width.saturating_sub(indent.len() + 2);
    for part in widgets::wrap_text(&msg.text, body_width) {
        lines.push(Line::from(vec![
            Span::styled(format!("{}│ ", indent), style),
            Span::styled(part, Theme::body()),
        ]));
    }
    lines.push(Line::from(""));
    lines
}

fn render_transcript(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = widgets::panel("AI Learning Assistant", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let conversation = &state.conversation;
    let available_height = inner.height as usize;
    let width = inner.width.saturating_sub(1) as usize;
    let total = conversation.messages.len();

    // Newest message sits at the bottom; scroll_offset hides that many
    // messages from the end.
    let end = total.saturating_sub(conversation.scroll_offset);
    let mut lines: Vec<Line> = Vec::new();
    for msg in conversation.messages[..end].iter().rev() {
        let mut block_lines = message_lines(msg, width, &state.config.ui.timestamp_format);
        block_lines.extend(lines);
        lines = block_lines;
        if lines.len() >= available_height {
            break;
        }
    }
    let skip = lines.len().saturating_sub(available_height);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(visible), inner);

    // Scrollbar
    if total > 1 && (conversation.scroll_offset > 0 || skip > 0) {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(1)).position(end.saturating_sub(1));

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("┃")
            .track_symbol(Some("│"))
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());

        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn render_typing(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::new();
    if state.conversation.typing {
        let dots = TYPING_FRAMES[(state.tick_count / 5) as usize % TYPING_FRAMES.len()];
        spans.push(Span::styled(format!(" {} ", dots), Theme::bot_bubble()));
        spans.push(Span::styled("Assistant is typing...", Theme::muted()));
    }
    if state.session.listening {
        spans.push(Span::styled(
            "  🎙 Listening... speak your question",
            Style::default().fg(Theme::ACCENT_ROSE),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_quick_questions(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.chat_focus == ChatFocus::QuickQuestions;
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = state
        .resolver
        .questions()
        .iter()
        .map(|q| {
            let lines: Vec<Line> = widgets::wrap_text(q, width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Theme::secondary())))
                .collect();
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(widgets::panel("Quick Questions", focused))
        .highlight_style(if focused {
            Theme::selected()
        } else {
            Style::default()
        })
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected(Some(state.quick_question));
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::conversation::MessageId;
    use chrono::Local;

    #[test]
    fn test_message_lines_wrap_body() {
        let msg = ChatMessage {
            id: MessageId(1),
            text: "alpha beta gamma".to_string(),
            sender: Sender::Bot,
            timestamp: Local::now(),
        };
        let lines = message_lines(&msg, 12, "%H:%M");
        // header, two body lines, spacer
        assert_eq!(lines.len(), 4);
        assert!(lines[0].to_string().starts_with("Assistant "));
        assert_eq!(lines[1].to_string(), "│ alpha beta");
        assert_eq!(lines[2].to_string(), "│ gamma");
    }
}
