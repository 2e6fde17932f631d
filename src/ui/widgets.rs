//! Small building blocks shared by the pages.

use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};
use unicode_width::UnicodeWidthStr;

pub fn panel<'a>(title: &'a str, focused: bool) -> Block<'a> {
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    Block::default()
        .title(format!(" {} ", title))
        .title_style(if focused { Theme::title() } else { Theme::secondary() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg)
}

/// `███████░░░ 68%` style bar, `width` cells for the bar itself.
pub fn progress_bar(percent: u16, width: usize) -> Vec<Span<'static>> {
    let percent = percent.min(100);
    let filled = width * percent as usize / 100;
    vec![
        Span::styled("█".repeat(filled), Theme::progress_filled()),
        Span::styled("░".repeat(width - filled), Theme::progress_empty()),
        Span::styled(format!(" {:>3}%", percent), Theme::secondary()),
    ]
}

/// Footer line of `key label` pairs.
pub fn key_help(pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, label) in pairs {
        spans.push(Span::styled(format!(" {}", key), Theme::key_hint()));
        spans.push(Span::styled(format!(" {} ", label), Theme::secondary()));
    }
    Line::from(spans)
}

/// Button-like label; `[ Try Now ]`.
pub fn button(label: &str, style: Style) -> Span<'static> {
    Span::styled(format!("[ {} ]", label), style)
}

/// Greedy word wrap measured in terminal cells. Words wider than `width`
/// get a line of their own and are left for the renderer to clip.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
            } else if line.width() + 1 + word.width() <= width {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            }
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(text(&progress_bar(50, 10)), "█████░░░░░  50%");
        assert_eq!(text(&progress_bar(0, 4)), "░░░░   0%");
        assert_eq!(text(&progress_bar(250, 4)), "████ 100%");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap_text("₹10 lakhs", 4), vec!["₹10", "lakhs"]);
    }
}
