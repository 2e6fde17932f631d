use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(22, 20, 30);
    pub const BG_SURFACE: Color = Color::Rgb(32, 29, 44);
    pub const BG_ELEVATED: Color = Color::Rgb(44, 40, 60);
    pub const BORDER_DIM: Color = Color::Rgb(70, 64, 92);

    pub const TEXT_PRIMARY: Color = Color::Rgb(232, 228, 240);
    pub const TEXT_SECONDARY: Color = Color::Rgb(168, 160, 190);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 104, 130);

    // Brand gradient stops: primary (magenta), success (green), accent (amber).
    pub const ACCENT_PRIMARY: Color = Color::Rgb(214, 92, 170);
    pub const ACCENT_GREEN: Color = Color::Rgb(96, 206, 138);
    pub const ACCENT_AMBER: Color = Color::Rgb(236, 184, 84);
    pub const ACCENT_TEAL: Color = Color::Rgb(82, 200, 210);
    pub const ACCENT_ROSE: Color = Color::Rgb(232, 104, 120);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_PRIMARY)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn disabled() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::DIM)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn user_bubble() -> Style {
        Style::default().fg(Self::ACCENT_PRIMARY)
    }

    pub fn bot_bubble() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn badge(color: Color) -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    }

    pub fn progress_filled() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn progress_empty() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::ACCENT_PRIMARY)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }
}
