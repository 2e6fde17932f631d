use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub nav_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navigation tabs
            Constraint::Min(5),    // Page content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        nav_bar: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}

/// Split `area` into a narrow left column and a wide right column.
pub fn sidebar_split(area: Rect, sidebar_width: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(30)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Centered popup: `pct_w`/`pct_h` percent of `area`, at least `min_w`x`min_h`
/// but never larger than the area itself.
pub fn popup_area(area: Rect, pct_w: u16, pct_h: u16, min_w: u16, min_h: u16) -> Rect {
    let w = ((area.width as u32 * pct_w as u32 / 100) as u16)
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let h = ((area.height as u32 * pct_h as u32 / 100) as u16)
        .max(min_h)
        .min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_rows() {
        let l = compute_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(l.nav_bar.height, 1);
        assert_eq!(l.status_bar.y, 39);
        assert_eq!(l.content.height, 38);
    }

    #[test]
    fn test_popup_stays_inside_small_areas() {
        let area = Rect::new(0, 0, 50, 12);
        let p = popup_area(area, 70, 80, 60, 20);
        assert!(p.width <= 46);
        assert!(p.height <= 10);
        assert!(p.right() <= area.right());
        assert!(p.bottom() <= area.bottom());
    }

    #[test]
    fn test_popup_on_very_wide_terminal() {
        let area = Rect::new(0, 0, 2000, 30);
        let p = popup_area(area, 70, 80, 60, 20);
        assert_eq!(p.width, 1400);
        assert_eq!(p.height, 24);
        assert_eq!(p.x, 300);
        assert_eq!(p.y, 3);
    }
}
