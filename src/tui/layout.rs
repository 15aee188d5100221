//! Layout definitions for the TUI
//!
//! Navbar on top, page content, footer with the newsletter form, and a
//! status line. The navbar row collapses to nothing while it is hidden.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Rows taken by the navbar when visible
pub const NAVBAR_HEIGHT: u16 = 3;

/// Rows taken by the footer
pub const FOOTER_HEIGHT: u16 = 6;

/// Layout regions for the TUI
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub navbar: Rect,
    pub content: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, navbar_hidden: bool) -> Self {
        let navbar_height = if navbar_hidden { 0 } else { NAVBAR_HEIGHT };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(navbar_height),
                Constraint::Min(3),
                Constraint::Length(FOOTER_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            navbar: chunks[0],
            content: chunks[1],
            footer: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Sidebar + main split of the dashboard
#[derive(Debug, Clone, Copy)]
pub struct DashboardLayout {
    pub sidebar: Rect,
    pub main: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(30)])
            .split(area);

        Self {
            sidebar: chunks[0],
            main: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Whether a terminal cell lies inside `rect`
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_navbar_gives_rows_to_content() {
        let area = Rect::new(0, 0, 120, 40);
        let shown = AppLayout::new(area, false);
        let hidden = AppLayout::new(area, true);

        assert_eq!(shown.navbar.height, NAVBAR_HEIGHT);
        assert_eq!(hidden.navbar.height, 0);
        assert_eq!(hidden.content.height, shown.content.height + NAVBAR_HEIGHT);
        assert_eq!(shown.status_bar.y, 39);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect_fixed(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect_fixed(60, 20, area), Rect::new(0, 0, 40, 10));
    }

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(5, 5, 3, 2);
        assert!(contains(rect, 5, 5));
        assert!(contains(rect, 7, 6));
        assert!(!contains(rect, 8, 6));
        assert!(!contains(rect, 5, 7));
    }
}
