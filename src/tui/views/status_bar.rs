//! Status bar view
//!
//! Shows the current route, theme and key hints

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let theme = &app.theme;
    let route = app.router.current();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", route.path()),
            theme.accent_style().add_modifier(Modifier::BOLD),
        ),
        Span::styled(route.title(), theme.text_style()),
        Span::styled(" │ ", theme.muted_style()),
        Span::styled(app.theme.mode.to_string(), theme.muted_style()),
    ];

    if app.focus == Focus::Newsletter {
        spans.push(Span::styled(" │ ", theme.muted_style()));
        spans.push(Span::styled("typing email", theme.accent_style()));
    }

    // Key hints (right-aligned)
    let hints = format!(
        " q:Quit  ?:Help  /:Search  {}:Palette ",
        app.navbar.chord()
    );

    let left_len: usize = spans.iter().map(|s| s.width()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, theme.muted_style()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use crate::config::settings::Settings;
    use crate::tui::app::tests::app;
    use crate::tui::views::tests::{draw, screen_text};

    #[test]
    fn test_status_bar_shows_route_and_hints() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.navigate("/contact");
        let text = screen_text(&draw(&mut app, 120, 30));
        let last = text.lines().last().unwrap_or_default().to_string();
        assert!(last.contains("/contact"));
        assert!(last.contains("Ctrl+K:Palette"));
        assert!(last.contains("dark"));
    }
}
