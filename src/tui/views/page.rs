//! Static content pages

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use crate::site::{page_for, TextLine};
use crate::tui::app::App;
use crate::tui::theme::Theme;

fn styled_line(line: TextLine, theme: &Theme) -> Line<'static> {
    match line {
        TextLine::Heading(text) => Line::styled(text, theme.accent_style()),
        TextLine::Tagline(text) => Line::styled(text, theme.muted_style()),
        TextLine::SectionHeading(text) => Line::styled(
            text,
            theme.text_style().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        TextLine::Body(text) => Line::styled(text, theme.text_style()),
        TextLine::Blank => Line::default(),
    }
}

/// Render the page for the current route
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(page) = page_for(app.router.current()) else {
        return;
    };

    let block = Block::default().padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    app.viewport_height = inner.height;

    // Keep the offset valid after a resize
    let max = app.content_rows().saturating_sub(inner.height.max(1));
    if app.scroll_offset > max {
        app.scroll_offset = max;
    }

    let lines: Vec<Line> = page
        .text_lines()
        .into_iter()
        .map(|line| styled_line(line, &app.theme))
        .collect();

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((app.scroll_offset, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use crate::config::settings::Settings;
    use crate::tui::app::tests::app;
    use crate::tui::views::tests::{draw, screen_text};

    #[test]
    fn test_not_found_page() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.navigate("/docs");
        let text = screen_text(&draw(&mut app, 120, 30));
        assert!(text.contains("404"));
        assert!(text.contains("This page could not be found."));
    }

    #[test]
    fn test_blog_page() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.navigate("/blog");
        let text = screen_text(&draw(&mut app, 120, 30));
        assert!(text.contains("Latest Insights"));
        assert!(text.contains("Coming soon..."));
    }

    #[test]
    fn test_scroll_offset_clamped_on_render() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.scroll_offset = 500;
        draw(&mut app, 120, 30);
        assert!(app.scroll_offset < app.content_rows());
    }
}
