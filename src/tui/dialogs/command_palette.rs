//! Command palette dialog
//!
//! Search box, a "Suggestions" list of matching commands and their
//! shortcut hints. Row positions are recorded so the pointer can hover and
//! pick results.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, HighlightSpacing, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::palette::CommandDescriptor;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Theme;
use crate::tui::widgets::TextInput;

pub const PLACEHOLDER: &str = "search commands…";
pub const SECTION_HEADING: &str = "Suggestions";
pub const EMPTY_STATE: &str = "no results";

const WIDTH: u16 = 60;
const HEIGHT: u16 = 14;
const HIGHLIGHT_SYMBOL: &str = "› ";

/// Render the command palette
pub fn render(frame: &mut Frame, app: &mut App) {
    let Some(session) = app.palette.session() else {
        return;
    };
    let theme = app.theme.clone();
    let area = centered_rect_fixed(WIDTH, HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.hit.palette = Some(area);

    if inner.height < 4 || inner.width < 4 {
        return;
    }

    let input_area = Rect::new(inner.x, inner.y, inner.width, 1);
    frame.render_widget(
        TextInput::new(session.query())
            .prefix("⌕ ")
            .placeholder(PLACEHOLDER)
            .focused(true)
            .text_style(theme.text_style())
            .placeholder_style(theme.muted_style()),
        input_area,
    );

    let separator = Rect::new(inner.x, inner.y + 1, inner.width, 1);
    frame.render_widget(
        Paragraph::new("─".repeat(inner.width as usize)).style(theme.border_style()),
        separator,
    );

    let results_area = Rect::new(inner.x, inner.y + 2, inner.width, inner.height - 2);
    let results = session.visible_results();

    if results.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(EMPTY_STATE, theme.muted_style()).centered()),
            Rect::new(results_area.x, results_area.y + 1, results_area.width, 1),
        );
        return;
    }

    frame.render_widget(
        Paragraph::new(Line::styled(
            SECTION_HEADING,
            theme.muted_style().add_modifier(Modifier::BOLD),
        )),
        Rect::new(results_area.x, results_area.y, results_area.width, 1),
    );

    let rows = Rect::new(
        results_area.x,
        results_area.y + 1,
        results_area.width,
        results_area.height - 1,
    );
    let row_width = rows.width.saturating_sub(HIGHLIGHT_SYMBOL.chars().count() as u16) as usize;
    let items: Vec<ListItem> = results
        .iter()
        .map(|command| ListItem::new(result_line(command, row_width, &theme)))
        .collect();

    let list = List::new(items)
        .highlight_style(theme.highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);

    let mut state = ListState::default();
    state.select(session.highlighted_index());
    frame.render_stateful_widget(list, rows, &mut state);

    app.hit.palette_rows = Some(rows);
    app.hit.palette_offset = state.offset();
}

/// Icon and label on the left, shortcut keys flush right
fn result_line(command: &CommandDescriptor, width: usize, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{} ", command.icon.glyph()), theme.accent_style()),
        Span::styled(command.label, theme.text_style()),
    ];

    if let Some(keys) = command.shortcut {
        let key_spans: Vec<Span> = keys
            .iter()
            .flat_map(|key| {
                [
                    Span::raw(" "),
                    Span::styled(
                        format!(" {} ", key),
                        Style::default().fg(theme.muted).bg(theme.highlight_bg),
                    ),
                ]
            })
            .collect();
        let used: usize = spans.iter().chain(key_spans.iter()).map(|s| s.width()).sum();
        spans.push(Span::raw(" ".repeat(width.saturating_sub(used + 1))));
        spans.extend(key_spans);
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::palette::OpenTrigger;
    use crate::tui::app::tests::app;
    use crate::tui::views::tests::{draw, screen_text};

    #[test]
    fn test_open_palette_lists_suggestions() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_palette(OpenTrigger::Chord);
        let text = screen_text(&draw(&mut app, 100, 40));

        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains(SECTION_HEADING));
        assert!(text.contains("Go to Home"));
        assert!(text.contains("View Pricing"));

        let rows = app.hit.palette_rows.unwrap();
        assert!(app
            .hit
            .palette
            .unwrap()
            .contains(ratatui::layout::Position::new(rows.x, rows.y)));
        assert_eq!(app.hit.palette_offset, 0);
    }

    #[test]
    fn test_query_filters_and_empty_state() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_palette(OpenTrigger::Chord);
        app.palette.set_query("pric");
        let text = screen_text(&draw(&mut app, 100, 40));
        assert!(text.contains("View Pricing"));
        assert!(!text.contains("Go to Home"));

        app.palette.set_query("zzz");
        let text = screen_text(&draw(&mut app, 100, 40));
        assert!(text.contains(EMPTY_STATE));
        assert!(app.hit.palette_rows.is_none());
    }

    #[test]
    fn test_highlighted_row_uses_highlight_style() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_palette(OpenTrigger::Chord);
        app.palette.select_next();
        let buffer = draw(&mut app, 100, 40);
        let rows = app.hit.palette_rows.unwrap();
        let cell = &buffer[(rows.x + 4, rows.y + 1)];
        assert_eq!(cell.bg, app.theme.highlight_bg);
    }

    #[test]
    fn test_closed_palette_draws_nothing() {
        let settings = Settings::default();
        let mut app = app(&settings);
        draw(&mut app, 100, 40);
        assert!(app.hit.palette.is_none());
    }
}
