//! Help dialog
//!
//! Lists the keyboard shortcuts of every context

use ratatui::{
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext, Keybinding};
use crate::tui::layout::centered_rect;
use crate::tui::theme::Theme;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(app.theme.accent_style().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(app.theme.accent_style());

    let lines = help_lines(app);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let mut lines = Vec::new();

    for context in KeyContext::ALL {
        lines.push(Line::styled(
            context.title(),
            theme.text_style().add_modifier(Modifier::BOLD),
        ));
        for kb in get_keybindings(context) {
            lines.push(key_line(&key_label(app, kb), kb.description, theme));
        }
        lines.push(Line::default());
    }

    lines.push(Line::styled("Press any key to close", theme.muted_style()));
    lines
}

/// The palette toggle shows the configured chord, not the default
fn key_label(app: &App, kb: &Keybinding) -> String {
    if kb.context == KeyContext::Global && kb.description == "Toggle command palette" {
        app.navbar.chord().to_string()
    } else {
        format_keybinding(kb)
    }
}

/// Create a formatted key line
fn key_line(key: &str, description: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}", key), theme.accent_style()),
        Span::raw("  "),
        Span::styled(description, theme.text_style()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::tui::app::tests::app;
    use crate::tui::app::ActiveDialog;
    use crate::tui::views::tests::{draw, screen_text};

    #[test]
    fn test_help_lists_every_context() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_dialog(ActiveDialog::Help);
        let text = screen_text(&draw(&mut app, 120, 80));
        for context in KeyContext::ALL {
            assert!(text.contains(context.title()), "missing {}", context.title());
        }
        assert!(text.contains("Press any key to close"));
    }

    #[test]
    fn test_help_shows_configured_chord() {
        let settings = Settings {
            palette_chord: "Ctrl+P".into(),
            ..Settings::default()
        };
        let app = app(&settings);
        let lines: Vec<String> = help_lines(&app)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(lines
            .iter()
            .any(|l| l.contains("Ctrl+P") && l.contains("Toggle command palette")));
    }
}
