//! Colour themes
//!
//! The dark/light preference comes from settings and can be flipped at
//! runtime. Views read colours from here instead of hard-coding them.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;

/// Colours used across the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub surface: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            text: Color::White,
            muted: Color::Gray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            surface: Color::Reset,
            highlight_bg: Color::Rgb(38, 38, 38),
            highlight_fg: Color::White,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            text: Color::Black,
            muted: Color::DarkGray,
            accent: Color::Blue,
            border: Color::Gray,
            surface: Color::White,
            highlight_bg: Color::Rgb(229, 229, 229),
            highlight_fg: Color::Black,
            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(202, 138, 4),
            error: Color::Rgb(220, 38, 38),
        }
    }

    pub fn with_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn toggle_mode(&self) -> Self {
        Self::with_mode(self.mode.toggle())
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .fg(self.highlight_fg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mode() {
        assert_eq!(Theme::with_mode(ThemeMode::Light), Theme::light());
        assert_eq!(Theme::default().mode, ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_mode() {
        let theme = Theme::dark().toggle_mode();
        assert_eq!(theme.mode, ThemeMode::Light);
        assert_eq!(theme.toggle_mode(), Theme::dark());
    }
}
