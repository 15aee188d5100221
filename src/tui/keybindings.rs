//! Keybinding definitions
//!
//! The table drives the help dialog. The palette chord is configurable, so
//! its entry here shows the default and the help dialog prints the live one.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: &'static str,
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Global,
    /// Scrolling a content page
    Page,
    Dashboard,
    /// Newsletter email field focused
    Newsletter,
    /// Command palette open
    Palette,
}

impl KeyContext {
    /// Contexts in help-dialog order
    pub const ALL: [KeyContext; 5] = [
        KeyContext::Global,
        KeyContext::Page,
        KeyContext::Dashboard,
        KeyContext::Newsletter,
        KeyContext::Palette,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Page => "Pages",
            Self::Dashboard => "Dashboard",
            Self::Newsletter => "Newsletter",
            Self::Palette => "Command Palette",
        }
    }
}

const fn bind(
    key: KeyCode,
    modifiers: KeyModifiers,
    description: &'static str,
    context: KeyContext,
) -> Keybinding {
    Keybinding {
        key,
        modifiers,
        description,
        context,
    }
}

const NONE: KeyModifiers = KeyModifiers::NONE;

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    bind(KeyCode::Char('k'), KeyModifiers::CONTROL, "Toggle command palette", KeyContext::Global),
    bind(KeyCode::Char('/'), NONE, "Search commands", KeyContext::Global),
    bind(KeyCode::Char('?'), NONE, "Help", KeyContext::Global),
    bind(KeyCode::Char('q'), NONE, "Quit", KeyContext::Global),
    bind(KeyCode::Char('b'), NONE, "Back", KeyContext::Global),
    bind(KeyCode::Char('t'), NONE, "Toggle dark/light theme", KeyContext::Global),
    bind(KeyCode::Char('m'), NONE, "Toggle navbar menu (narrow terminals)", KeyContext::Global),
    bind(KeyCode::Char('n'), NONE, "Focus newsletter email", KeyContext::Global),
    bind(KeyCode::Char('1'), NONE, "Dashboard", KeyContext::Global),
    bind(KeyCode::Char('2'), NONE, "About", KeyContext::Global),
    bind(KeyCode::Char('3'), NONE, "Blog", KeyContext::Global),
    bind(KeyCode::Char('4'), NONE, "Peanut", KeyContext::Global),
    bind(KeyCode::Char('5'), NONE, "Contact", KeyContext::Global),
    bind(KeyCode::Char('6'), NONE, "Pricing", KeyContext::Global),
    // Page
    bind(KeyCode::Down, NONE, "Scroll down", KeyContext::Page),
    bind(KeyCode::Up, NONE, "Scroll up", KeyContext::Page),
    bind(KeyCode::PageDown, NONE, "Scroll a page down", KeyContext::Page),
    bind(KeyCode::PageUp, NONE, "Scroll a page up", KeyContext::Page),
    bind(KeyCode::Char('g'), NONE, "Go to top", KeyContext::Page),
    // Dashboard
    bind(KeyCode::Left, NONE, "Previous tab", KeyContext::Dashboard),
    bind(KeyCode::Right, NONE, "Next tab", KeyContext::Dashboard),
    bind(KeyCode::Char('L'), KeyModifiers::SHIFT, "Log out", KeyContext::Dashboard),
    // Newsletter
    bind(KeyCode::Enter, NONE, "Subscribe", KeyContext::Newsletter),
    bind(KeyCode::Esc, NONE, "Leave the form", KeyContext::Newsletter),
    // Palette
    bind(KeyCode::Up, NONE, "Previous result", KeyContext::Palette),
    bind(KeyCode::Down, NONE, "Next result", KeyContext::Palette),
    bind(KeyCode::Enter, NONE, "Run highlighted command", KeyContext::Palette),
    bind(KeyCode::Char('u'), KeyModifiers::CONTROL, "Clear search", KeyContext::Palette),
    bind(KeyCode::Esc, NONE, "Close", KeyContext::Palette),
];

/// Keybindings of one context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    // Shift is implied by an upper-case character
    if kb.modifiers.contains(KeyModifiers::SHIFT) && !matches!(kb.key, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(c) if kb.modifiers.contains(KeyModifiers::CONTROL) => {
            c.to_ascii_uppercase().to_string()
        }
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(key_str);
    parts.join("+")
}
