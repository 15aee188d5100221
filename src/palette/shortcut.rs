//! Global key chords
//!
//! [`GlobalKeys`] is the process-wide table of chords that fire no matter
//! which element has focus. The event handler asks it about every key press
//! before anything else sees the key; a matching press is consumed so it
//! never reaches a focused text field.
//!
//! A component that owns a chord registers it on mount and keeps the
//! returned [`ListenerId`]. Releasing the id on unmount removes the entry.

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::ShellError;

/// A key combined with required modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Chord {
    /// The platform modifier ("command/control") plus a character
    pub const fn ctrl(c: char) -> Self {
        Self {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Whether a key event is a press of this chord
    ///
    /// Characters compare case-insensitively. A chord on CONTROL also accepts
    /// SUPER so terminals that report the command key behave the same.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.kind != KeyEventKind::Press {
            return false;
        }

        let key_matches = match (self.key, event.code) {
            (KeyCode::Char(want), KeyCode::Char(got)) => want.eq_ignore_ascii_case(&got),
            (want, got) => want == got,
        };
        if !key_matches {
            return false;
        }

        let mut held = event.modifiers - KeyModifiers::SHIFT;
        if self.modifiers.contains(KeyModifiers::CONTROL) && held.contains(KeyModifiers::SUPER) {
            held = (held - KeyModifiers::SUPER) | KeyModifiers::CONTROL;
        }
        held == self.modifiers - KeyModifiers::SHIFT
    }
}

impl Default for Chord {
    fn default() -> Self {
        Self::ctrl('k')
    }
}

impl FromStr for Chord {
    type Err = ShellError;

    /// Parse chords such as `ctrl+k`, `Ctrl+Alt+P` or `super+k`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ShellError::Config(format!("Invalid key chord: {:?}", s));

        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let (key_part, modifier_parts) = parts.split_last().ok_or_else(invalid)?;

        let mut modifiers = KeyModifiers::NONE;
        for part in modifier_parts {
            modifiers |= match part.to_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "cmd" | "super" | "meta" => KeyModifiers::SUPER,
                "alt" | "option" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return Err(invalid()),
            };
        }

        let key = match key_part.to_lowercase().as_str() {
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" => KeyCode::Esc,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(invalid()),
                }
            }
        };

        if modifiers.is_empty() {
            // A bare key would swallow typing everywhere
            return Err(invalid());
        }

        Ok(Self { key, modifiers })
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".into());
        }
        if self.modifiers.contains(KeyModifiers::SUPER) {
            parts.push("Cmd".into());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("Alt".into());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".into());
        }
        parts.push(match self.key {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            other => format!("{:?}", other),
        });
        write!(f, "{}", parts.join("+"))
    }
}

/// What a global chord does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    TogglePalette,
}

/// Handle for a registered chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

#[derive(Debug, Clone)]
struct Registration {
    id: ListenerId,
    chord: Chord,
    action: GlobalAction,
}

/// Process-wide chord table
#[derive(Debug, Default)]
pub struct GlobalKeys {
    registrations: Vec<Registration>,
    next_id: u32,
}

impl GlobalKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chord, returning the handle needed to release it
    pub fn register(&mut self, chord: Chord, action: GlobalAction) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.registrations.push(Registration { id, chord, action });
        id
    }

    /// Release a registration. Returns false if it was already gone.
    pub fn release(&mut self, id: ListenerId) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.id != id);
        self.registrations.len() != before
    }

    /// The action bound to this key press, if any
    pub fn intercept(&self, event: &KeyEvent) -> Option<GlobalAction> {
        self.registrations
            .iter()
            .find(|r| r.chord.matches(event))
            .map(|r| r.action)
    }

    /// Number of live registrations
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_k_matches() {
        let chord = Chord::default();
        assert!(chord.matches(&press(KeyCode::Char('k'), KeyModifiers::CONTROL)));
        assert!(chord.matches(&press(KeyCode::Char('K'), KeyModifiers::CONTROL | KeyModifiers::SHIFT)));
        assert!(chord.matches(&press(KeyCode::Char('k'), KeyModifiers::SUPER)));
    }

    #[test]
    fn test_plain_k_does_not_match() {
        let chord = Chord::default();
        assert!(!chord.matches(&press(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!chord.matches(&press(KeyCode::Char('j'), KeyModifiers::CONTROL)));
        assert!(!chord.matches(&press(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL | KeyModifiers::ALT
        )));
    }

    #[test]
    fn test_release_and_repeat_do_not_match() {
        let chord = Chord::default();
        let release = KeyEvent {
            code: KeyCode::Char('k'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..release
        };
        assert!(!chord.matches(&release));
        assert!(!chord.matches(&repeat));
    }

    #[test]
    fn test_parse_chords() {
        assert_eq!("ctrl+k".parse::<Chord>().unwrap(), Chord::ctrl('k'));
        assert_eq!(" Ctrl + P ".parse::<Chord>().unwrap(), Chord::ctrl('p'));

        let alt = "alt+space".parse::<Chord>().unwrap();
        assert_eq!(alt.key, KeyCode::Char(' '));
        assert_eq!(alt.modifiers, KeyModifiers::ALT);
    }

    #[test]
    fn test_parse_rejects_bad_chords() {
        for bad in ["", "k", "ctrl+", "hyper+k", "ctrl+kk"] {
            let err = bad.parse::<Chord>().unwrap_err();
            assert!(matches!(err, ShellError::Config(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Chord::ctrl('k').to_string(), "Ctrl+K");
    }

    #[test]
    fn test_register_intercept_release() {
        let mut keys = GlobalKeys::new();
        let ctrl_k = press(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(keys.intercept(&ctrl_k), None);

        let id = keys.register(Chord::default(), GlobalAction::TogglePalette);
        assert_eq!(keys.intercept(&ctrl_k), Some(GlobalAction::TogglePalette));
        assert_eq!(keys.len(), 1);

        assert!(keys.release(id));
        assert!(!keys.release(id));
        assert!(keys.is_empty());
        assert_eq!(keys.intercept(&ctrl_k), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut keys = GlobalKeys::new();
        let a = keys.register(Chord::ctrl('k'), GlobalAction::TogglePalette);
        let b = keys.register(Chord::ctrl('p'), GlobalAction::TogglePalette);
        assert_ne!(a, b);
        keys.release(a);
        assert_eq!(keys.len(), 1);
    }
}
