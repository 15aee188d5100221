//! Command definitions for the command palette
//!
//! The registry is a static, ordered list. Registry order is the order the
//! palette shows when the search box is empty.

use std::collections::HashSet;

use crate::error::{ShellError, ShellResult};

/// Glyph reference for a command. The renderer decides how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    Info,
    CreditCard,
    FileText,
    Zap,
    Settings,
    BarChart,
    UserPlus,
}

impl Icon {
    /// Terminal glyph for this icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Info => "ℹ",
            Self::CreditCard => "▭",
            Self::FileText => "≡",
            Self::Zap => "ϟ",
            Self::Settings => "⚙",
            Self::BarChart => "▥",
            Self::UserPlus => "+",
        }
    }
}

/// A command shown in the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Either a path starting with `/` or an opaque action tag
    pub id: &'static str,
    /// Display label, also what the search box matches against
    pub label: &'static str,
    pub icon: Icon,
    /// Key names shown next to the label. Display only; not bound.
    pub shortcut: Option<&'static [&'static str]>,
}

impl CommandDescriptor {
    /// Whether the id is a navigable path
    pub fn is_path(&self) -> bool {
        self.id.starts_with('/')
    }
}

/// The site's commands, in display order
pub static DEFAULT_COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        id: "/",
        label: "Go to Home",
        icon: Icon::Home,
        shortcut: Some(&["⌘", "H"]),
    },
    CommandDescriptor {
        id: "/about",
        label: "About GyraLabs",
        icon: Icon::Info,
        shortcut: Some(&["⌘", "A"]),
    },
    CommandDescriptor {
        id: "/pricing",
        label: "View Pricing",
        icon: Icon::CreditCard,
        shortcut: Some(&["⌘", "P"]),
    },
    CommandDescriptor {
        id: "/docs",
        label: "Read Documentation",
        icon: Icon::FileText,
        shortcut: Some(&["⌘", "D"]),
    },
    CommandDescriptor {
        id: "/signup",
        label: "Start for Free",
        icon: Icon::Zap,
        shortcut: Some(&["⌘", "S"]),
    },
    CommandDescriptor {
        id: "settings",
        label: "Settings",
        icon: Icon::Settings,
        shortcut: Some(&["⌘", ","]),
    },
    CommandDescriptor {
        id: "analytics",
        label: "Analytics",
        icon: Icon::BarChart,
        shortcut: Some(&["⌘", "Y"]),
    },
    CommandDescriptor {
        id: "invite",
        label: "Invite Team",
        icon: Icon::UserPlus,
        shortcut: Some(&["⌘", "I"]),
    },
];

/// Read-only, ordered set of commands with unique ids
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    commands: &'static [CommandDescriptor],
}

impl Registry {
    /// Build a registry, rejecting duplicate ids
    pub fn new(commands: &'static [CommandDescriptor]) -> ShellResult<Self> {
        let mut seen = HashSet::new();
        for cmd in commands {
            if !seen.insert(cmd.id) {
                return Err(ShellError::Validation(format!(
                    "Duplicate command id: {}",
                    cmd.id
                )));
            }
        }
        Ok(Self { commands })
    }

    /// All commands in display order
    pub fn list_all(&self) -> &'static [CommandDescriptor] {
        self.commands
    }

    /// Find a command by id
    pub fn find(&self, id: &str) -> Option<&'static CommandDescriptor> {
        self.commands.iter().find(|cmd| cmd.id == id)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            commands: DEFAULT_COMMANDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_is_valid() {
        let registry = Registry::new(DEFAULT_COMMANDS).unwrap();
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.list_all()[0].id, "/");
        assert_eq!(registry.list_all()[7].id, "invite");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        static DUPES: &[CommandDescriptor] = &[
            CommandDescriptor {
                id: "/",
                label: "Home",
                icon: Icon::Home,
                shortcut: None,
            },
            CommandDescriptor {
                id: "/",
                label: "Also Home",
                icon: Icon::Home,
                shortcut: None,
            },
        ];

        let err = Registry::new(DUPES).unwrap_err();
        assert!(matches!(err, ShellError::Validation(_)));
    }

    #[test]
    fn test_find() {
        let registry = Registry::default();
        assert_eq!(registry.find("/pricing").unwrap().label, "View Pricing");
        assert!(registry.find("/nope").is_none());
    }

    #[test]
    fn test_path_vs_action_ids() {
        let registry = Registry::default();
        assert!(registry.find("/docs").unwrap().is_path());
        assert!(!registry.find("analytics").unwrap().is_path());
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new(&[]).unwrap();
        assert!(registry.is_empty());
        assert!(registry.list_all().is_empty());
    }
}
