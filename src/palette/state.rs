//! Palette state machine
//!
//! The palette is either `Closed` or `Open` with a [`PaletteSession`]. A
//! session lives for exactly one open/close cycle: closing drops it, so a
//! reopened palette always starts from an empty query.
//!
//! Every open/close goes through [`CommandPalette::transition`], whether it
//! came from the global chord, the navbar button, Esc, an outside click or
//! a commit.

use log::debug;

use super::filter::filter;
use super::registry::{CommandDescriptor, Registry};

/// What opened the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTrigger {
    /// The global key chord
    Chord,
    /// An explicit trigger such as the navbar search button
    Button,
}

/// Why the palette closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Esc or an explicit close action
    Dismissed,
    /// Pointer click outside the palette bounds
    OutsideClick,
    /// A command was committed
    Committed,
    /// The global chord was pressed while open
    Chord,
}

/// Open/close requests handled by [`CommandPalette::transition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Open(OpenTrigger),
    Close(CloseReason),
    /// Open when closed, close when open (the global chord)
    Toggle,
}

/// State of one open palette
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSession {
    query: String,
    visible: Vec<&'static CommandDescriptor>,
    highlighted: Option<usize>,
}

impl PaletteSession {
    fn new(registry: &Registry) -> Self {
        let visible: Vec<_> = registry.list_all().iter().collect();
        let highlighted = if visible.is_empty() { None } else { Some(0) };
        Self {
            query: String::new(),
            visible,
            highlighted,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Commands matching the current query, in registry order
    pub fn visible_results(&self) -> &[&'static CommandDescriptor] {
        &self.visible
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_command(&self) -> Option<&'static CommandDescriptor> {
        self.highlighted.and_then(|i| self.visible.get(i).copied())
    }

    fn refilter(&mut self, registry: &Registry) {
        self.visible = filter(&self.query, registry.list_all());
        self.highlighted = match self.visible.len() {
            0 => None,
            len => Some(self.highlighted.unwrap_or(0).min(len - 1)),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
enum PaletteState {
    #[default]
    Closed,
    Open(PaletteSession),
}

/// The command palette
#[derive(Debug, Clone)]
pub struct CommandPalette {
    registry: Registry,
    state: PaletteState,
}

impl CommandPalette {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            state: PaletteState::Closed,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PaletteState::Open(_))
    }

    /// The live session, if the palette is open
    pub fn session(&self) -> Option<&PaletteSession> {
        match &self.state {
            PaletteState::Open(session) => Some(session),
            PaletteState::Closed => None,
        }
    }

    fn session_mut(&mut self) -> Option<&mut PaletteSession> {
        match &mut self.state {
            PaletteState::Open(session) => Some(session),
            PaletteState::Closed => None,
        }
    }

    /// Apply an open/close transition. Returns whether the state changed.
    pub fn transition(&mut self, transition: Transition) -> bool {
        match (transition, self.is_open()) {
            (Transition::Open(trigger), false) => {
                debug!("Command palette opened ({:?})", trigger);
                self.state = PaletteState::Open(PaletteSession::new(&self.registry));
                true
            }
            (Transition::Close(reason), true) => {
                debug!("Command palette closed ({:?})", reason);
                self.state = PaletteState::Closed;
                true
            }
            (Transition::Toggle, false) => self.transition(Transition::Open(OpenTrigger::Chord)),
            (Transition::Toggle, true) => self.transition(Transition::Close(CloseReason::Chord)),
            _ => false,
        }
    }

    pub fn open(&mut self, trigger: OpenTrigger) -> bool {
        self.transition(Transition::Open(trigger))
    }

    pub fn close(&mut self, reason: CloseReason) -> bool {
        self.transition(Transition::Close(reason))
    }

    pub fn toggle(&mut self) -> bool {
        self.transition(Transition::Toggle)
    }

    /// Replace the query and refilter
    pub fn set_query(&mut self, query: impl Into<String>) {
        let registry = self.registry;
        if let Some(session) = self.session_mut() {
            session.query = query.into();
            session.refilter(&registry);
        }
    }

    /// Append a character to the query
    pub fn push_char(&mut self, c: char) {
        let registry = self.registry;
        if let Some(session) = self.session_mut() {
            session.query.push(c);
            session.refilter(&registry);
        }
    }

    /// Remove the last character of the query
    pub fn pop_char(&mut self) {
        let registry = self.registry;
        if let Some(session) = self.session_mut() {
            if session.query.pop().is_some() {
                session.refilter(&registry);
            }
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Highlight the result under the pointer
    pub fn hover(&mut self, index: usize) {
        if let Some(session) = self.session_mut() {
            if index < session.visible.len() {
                session.highlighted = Some(index);
            }
        }
    }

    /// Drop the highlight without closing (pointer left the palette)
    pub fn clear_highlight(&mut self) {
        if let Some(session) = self.session_mut() {
            session.highlighted = None;
        }
    }

    /// Move the highlight down one row, stopping at the last result
    pub fn select_next(&mut self) {
        if let Some(session) = self.session_mut() {
            let len = session.visible.len();
            if len == 0 {
                return;
            }
            session.highlighted = Some(match session.highlighted {
                None => 0,
                Some(i) => (i + 1).min(len - 1),
            });
        }
    }

    /// Move the highlight up one row, stopping at the first result
    pub fn select_prev(&mut self) {
        if let Some(session) = self.session_mut() {
            if session.visible.is_empty() {
                return;
            }
            session.highlighted = Some(session.highlighted.map_or(0, |i| i.saturating_sub(1)));
        }
    }

    /// The highlighted command of the open session
    pub fn highlighted_command(&self) -> Option<&'static CommandDescriptor> {
        self.session().and_then(PaletteSession::highlighted_command)
    }
}

impl Default for CommandPalette {
    fn default() -> Self {
        Self::new(Registry::default())
    }
}
