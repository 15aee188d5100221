//! Command palette core
//!
//! A UI-independent command palette: a static registry of commands, a label
//! filter, the open/closed state machine, the global chord that toggles it,
//! and the dispatcher that turns a chosen command into a navigation intent.
//!
//! ```text
//! key event ──► GlobalKeys::intercept ──► CommandPalette::transition(Toggle)
//!     │
//!     └──► CommandPalette::push_char ──► filter() ──► visible results
//!                                                        │
//!                      Enter / click ──► dispatch::commit ──► IntentSink
//! ```

pub mod dispatch;
pub mod filter;
pub mod registry;
pub mod shortcut;
pub mod state;

pub use dispatch::{commit, commit_highlighted, IntentSink, NavigationIntent};
pub use filter::filter;
pub use registry::{CommandDescriptor, Icon, Registry, DEFAULT_COMMANDS};
pub use shortcut::{Chord, GlobalAction, GlobalKeys, ListenerId};
pub use state::{CloseReason, CommandPalette, OpenTrigger, PaletteSession, Transition};
