//! Terminal User Interface module
//!
//! The site shell rendered with ratatui: navbar, content pages, the
//! dashboard, the footer with its newsletter form, and the command palette
//! overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
