//! gyra-shell - the GyraLabs site as a terminal application
//!
//! This library provides the pieces of the GyraLabs marketing-site shell:
//! a command palette, the router and pages it navigates between, the
//! signed-in user's dashboard, and the ratatui front end that ties them
//! together.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: `log` backend setup
//! - `palette`: Command registry, filter, palette state machine, global chord
//! - `site`: Router, pages, navbar, identity, dashboard, newsletter
//! - `tui`: Terminal UI
//! - `cli`, `display`: Non-interactive subcommands and their output
//!
//! # Example
//!
//! ```rust,ignore
//! use gyra_shell::config::{paths::ShellPaths, settings::Settings};
//!
//! let paths = ShellPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! gyra_shell::tui::run_tui(&settings, &paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod palette;
pub mod site;
pub mod tui;

pub use error::{ShellError, ShellResult};
