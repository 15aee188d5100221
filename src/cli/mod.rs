//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the palette and site layers.

pub mod commands;
pub mod route;

pub use commands::{handle_commands_command, CommandsCommands};
pub use route::handle_route_command;
