//! Display formatting for terminal output
//!
//! Provides utilities for formatting palette commands and routes for the
//! non-interactive subcommands.

pub mod commands;

pub use commands::{
    format_command_details, format_command_json, format_command_table, format_route, CommandRow,
};
