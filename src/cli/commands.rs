//! Palette command CLI commands
//!
//! Lists and searches the command registry without starting the TUI.

use clap::Subcommand;
use log::debug;

use crate::display::commands::{
    format_command_details, format_command_json, format_command_table,
};
use crate::error::{ShellError, ShellResult};
use crate::palette::{filter, CommandDescriptor, Registry};

/// Commands subcommands
#[derive(Subcommand)]
pub enum CommandsCommands {
    /// List every palette command in registry order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the commands the palette would offer for a query
    Search {
        /// Search text, matched case-insensitively against labels
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one command by id (a path such as /pricing, or an action tag)
    Show {
        /// Command id
        id: String,
    },
}

/// Handle a commands subcommand
pub fn handle_commands_command(registry: &Registry, cmd: CommandsCommands) -> ShellResult<()> {
    let (commands, json): (Vec<&CommandDescriptor>, bool) = match cmd {
        CommandsCommands::Show { id } => {
            let command = find_command(registry, &id)?;
            print!("{}", format_command_details(command));
            return Ok(());
        }
        CommandsCommands::List { json } => (registry.list_all().iter().collect(), json),
        CommandsCommands::Search { query, json } => {
            let matches = filter(&query, registry.list_all());
            debug!("Query {:?} matched {} commands", query, matches.len());
            (matches, json)
        }
    };

    if json {
        println!("{}", format_command_json(&commands)?);
    } else {
        println!("{}", format_command_table(&commands));
    }
    Ok(())
}

/// Look up a command by id
pub fn find_command(registry: &Registry, id: &str) -> ShellResult<&'static CommandDescriptor> {
    registry
        .find(id.trim())
        .ok_or_else(|| ShellError::command_not_found(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_command() {
        let registry = Registry::default();
        assert_eq!(find_command(&registry, "/pricing").unwrap().label, "View Pricing");
        assert_eq!(find_command(&registry, "invite").unwrap().label, "Invite Team");
    }

    #[test]
    fn test_find_unknown_command() {
        let registry = Registry::default();
        let err = find_command(&registry, "/nowhere").unwrap_err();
        assert!(matches!(err, ShellError::NotFound { .. }));
        assert_eq!(err.to_string(), "Command not found: /nowhere");
    }
}
