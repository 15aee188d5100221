//! Command and route display formatting
//!
//! Formats palette commands as tables and resolved routes as a short
//! outline for terminal output.

use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::palette::CommandDescriptor;
use crate::site::{page_for, Route, TextLine};

/// One palette command, as printed by `gyra commands`
#[derive(Debug, Serialize, Tabled)]
pub struct CommandRow {
    #[tabled(rename = "Id")]
    pub id: &'static str,
    #[tabled(rename = "Label")]
    pub label: &'static str,
    #[tabled(rename = "Icon")]
    pub icon: &'static str,
    #[tabled(rename = "Shortcut")]
    pub shortcut: String,
    #[tabled(rename = "Kind")]
    pub kind: &'static str,
}

impl From<&CommandDescriptor> for CommandRow {
    fn from(command: &CommandDescriptor) -> Self {
        Self {
            id: command.id,
            label: command.label,
            icon: command.icon.glyph(),
            shortcut: command
                .shortcut
                .map(|keys| keys.join(" "))
                .unwrap_or_default(),
            kind: if command.is_path() { "navigate" } else { "action" },
        }
    }
}

/// Format commands as a table
pub fn format_command_table(commands: &[&CommandDescriptor]) -> String {
    if commands.is_empty() {
        return "No matching commands.".to_string();
    }

    let rows: Vec<CommandRow> = commands.iter().map(|c| CommandRow::from(*c)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format a single command's details
pub fn format_command_details(command: &CommandDescriptor) -> String {
    let row = CommandRow::from(command);
    let mut output = String::new();
    output.push_str(&format!("Command: {}\n", row.label));
    output.push_str(&format!("  Id:       {}\n", row.id));
    output.push_str(&format!("  Kind:     {}\n", row.kind));
    output.push_str(&format!("  Icon:     {}\n", row.icon));
    if !row.shortcut.is_empty() {
        output.push_str(&format!("  Shortcut: {}\n", row.shortcut));
    }
    output
}

/// Format commands as pretty JSON
pub fn format_command_json(commands: &[&CommandDescriptor]) -> serde_json::Result<String> {
    let rows: Vec<CommandRow> = commands.iter().map(|c| CommandRow::from(*c)).collect();
    serde_json::to_string_pretty(&rows)
}

/// Format a resolved route with the outline of its page
pub fn format_route(input: &str, route: &Route) -> String {
    let mut output = String::new();
    output.push_str(&format!("Path:  {}\n", input));
    output.push_str(&format!("View:  {}\n", route.title()));
    output.push_str(&format!("Route: {}\n", route.path()));

    if route.requires_user() {
        output.push_str("Requires a signed-in user.\n");
    }

    if let Some(page) = page_for(route) {
        output.push('\n');
        for line in page.text_lines() {
            match line {
                TextLine::Heading(text) => output.push_str(&format!("{}\n", text)),
                TextLine::SectionHeading(text) => output.push_str(&format!("  - {}\n", text)),
                _ => {}
            }
        }
    }

    output
}
