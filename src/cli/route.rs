//! Route CLI command
//!
//! Resolves a path the way the shell's router would.

use crate::display::commands::format_route;
use crate::error::ShellResult;
use crate::site::Route;

/// Resolve a path and print the view it lands on
pub fn handle_route_command(path: &str) -> ShellResult<()> {
    let route = Route::from_path(path);
    print!("{}", format_route(path, &route));
    Ok(())
}
