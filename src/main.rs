use anyhow::Result;
use clap::{Parser, Subcommand};

use gyra_shell::cli::{handle_commands_command, handle_route_command, CommandsCommands};
use gyra_shell::config::{paths::ShellPaths, settings::Settings};
use gyra_shell::logging;
use gyra_shell::palette::Registry;

#[derive(Parser)]
#[command(
    name = "gyra",
    author = "GyraLabs",
    version,
    about = "GyraLabs site shell for the terminal",
    long_about = "gyra renders the GyraLabs site as a terminal UI: navbar, pages, \
                  the user dashboard and a Ctrl+K command palette. The subcommands \
                  expose the palette and router without starting the UI."
)]
struct Cli {
    /// Log filter, e.g. `debug` or `warn,gyra_shell::palette=debug`
    #[arg(long, global = true, env = "GYRA_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Inspect the command palette registry
    #[command(subcommand)]
    Commands(CommandsCommands),

    /// Show what a path resolves to
    Route {
        /// Path such as /blog or /#pricing
        path: String,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ShellPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let level = cli.log_level.as_deref().unwrap_or(&settings.log_level);

    match cli.command {
        None | Some(Commands::Tui) => {
            // The TUI owns the terminal, so logs go to a file
            paths.ensure_directories()?;
            logging::init_file(level, &paths.log_file())?;
            gyra_shell::tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Commands(cmd)) => {
            logging::init_stderr(level);
            handle_commands_command(&Registry::default(), cmd)?;
        }
        Some(Commands::Route { path }) => {
            logging::init_stderr(level);
            handle_route_command(&path)?;
        }
        Some(Commands::Init) => {
            logging::init_stderr(level);
            settings.save(&paths)?;
            println!("Wrote settings to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            logging::init_stderr(level);
            println!("gyra-shell Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!("Profile file:   {}", settings.profile_file(&paths).display());
            println!();
            println!("Settings:");
            println!("  Theme:             {}", settings.theme);
            println!("  Palette chord:     {}", settings.chord()?);
            println!("  Navbar hide after: {} rows", settings.navbar_hide_after);
            println!("  Compact width:     {} columns", settings.compact_width);
            println!("  Tick rate:         {} ms", settings.tick_rate_ms);
            println!("  Newsletter reset:  {} s", settings.newsletter_reset_secs);
            println!("  Log level:         {}", settings.log_level);
        }
    }

    Ok(())
}
