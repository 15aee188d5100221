//! Logger setup
//!
//! The TUI owns the terminal, so while it runs log lines go to a file.
//! One-shot CLI commands log to stderr. `RUST_LOG` overrides the configured
//! level in both cases.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::{ShellError, ShellResult};

/// `level` takes env_logger filter syntax, e.g. `warn,gyra_shell::palette=debug`
fn builder(level: &str) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {} {}] {}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder
}

/// Log to `log_file`, appending
pub fn init_file(level: &str, log_file: &Path) -> ShellResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| ShellError::Io(format!("Failed to open log file: {}", e)))?;

    // A logger may already be installed (tests); keep it.
    let _ = builder(level).target(Target::Pipe(Box::new(file))).try_init();
    Ok(())
}

/// Log to stderr
pub fn init_stderr(level: &str) {
    let _ = builder(level).target(Target::Stderr).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    use log::{Level, LevelFilter, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, level: Level, target: &str) -> bool {
        logger.enabled(&Metadata::builder().level(level).target(target).build())
    }

    #[test]
    fn test_plain_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let logger = builder("warn").build();
        assert_eq!(logger.filter(), LevelFilter::Warn);
        assert!(!enabled(&logger, Level::Info, "gyra_shell::site::router"));
    }

    #[test]
    fn test_module_directives() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let logger = builder("warn,gyra_shell::palette=debug").build();
        assert!(enabled(&logger, Level::Debug, "gyra_shell::palette::state"));
        assert!(!enabled(&logger, Level::Debug, "gyra_shell::site::router"));
        assert!(enabled(&logger, Level::Warn, "gyra_shell::site::router"));
    }

    #[test]
    fn test_init_file_creates_log() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("gyra.log");
        init_file("info", &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_file_bad_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("gyra.log");
        assert!(init_file("info", &path).is_err());
    }
}
