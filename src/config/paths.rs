//! Path management for gyra-shell
//!
//! ## Path Resolution Order
//!
//! 1. `GYRA_SHELL_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/gyra-shell` on Linux,
//!    `~/Library/Application Support/com.GyraLabs.gyra-shell` on macOS,
//!    `%APPDATA%\GyraLabs\gyra-shell\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ShellError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "GYRA_SHELL_DIR";

/// Manages all paths used by gyra-shell
#[derive(Debug, Clone)]
pub struct ShellPaths {
    base_dir: PathBuf,
}

impl ShellPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ShellError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ShellPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the log file written while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("gyra.log")
    }

    /// Default location of the signed-in user's profile record
    pub fn profile_file(&self) -> PathBuf {
        self.base_dir.join("profile.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ShellError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ShellError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, ShellError> {
    ProjectDirs::from("com", "GyraLabs", "gyra-shell")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ShellError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShellPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("gyra.log"));
        assert_eq!(paths.profile_file(), temp_dir.path().join("profile.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DIR_ENV_VAR, custom_path);
        let paths = ShellPaths::new().unwrap();
        env::remove_var(DIR_ENV_VAR);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("gyra");
        let paths = ShellPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }
}
