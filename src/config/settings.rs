//! User settings for gyra-shell
//!
//! Manages user preferences including the theme, the palette chord, navbar
//! behaviour and logging.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ShellPaths;
use crate::error::ShellError;
use crate::palette::shortcut::Chord;

/// Dark or light theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// User settings for gyra-shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub theme: ThemeMode,

    /// Key chord that toggles the command palette (e.g. "ctrl+k")
    #[serde(default = "default_palette_chord")]
    pub palette_chord: String,

    /// Scroll offset (rows) past which scrolling down hides the navbar
    #[serde(default = "default_navbar_hide_after")]
    pub navbar_hide_after: u16,

    /// Terminal width (columns) below which the navbar collapses
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,

    /// Event loop tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Seconds a newsletter result stays on screen before the form resets
    #[serde(default = "default_newsletter_reset_secs")]
    pub newsletter_reset_secs: u64,

    /// Log filter in env_logger syntax (`info`, `warn,gyra_shell::palette=debug`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Override for the profile file read by the identity provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_palette_chord() -> String {
    "ctrl+k".to_string()
}

fn default_navbar_hide_after() -> u16 {
    15
}

fn default_compact_width() -> u16 {
    100
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_newsletter_reset_secs() -> u64 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            theme: ThemeMode::default(),
            palette_chord: default_palette_chord(),
            navbar_hide_after: default_navbar_hide_after(),
            compact_width: default_compact_width(),
            tick_rate_ms: default_tick_rate_ms(),
            newsletter_reset_secs: default_newsletter_reset_secs(),
            log_level: default_log_level(),
            profile_path: None,
        }
    }
}

impl Settings {
    /// Parse the configured palette chord
    pub fn chord(&self) -> Result<Chord, ShellError> {
        self.palette_chord.parse()
    }

    /// Resolve the profile file, honouring the override
    pub fn profile_file(&self, paths: &ShellPaths) -> PathBuf {
        self.profile_path
            .clone()
            .unwrap_or_else(|| paths.profile_file())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ShellPaths) -> Result<Self, ShellError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ShellError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ShellError::Config(format!("Failed to parse settings file: {}", e)))?;

        // Surface a bad chord at load time rather than when the navbar mounts
        settings.chord()?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ShellPaths) -> Result<(), ShellError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ShellError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ShellError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.palette_chord, "ctrl+k");
        assert_eq!(settings.navbar_hide_after, 15);
        assert_eq!(settings.newsletter_reset_secs, 3);
        assert!(settings.chord().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShellPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.theme = ThemeMode::Light;
        settings.palette_chord = "ctrl+p".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.theme, ThemeMode::Light);
        assert_eq!(loaded.palette_chord, "ctrl+p");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShellPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "theme": "light" }"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.theme, ThemeMode::Light);
        assert_eq!(loaded.tick_rate_ms, 250);
        assert_eq!(loaded.log_level, "info");
    }

    #[test]
    fn test_invalid_chord_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShellPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "palette_chord": "hyper+" }"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }

    #[test]
    fn test_profile_override() {
        let paths = ShellPaths::with_base_dir(PathBuf::from("/tmp/gyra"));
        let mut settings = Settings::default();
        assert_eq!(settings.profile_file(&paths), paths.profile_file());

        settings.profile_path = Some(PathBuf::from("/etc/profile.yaml"));
        assert_eq!(
            settings.profile_file(&paths),
            PathBuf::from("/etc/profile.yaml")
        );
    }
}
