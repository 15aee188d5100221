//! Configuration module for gyra-shell
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ShellPaths;
pub use settings::{Settings, ThemeMode};
