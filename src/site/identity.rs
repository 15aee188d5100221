//! Identity collaborator
//!
//! The dashboard only depends on [`IdentityProvider`] and the read-only
//! [`CurrentUser`] record. Where the record comes from is up to the adapter:
//! a fixed record, or a profile file exported by the auth service.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};

pub const DEFAULT_NAME: &str = "User";
pub const DEFAULT_ROLE: &str = "Agent Builder";
pub const DEFAULT_PHONE: &str = "+1 (555) 000-0000";
pub const DEFAULT_LOCATION: &str = "San Francisco, CA";
pub const DEFAULT_COUNTRY: &str = "United States";

/// The signed-in user, as supplied by the identity service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CurrentUser {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl CurrentUser {
    /// Full name, else first + last, else "User"
    pub fn display_name(&self) -> String {
        if let Some(full) = non_empty(&self.full_name) {
            return full.to_string();
        }
        let joined: Vec<&str> = [non_empty(&self.first_name), non_empty(&self.last_name)]
            .into_iter()
            .flatten()
            .collect();
        if joined.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            joined.join(" ")
        }
    }

    pub fn role_label(&self) -> &str {
        non_empty(&self.role).unwrap_or(DEFAULT_ROLE)
    }

    pub fn phone_label(&self) -> &str {
        non_empty(&self.phone).unwrap_or(DEFAULT_PHONE)
    }

    pub fn email_label(&self) -> &str {
        non_empty(&self.email).unwrap_or("")
    }

    /// Initials for the avatar badge
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Supplies the current user
pub trait IdentityProvider {
    /// The signed-in user, or None when signed out
    fn current_user(&self) -> Option<&CurrentUser>;

    /// End the session
    fn sign_out(&mut self);

    fn is_signed_in(&self) -> bool {
        self.current_user().is_some()
    }
}

/// A fixed user record, or nobody
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<CurrentUser>,
}

impl StaticIdentity {
    pub fn signed_in(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    fn sign_out(&mut self) {
        self.user = None;
    }
}

/// Reads the user from a JSON or YAML profile file
///
/// A missing file means signed out. Signing out only drops the in-memory
/// record; the file belongs to the auth service.
#[derive(Debug, Clone)]
pub struct ProfileFileIdentity {
    path: PathBuf,
    user: Option<CurrentUser>,
}

impl ProfileFileIdentity {
    /// Load the profile at `path`
    pub fn load(path: impl Into<PathBuf>) -> ShellResult<Self> {
        let path = path.into();
        let user = if path.exists() {
            let user = read_profile(&path)?;
            info!("Loaded profile for {}", user.display_name());
            Some(user)
        } else {
            info!("No profile at {}, signed out", path.display());
            None
        };
        Ok(Self { path, user })
    }

    /// Load the profile, treating unreadable files as signed out
    pub fn load_or_signed_out(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::load(path.clone()).unwrap_or_else(|e| {
            warn!("Ignoring profile {}: {}", path.display(), e);
            Self { path, user: None }
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentityProvider for ProfileFileIdentity {
    fn current_user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Signed out {}", user.display_name());
        }
    }
}

fn read_profile(path: &Path) -> ShellResult<CurrentUser> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ShellError::Io(format!("Failed to read profile file: {}", e)))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );

    let user = if is_yaml {
        serde_yaml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };
    Ok(user)
}
