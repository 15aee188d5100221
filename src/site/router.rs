//! Router
//!
//! Resolves path strings to views and keeps a back history. It is also the
//! sink for palette commits: ids starting with `/` are navigated to, any
//! other id is an in-page action that is recorded for the app to surface.

use std::collections::VecDeque;

use log::{info, warn};

use crate::palette::{IntentSink, NavigationIntent};

/// Anchored sections of the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSection {
    About,
    Pricing,
}

/// A resolved view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home { section: Option<HomeSection> },
    Blog,
    Contact,
    Dashboard,
    UserProfile,
    NotFound(String),
}

impl Route {
    pub fn home() -> Self {
        Self::Home { section: None }
    }

    /// Resolve a path
    pub fn from_path(path: &str) -> Self {
        let path = path.trim();
        let (base, fragment) = match path.split_once('#') {
            Some((base, fragment)) => (base, Some(fragment)),
            None => (path, None),
        };
        let base = match base.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match (base, fragment) {
            ("/", None | Some("")) => Self::home(),
            ("/about", None) | ("/", Some("about")) => Self::Home {
                section: Some(HomeSection::About),
            },
            ("/pricing", None) | ("/", Some("pricing")) => Self::Home {
                section: Some(HomeSection::Pricing),
            },
            ("/blog", _) => Self::Blog,
            ("/contact", _) => Self::Contact,
            ("/dashboard", _) => Self::Dashboard,
            ("/user-profile", _) => Self::UserProfile,
            (other, _) if other.starts_with("/user-profile/") => Self::UserProfile,
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Self::Home { section: None } => "/".into(),
            Self::Home {
                section: Some(HomeSection::About),
            } => "/#about".into(),
            Self::Home {
                section: Some(HomeSection::Pricing),
            } => "/#pricing".into(),
            Self::Blog => "/blog".into(),
            Self::Contact => "/contact".into(),
            Self::Dashboard => "/dashboard".into(),
            Self::UserProfile => "/user-profile".into(),
            Self::NotFound(path) => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home { .. } => "Home",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
            Self::Dashboard => "Dashboard",
            Self::UserProfile => "Profile",
            Self::NotFound(_) => "Not Found",
        }
    }

    /// Routes that need a signed-in user
    pub fn requires_user(&self) -> bool {
        matches!(self, Self::Dashboard | Self::UserProfile)
    }
}

/// Back steps kept; older entries are dropped
pub const HISTORY_LIMIT: usize = 64;

/// Current route plus back history
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: VecDeque<Route>,
    pending_action: Option<String>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::home(),
            history: VecDeque::new(),
            pending_action: None,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigate to a path
    pub fn push(&mut self, path: &str) -> &Route {
        let route = Route::from_path(path);
        match &route {
            Route::NotFound(path) => warn!("No page for {}", path),
            _ => info!("Navigating to {}", route.path()),
        }
        if route != self.current {
            let previous = std::mem::replace(&mut self.current, route);
            if self.history.len() == HISTORY_LIMIT {
                self.history.pop_front();
            }
            self.history.push_back(previous);
        }
        &self.current
    }

    /// Replace the current route without adding history (redirects)
    pub fn replace(&mut self, route: Route) {
        info!("Redirecting {} -> {}", self.current.path(), route.path());
        self.current = route;
    }

    /// Go back one step. Returns false with no history.
    pub fn back(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Take the last in-page action id, if one arrived
    pub fn take_action(&mut self) -> Option<String> {
        self.pending_action.take()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentSink for Router {
    fn accept(&mut self, intent: &NavigationIntent) {
        if intent.target_id.starts_with('/') {
            self.push(&intent.target_id);
        } else {
            info!("In-page action requested: {}", intent.target_id);
            self.pending_action = Some(intent.target_id.clone());
        }
    }
}
