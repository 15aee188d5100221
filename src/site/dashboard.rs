//! Dashboard tab state

/// Sidebar tabs of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    Home,
    Requests,
    Track,
    History,
    #[default]
    Profile,
}

impl DashboardTab {
    /// All tabs in sidebar order
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Home,
        DashboardTab::Requests,
        DashboardTab::Track,
        DashboardTab::History,
        DashboardTab::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Requests => "View Requests",
            Self::Track => "Track Request",
            Self::History => "History",
            Self::Profile => "My profile",
        }
    }

    /// Count badge shown next to the label
    pub fn badge(&self) -> Option<u32> {
        match self {
            Self::Requests => Some(7),
            _ => None,
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

/// Which dashboard tab is showing
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    active: DashboardTab,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.active
    }

    pub fn select(&mut self, tab: DashboardTab) {
        self.active = tab;
    }

    pub fn next_tab(&mut self) {
        let i = self.active.position();
        self.active = DashboardTab::ALL[(i + 1).min(DashboardTab::ALL.len() - 1)];
    }

    pub fn prev_tab(&mut self) {
        let i = self.active.position();
        self.active = DashboardTab::ALL[i.saturating_sub(1)];
    }

    /// Everything but the profile tab is a placeholder
    pub fn is_under_construction(&self) -> bool {
        self.active != DashboardTab::Profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_profile() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.active_tab(), DashboardTab::Profile);
        assert!(!dashboard.is_under_construction());
    }

    #[test]
    fn test_tab_navigation_is_clamped() {
        let mut dashboard = Dashboard::new();
        dashboard.next_tab();
        assert_eq!(dashboard.active_tab(), DashboardTab::Profile);

        for _ in 0..10 {
            dashboard.prev_tab();
        }
        assert_eq!(dashboard.active_tab(), DashboardTab::Home);
        assert!(dashboard.is_under_construction());

        dashboard.next_tab();
        assert_eq!(dashboard.active_tab(), DashboardTab::Requests);
    }

    #[test]
    fn test_badges() {
        assert_eq!(DashboardTab::Requests.badge(), Some(7));
        assert_eq!(DashboardTab::History.badge(), None);
        assert_eq!(DashboardTab::Profile.label(), "My profile");
    }
}
