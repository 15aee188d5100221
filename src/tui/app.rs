//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Rendering records where clickable things ended up in [`HitAreas`], so
//! mouse handling can hit-test against the last frame.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{info, warn};
use ratatui::layout::Rect;

use crate::config::settings::Settings;
use crate::error::ShellResult;
use crate::palette::{
    commit_highlighted, CloseReason, CommandPalette, GlobalAction, GlobalKeys, OpenTrigger,
    Registry,
};
use crate::site::{
    page_for, Dashboard, DashboardTab, IdentityProvider, Navbar, NewsletterForm, Route, Router,
    Subscriber,
};

use super::event::Event;
use super::theme::Theme;
use super::widgets::{Notification, NotificationQueue};

/// Where key input goes when no overlay is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Page,
    Newsletter,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Clickable regions from the last rendered frame
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// Whole palette dialog
    pub palette: Option<Rect>,
    /// Rows of the palette result list
    pub palette_rows: Option<Rect>,
    /// Index of the first result drawn in `palette_rows`
    pub palette_offset: usize,
    /// Navbar links (inline or dropdown) with their index into `NAV_LINKS`
    pub nav_links: Vec<(Rect, usize)>,
    pub brand: Option<Rect>,
    pub search_button: Option<Rect>,
    pub menu_button: Option<Rect>,
    pub newsletter_input: Option<Rect>,
    pub subscribe_button: Option<Rect>,
    /// Footer links with their target path
    pub footer_links: Vec<(Rect, &'static str)>,
    pub dashboard_tabs: Vec<(Rect, DashboardTab)>,
    pub logout_button: Option<Rect>,
}

/// Main application state
pub struct App<'a> {
    pub settings: &'a Settings,
    pub should_quit: bool,
    pub theme: Theme,

    pub palette: CommandPalette,
    pub global_keys: GlobalKeys,
    pub navbar: Navbar,
    pub router: Router,
    pub dashboard: Dashboard,
    pub newsletter: NewsletterForm,
    pub identity: Box<dyn IdentityProvider>,

    pub focus: Focus,
    pub active_dialog: ActiveDialog,
    pub notifications: NotificationQueue,

    /// Scroll offset of the content page, in rows
    pub scroll_offset: u16,
    /// Rows visible in the content area at the last render
    pub viewport_height: u16,
    /// Terminal width at the last render
    pub viewport_width: u16,

    pub hit: HitAreas,
    /// Whether the pointer was over the palette at the last mouse move
    pub pointer_inside_palette: bool,

    events: Option<mpsc::Sender<Event>>,
}

impl<'a> App<'a> {
    pub fn new(
        settings: &'a Settings,
        identity: Box<dyn IdentityProvider>,
        subscriber: Option<Arc<dyn Subscriber>>,
    ) -> ShellResult<Self> {
        let chord = settings.chord()?;
        Ok(Self {
            settings,
            should_quit: false,
            theme: Theme::with_mode(settings.theme),
            palette: CommandPalette::new(Registry::default()),
            global_keys: GlobalKeys::new(),
            navbar: Navbar::new(chord, settings.navbar_hide_after, settings.compact_width),
            router: Router::new(),
            dashboard: Dashboard::new(),
            newsletter: NewsletterForm::new(
                subscriber,
                Duration::from_secs(settings.newsletter_reset_secs),
            ),
            identity,
            focus: Focus::default(),
            active_dialog: ActiveDialog::default(),
            notifications: NotificationQueue::new(),
            scroll_offset: 0,
            viewport_height: 0,
            viewport_width: 0,
            hit: HitAreas::default(),
            pointer_inside_palette: false,
            events: None,
        })
    }

    /// Report worker results through the event loop instead of inline
    pub fn with_event_sender(mut self, sender: mpsc::Sender<Event>) -> Self {
        self.events = Some(sender);
        self
    }

    /// Mount the navbar (registers the palette chord)
    pub fn mount(&mut self) {
        self.navbar.mount(&mut self.global_keys);
    }

    /// Unmount the navbar (releases the palette chord)
    pub fn unmount(&mut self) {
        self.navbar.unmount(&mut self.global_keys);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle_mode();
        info!("Theme switched to {}", self.theme.mode);
    }

    // Palette

    pub fn run_global_action(&mut self, action: GlobalAction) {
        match action {
            GlobalAction::TogglePalette => {
                self.palette.toggle();
                self.after_palette_transition();
            }
        }
    }

    pub fn open_palette(&mut self, trigger: OpenTrigger) {
        self.palette.open(trigger);
        self.after_palette_transition();
    }

    pub fn close_palette(&mut self, reason: CloseReason) {
        self.palette.close(reason);
        self.after_palette_transition();
    }

    fn after_palette_transition(&mut self) {
        if self.palette.is_open() {
            self.navbar.close_menu();
        } else {
            self.hit.palette = None;
            self.hit.palette_rows = None;
        }
        self.pointer_inside_palette = false;
    }

    /// Commit the highlighted result. No-op with nothing highlighted.
    pub fn commit_palette(&mut self) {
        if commit_highlighted(&mut self.palette, &mut self.router).is_some() {
            self.after_palette_transition();
            self.after_navigation();
        }
    }

    /// Commit the result at a list index (a click)
    pub fn commit_palette_row(&mut self, index: usize) {
        self.palette.hover(index);
        let highlighted = self.palette.session().and_then(|s| s.highlighted_index());
        if highlighted == Some(index) {
            self.commit_palette();
        }
    }

    // Navigation

    pub fn navigate(&mut self, path: &str) {
        self.router.push(path);
        self.after_navigation();
    }

    pub fn go_back(&mut self) {
        if self.router.back() {
            self.after_navigation();
        }
    }

    /// Apply the route guard, surface opaque actions and reset scrolling
    fn after_navigation(&mut self) {
        if let Some(action) = self.router.take_action() {
            let label = self
                .palette
                .registry()
                .find(&action)
                .map(|cmd| cmd.label)
                .unwrap_or(action.as_str());
            self.notify(Notification::info(format!("{} is not available yet", label)));
            // In-page actions leave the route and scroll position alone
            return;
        }

        if self.router.current().requires_user() && !self.identity.is_signed_in() {
            warn!(
                "Blocked {} while signed out",
                self.router.current().path()
            );
            self.router.replace(Route::home());
            self.notify(Notification::warning("Sign in to view your dashboard"));
        }

        self.focus = Focus::Page;
        self.navbar.close_menu();
        self.navbar.reset_scroll();
        self.scroll_offset = 0;

        let anchor = match self.router.current() {
            Route::Home { section } => *section,
            _ => None,
        };
        if let Some(section) = anchor {
            let offset = page_for(self.router.current())
                .and_then(|page| page.section_offset(section))
                .unwrap_or(0);
            self.scroll_to(offset as u16);
        }
    }

    pub fn choose_nav_link(&mut self, index: usize) {
        if let Some(href) = self.navbar.choose(index) {
            self.navigate(href);
        }
    }

    // Scrolling

    /// Rows of the current page, zero for non-scrolling views
    pub fn content_rows(&self) -> u16 {
        page_for(self.router.current())
            .map(|page| page.text_lines().len() as u16)
            .unwrap_or(0)
    }

    fn max_scroll(&self) -> u16 {
        self.content_rows()
            .saturating_sub(self.viewport_height.max(1))
    }

    pub fn scroll_to(&mut self, offset: u16) {
        // Anchors may sit below the fold before the first render
        let max = if self.viewport_height == 0 {
            offset
        } else {
            self.max_scroll()
        };
        self.scroll_offset = offset.min(max);
        self.navbar.on_scroll(self.scroll_offset);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll_offset as i32 + delta).max(0);
        self.scroll_to(target.min(u16::MAX as i32) as u16);
    }

    // Dashboard

    pub fn sign_out(&mut self) {
        self.identity.sign_out();
        self.notify(Notification::info("Signed out"));
        self.navigate("/");
    }

    // Newsletter

    pub fn focus_newsletter(&mut self) {
        self.focus = Focus::Newsletter;
    }

    pub fn submit_newsletter(&mut self) {
        let Some(pending) = self.newsletter.begin_submit() else {
            return;
        };
        info!("Submitting newsletter signup");
        match &self.events {
            Some(sender) => {
                let sender = sender.clone();
                pending.spawn(move |ok| {
                    let _ = sender.send(Event::Subscription(ok));
                });
            }
            None => {
                let ok = pending.run();
                self.on_subscription_result(ok);
            }
        }
    }

    pub fn on_subscription_result(&mut self, ok: bool) {
        self.newsletter.finish(ok, Instant::now());
        if ok {
            self.notify(Notification::success("Subscribed!"));
        } else {
            self.notify(Notification::error("Failed. Try again."));
        }
    }

    pub fn on_tick(&mut self) {
        let now = Instant::now();
        self.newsletter.tick(now);
        self.notifications.expire(now);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::site::{CurrentUser, MailingList, StaticIdentity, SubscriptionStatus};

    pub(crate) fn signed_in() -> Box<dyn IdentityProvider> {
        Box::new(StaticIdentity::signed_in(CurrentUser {
            full_name: Some("Ada Lovelace".into()),
            email: Some("ada@gyralabs.ai".into()),
            ..Default::default()
        }))
    }

    pub(crate) fn app(settings: &Settings) -> App<'_> {
        let mut app = App::new(settings, signed_in(), Some(Arc::new(MailingList::new()))).unwrap();
        app.mount();
        app
    }

    #[test]
    fn test_new_rejects_bad_chord() {
        let settings = Settings {
            palette_chord: "k".into(),
            ..Settings::default()
        };
        assert!(App::new(&settings, signed_in(), None).is_err());
    }

    #[test]
    fn test_mount_registers_chord_once() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.mount();
        assert_eq!(app.global_keys.len(), 1);
        app.unmount();
        assert!(app.global_keys.is_empty());
    }

    #[test]
    fn test_commit_navigates() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_palette(OpenTrigger::Button);
        app.palette.set_query("blog");
        app.commit_palette();
        // No command matches "blog", so nothing happens
        assert!(app.palette.is_open());

        app.palette.set_query("pricing");
        app.commit_palette();
        assert!(!app.palette.is_open());
        assert_eq!(app.router.current(), &Route::from_path("/pricing"));
    }

    #[test]
    fn test_pricing_anchor_scrolls() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.navigate("/#pricing");
        assert!(app.scroll_offset > 0);

        app.navigate("/blog");
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_opaque_action_notifies() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_palette(OpenTrigger::Chord);
        app.palette.set_query("analytics");
        app.commit_palette();

        assert_eq!(app.router.current(), &Route::home());
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Analytics is not available yet"
        );
    }

    #[test]
    fn test_dashboard_requires_user() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Box::new(StaticIdentity::signed_out()), None).unwrap();
        app.navigate("/dashboard");
        assert_eq!(app.router.current(), &Route::home());

        let mut app = app_with_user(&settings);
        app.navigate("/user-profile");
        assert_eq!(app.router.current(), &Route::UserProfile);
    }

    fn app_with_user(settings: &Settings) -> App<'_> {
        App::new(settings, signed_in(), None).unwrap()
    }

    #[test]
    fn test_sign_out_returns_home() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.navigate("/dashboard");
        app.sign_out();
        assert_eq!(app.router.current(), &Route::home());
        assert!(!app.identity.is_signed_in());

        app.navigate("/dashboard");
        assert_eq!(app.router.current(), &Route::home());
    }

    #[test]
    fn test_newsletter_inline_submission() {
        let settings = Settings::default();
        let mut app = app(&settings);
        for c in "ada@gyralabs.ai".chars() {
            app.newsletter.push_char(c);
        }
        app.submit_newsletter();
        assert_eq!(app.newsletter.status(), SubscriptionStatus::Succeeded);
        assert_eq!(app.newsletter.email(), "");
    }

    #[test]
    fn test_newsletter_reports_through_channel() {
        let settings = Settings::default();
        let (tx, rx) = mpsc::channel();
        let mut app = app(&settings).with_event_sender(tx);
        for c in "not-an-email".chars() {
            app.newsletter.push_char(c);
        }
        app.submit_newsletter();
        assert_eq!(app.newsletter.status(), SubscriptionStatus::Submitting);

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            Event::Subscription(ok) => app.on_subscription_result(ok),
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(app.newsletter.status(), SubscriptionStatus::Failed);
    }

    #[test]
    fn test_scroll_hides_navbar() {
        let settings = Settings {
            navbar_hide_after: 1,
            ..Settings::default()
        };
        let mut app = app(&settings);
        app.viewport_height = 2;
        app.scroll_by(3);
        assert!(app.navbar.is_hidden());
        app.scroll_by(-1);
        assert!(!app.navbar.is_hidden());
    }
}
