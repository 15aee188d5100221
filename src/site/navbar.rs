//! Top navigation bar state
//!
//! Tracks scroll-aware visibility and the compact-layout menu, and owns the
//! palette chord registration for as long as it is mounted.

use log::debug;

use crate::palette::{Chord, GlobalAction, GlobalKeys, ListenerId};

/// A navbar link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// Links shown in the navbar, in order
pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "Dashboard",
        href: "/dashboard",
    },
    NavLink {
        name: "About",
        href: "/#about",
    },
    NavLink {
        name: "Blog",
        href: "/blog",
    },
    NavLink {
        name: "Peanut",
        href: "/peanut",
    },
    NavLink {
        name: "Contact",
        href: "/contact",
    },
    NavLink {
        name: "Pricing",
        href: "/#pricing",
    },
];

/// Hides the bar while scrolling down past a threshold
#[derive(Debug, Clone)]
pub struct ScrollVisibility {
    threshold: u16,
    previous: u16,
    hidden: bool,
}

impl ScrollVisibility {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            previous: 0,
            hidden: false,
        }
    }

    /// Feed a new scroll offset
    pub fn on_scroll(&mut self, latest: u16) {
        self.hidden = latest > self.previous && latest > self.threshold;
        self.previous = latest;
    }

    /// Forget scroll history (new page)
    pub fn reset(&mut self) {
        self.previous = 0;
        self.hidden = false;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Navbar state
#[derive(Debug)]
pub struct Navbar {
    chord: Chord,
    listener: Option<ListenerId>,
    visibility: ScrollVisibility,
    menu_open: bool,
    compact_width: u16,
}

impl Navbar {
    pub fn new(chord: Chord, hide_after: u16, compact_width: u16) -> Self {
        Self {
            chord,
            listener: None,
            visibility: ScrollVisibility::new(hide_after),
            menu_open: false,
            compact_width,
        }
    }

    /// Register the palette chord. Mounting twice keeps one registration.
    pub fn mount(&mut self, keys: &mut GlobalKeys) {
        if self.listener.is_none() {
            self.listener = Some(keys.register(self.chord, GlobalAction::TogglePalette));
            debug!("Navbar mounted, palette chord {} registered", self.chord);
        }
    }

    /// Release the palette chord
    pub fn unmount(&mut self, keys: &mut GlobalKeys) {
        if let Some(id) = self.listener.take() {
            keys.release(id);
            debug!("Navbar unmounted, palette chord released");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    pub fn chord(&self) -> Chord {
        self.chord
    }

    pub fn on_scroll(&mut self, offset: u16) {
        self.visibility.on_scroll(offset);
    }

    pub fn reset_scroll(&mut self) {
        self.visibility.reset();
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility.is_hidden()
    }

    /// Whether the given terminal width uses the compact layout
    pub fn is_compact(&self, width: u16) -> bool {
        width < self.compact_width
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Choose a link by position, closing the menu. Returns its href.
    pub fn choose(&mut self, index: usize) -> Option<&'static str> {
        let link = NAV_LINKS.get(index)?;
        self.menu_open = false;
        Some(link.href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn navbar() -> Navbar {
        Navbar::new(Chord::default(), 15, 100)
    }

    #[test]
    fn test_hide_when_scrolling_down_past_threshold() {
        let mut vis = ScrollVisibility::new(15);
        vis.on_scroll(10);
        assert!(!vis.is_hidden());
        vis.on_scroll(16);
        assert!(vis.is_hidden());
        vis.on_scroll(20);
        assert!(vis.is_hidden());
    }

    #[test]
    fn test_show_when_scrolling_up() {
        let mut vis = ScrollVisibility::new(15);
        vis.on_scroll(30);
        assert!(vis.is_hidden());
        vis.on_scroll(25);
        assert!(!vis.is_hidden());
    }

    #[test]
    fn test_same_offset_shows() {
        let mut vis = ScrollVisibility::new(15);
        vis.on_scroll(30);
        vis.on_scroll(30);
        assert!(!vis.is_hidden());
    }

    #[test]
    fn test_reset() {
        let mut vis = ScrollVisibility::new(0);
        vis.on_scroll(5);
        vis.reset();
        assert!(!vis.is_hidden());
        vis.on_scroll(1);
        assert!(vis.is_hidden());
    }

    #[test]
    fn test_mount_registers_once() {
        let mut keys = GlobalKeys::new();
        let mut nav = navbar();

        nav.mount(&mut keys);
        nav.mount(&mut keys);
        assert_eq!(keys.len(), 1);
        assert!(nav.is_mounted());

        let ctrl_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(keys.intercept(&ctrl_k), Some(GlobalAction::TogglePalette));
    }

    #[test]
    fn test_unmount_releases() {
        let mut keys = GlobalKeys::new();
        let mut nav = navbar();

        nav.mount(&mut keys);
        nav.unmount(&mut keys);
        nav.unmount(&mut keys);
        assert!(keys.is_empty());
        assert!(!nav.is_mounted());

        // Remount after teardown does not accumulate
        nav.mount(&mut keys);
        nav.unmount(&mut keys);
        nav.mount(&mut keys);
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_compact_breakpoint() {
        let nav = navbar();
        assert!(nav.is_compact(80));
        assert!(!nav.is_compact(100));
    }

    #[test]
    fn test_choose_closes_menu() {
        let mut nav = navbar();
        nav.toggle_menu();
        assert!(nav.menu_open());

        assert_eq!(nav.choose(2), Some("/blog"));
        assert!(!nav.menu_open());
        assert_eq!(nav.choose(42), None);
    }
}
