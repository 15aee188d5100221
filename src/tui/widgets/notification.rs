//! Toast notification widget
//!
//! Opaque palette actions, redirects and newsletter results surface here.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::tui::theme::Theme;

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn color(&self, theme: &Theme) -> Color {
        match self {
            Self::Info => theme.accent,
            Self::Success => theme.success,
            Self::Warning => theme.warning,
            Self::Error => theme.error,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Notice",
            Self::Error => "Error",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            ttl: Duration::from_secs(3),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.ttl
    }
}

/// Renders one notification in the theme's colours
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color(self.theme);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.notification.kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(self.theme.text))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Pending notifications, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop the head once it has been shown long enough
    ///
    /// Only the head counts down; queued toasts wait their turn.
    pub fn expire(&mut self, now: Instant) {
        if self
            .notifications
            .first()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.notifications.remove(0);
            if let Some(next) = self.notifications.first_mut() {
                next.created_at = now;
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_shows_oldest_first() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::info("First"));
        queue.push(Notification::success("Second"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");
    }

    #[test]
    fn test_expire_advances_one_at_a_time() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("First").with_ttl(Duration::from_secs(1)));
        queue.push(Notification::warning("Second").with_ttl(Duration::from_secs(1)));

        let later = Instant::now() + Duration::from_secs(2);
        queue.expire(later);
        assert_eq!(queue.current().unwrap().message, "Second");

        // The second toast's clock restarted when it reached the head
        queue.expire(later);
        assert_eq!(queue.len(), 1);

        queue.expire(later + Duration::from_secs(1));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_kind_colors_follow_theme() {
        let theme = Theme::dark();
        assert_eq!(NotificationKind::Success.color(&theme), theme.success);
        assert_eq!(NotificationKind::Error.color(&theme), theme.error);
        assert_eq!(NotificationKind::Warning.title(), "Notice");
    }
}
