//! Footer newsletter form
//!
//! The form calls a [`Subscriber`] off the UI thread. While a call is in
//! flight, and while its result is on screen, the form is disabled. The
//! result reverts to `Idle` after `reset_after`.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

/// Form status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriptionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// The subscription service
pub trait Subscriber: Send + Sync {
    /// Subscribe an address. Returns true on success.
    fn subscribe(&self, email: &str) -> bool;
}

/// Loose shape check: something@domain.tld with no spaces
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// In-memory subscriber that accepts well-formed, new addresses
#[derive(Debug, Default)]
pub struct MailingList {
    members: Mutex<Vec<String>>,
}

impl MailingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> Vec<String> {
        self.members.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl Subscriber for MailingList {
    fn subscribe(&self, email: &str) -> bool {
        if !is_valid_email(email) {
            warn!("Rejected newsletter signup: malformed address");
            return false;
        }
        let Ok(mut members) = self.members.lock() else {
            return false;
        };
        let normalized = email.to_lowercase();
        if members.contains(&normalized) {
            info!("Newsletter signup for an existing member");
            return false;
        }
        members.push(normalized);
        info!("Newsletter signup accepted ({} members)", members.len());
        true
    }
}

/// A submission waiting to run
pub struct PendingSubscription {
    email: String,
    subscriber: Arc<dyn Subscriber>,
}

impl PendingSubscription {
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Run the call on this thread
    pub fn run(self) -> bool {
        self.subscriber.subscribe(&self.email)
    }

    /// Run the call on a worker thread and report the result
    pub fn spawn<F>(self, on_done: F) -> thread::JoinHandle<()>
    where
        F: FnOnce(bool) + Send + 'static,
    {
        thread::spawn(move || on_done(self.run()))
    }
}

impl fmt::Debug for PendingSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSubscription")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Newsletter form state
pub struct NewsletterForm {
    email: String,
    status: SubscriptionStatus,
    settled_at: Option<Instant>,
    reset_after: Duration,
    subscriber: Option<Arc<dyn Subscriber>>,
}

impl NewsletterForm {
    pub fn new(subscriber: Option<Arc<dyn Subscriber>>, reset_after: Duration) -> Self {
        Self {
            email: String::new(),
            status: SubscriptionStatus::Idle,
            settled_at: None,
            reset_after,
            subscriber,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> SubscriptionStatus {
        self.status
    }

    /// Input and button are disabled unless the form is idle
    pub fn is_disabled(&self) -> bool {
        self.status != SubscriptionStatus::Idle
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_disabled() {
            self.email.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if !self.is_disabled() {
            self.email.pop();
        }
    }

    /// Start a submission
    ///
    /// Returns None (and changes nothing) when the email is empty, no
    /// subscriber is configured, or the form is not idle.
    pub fn begin_submit(&mut self) -> Option<PendingSubscription> {
        let email = self.email.trim();
        if email.is_empty() || self.is_disabled() {
            return None;
        }
        let subscriber = self.subscriber.clone()?;
        let pending = PendingSubscription {
            email: email.to_string(),
            subscriber,
        };
        self.status = SubscriptionStatus::Submitting;
        Some(pending)
    }

    /// Record the result of the in-flight submission
    pub fn finish(&mut self, success: bool, now: Instant) {
        if self.status != SubscriptionStatus::Submitting {
            return;
        }
        if success {
            self.status = SubscriptionStatus::Succeeded;
            self.email.clear();
        } else {
            self.status = SubscriptionStatus::Failed;
        }
        self.settled_at = Some(now);
    }

    /// Clear a shown result once it has been up long enough
    pub fn tick(&mut self, now: Instant) {
        if let Some(settled) = self.settled_at {
            if now.duration_since(settled) >= self.reset_after {
                self.status = SubscriptionStatus::Idle;
                self.settled_at = None;
            }
        }
    }
}

impl fmt::Debug for NewsletterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsletterForm")
            .field("email", &self.email)
            .field("status", &self.status)
            .field("has_subscriber", &self.subscriber.is_some())
            .finish()
    }
}
