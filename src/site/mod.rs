//! Marketing-site shell: routes, pages, navbar, dashboard, newsletter, identity

pub mod dashboard;
pub mod identity;
pub mod navbar;
pub mod newsletter;
pub mod pages;
pub mod router;

pub use dashboard::{Dashboard, DashboardTab};
pub use identity::{CurrentUser, IdentityProvider, ProfileFileIdentity, StaticIdentity};
pub use navbar::{NavLink, Navbar, ScrollVisibility, NAV_LINKS};
pub use newsletter::{
    is_valid_email, MailingList, NewsletterForm, PendingSubscription, Subscriber,
    SubscriptionStatus,
};
pub use pages::{page_for, Page, PageSection, TextLine};
pub use router::{HomeSection, Route, Router};
