//! Route definitions. Pure domain layer: no DOM, no web_sys.
//!
//! The app is addressed entirely through URL hash fragments (`#/browse`),
//! so every view corresponds to one canonical hash. In-page anchors such
//! as the FAQ section are modeled separately as [`NavTarget::Anchor`] so
//! the router can tell a real view transition from a scroll.

use mealbridge_shared::UserRole;
use std::fmt::Display;

/// All addressable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Landing page (default route, also the unknown-hash fallback).
    #[default]
    Home,
    /// Public listing of open requests and offers.
    Browse,
    /// Recognized donor partners.
    Donors,
    HowItWorks,
    /// Student dashboard (requires auth).
    DashboardSeeker,
    /// Donor dashboard (requires auth).
    DashboardDonor,
    PostRequest,
    PostOffer,
    Admin,
}

impl AppRoute {
    /// Parse a `window.location.hash` value into a route.
    ///
    /// Accepts the fragment with or without its leading `#`. Anything
    /// unrecognized falls back to [`AppRoute::Home`]; the router
    /// normalizes the hash afterwards so URL and view stay in sync.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.strip_prefix('#').unwrap_or(hash);
        match path {
            "" | "/" => Self::Home,
            "/browse" => Self::Browse,
            "/donors" => Self::Donors,
            "/how-it-works" => Self::HowItWorks,
            "/dashboard-seeker" => Self::DashboardSeeker,
            "/dashboard-donor" => Self::DashboardDonor,
            "/post-request" => Self::PostRequest,
            "/post-offer" => Self::PostOffer,
            "/admin" => Self::Admin,
            _ => Self::Home,
        }
    }

    /// Canonical hash for this route, suitable for the history API.
    pub fn to_hash(&self) -> &'static str {
        match self {
            Self::Home => "#/",
            Self::Browse => "#/browse",
            Self::Donors => "#/donors",
            Self::HowItWorks => "#/how-it-works",
            Self::DashboardSeeker => "#/dashboard-seeker",
            Self::DashboardDonor => "#/dashboard-donor",
            Self::PostRequest => "#/post-request",
            Self::PostOffer => "#/post-offer",
            Self::Admin => "#/admin",
        }
    }

    /// Routes that are meaningless without a session.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::DashboardSeeker
                | Self::DashboardDonor
                | Self::PostRequest
                | Self::PostOffer
                | Self::Admin
        )
    }

    /// Where a freshly authenticated user lands.
    pub fn dashboard_for(role: UserRole) -> Self {
        match role {
            UserRole::Student => Self::DashboardSeeker,
            UserRole::Donor => Self::DashboardDonor,
            UserRole::Admin => Self::Admin,
        }
    }

    /// Redirect target when a guard rejects the navigation.
    pub fn auth_failure_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hash())
    }
}

/// A navigation request: either a real view transition or a scroll to an
/// in-page anchor owned by some parent route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Route(AppRoute),
    Anchor {
        /// DOM id of the section to scroll to.
        id: &'static str,
        /// The route that hosts the section.
        parent: AppRoute,
    },
}

impl NavTarget {
    /// The FAQ section lives on the home page; clicking "FAQ" from any
    /// view lands on `#/` and scrolls, never on a `#faq` route.
    pub const FAQ: NavTarget = NavTarget::Anchor {
        id: "faq",
        parent: AppRoute::Home,
    };
}

impl From<AppRoute> for NavTarget {
    fn from(route: AppRoute) -> Self {
        NavTarget::Route(route)
    }
}

#[cfg(test)]
mod tests;
