//! Route table and access decisions.
//!
//! [`guard`] is a pure function of the session and the role a view needs.
//! It is evaluated on every navigation; nothing is cached and sessions never
//! expire on their own.

use std::fmt;

use crate::model::Role;
use crate::session::SessionState;

/// Outcome of guarding a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the requested view.
    Render,
    /// Nobody is signed in; go to [`Route::Login`].
    RedirectLogin {
        /// Replace the current history entry instead of pushing one.
        replace: bool,
    },
    /// Signed in without the needed role, or the path is unknown; go to
    /// [`Route::Home`].
    RedirectHome {
        /// Replace the current history entry instead of pushing one.
        replace: bool,
    },
}

/// Decide whether a view needing `required_role` may render for `session`.
///
/// Anonymous sessions go to login before any role check. `None` admits any
/// signed-in user.
#[must_use]
pub fn guard(session: &SessionState, required_role: Option<Role>) -> GuardDecision {
    let Some(user) = &session.user else {
        return GuardDecision::RedirectLogin { replace: true };
    };
    match required_role {
        Some(role) if user.role != role => GuardDecision::RedirectHome { replace: true },
        _ => GuardDecision::Render,
    }
}

/// Views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/about`
    About,
    /// `/contact`
    Contact,
    /// `/companies`
    Companies,
    /// `/login`
    Login,
    /// `/jobs`, employees only.
    Jobs,
    /// `/admin/employees`, admins only.
    AdminEmployees,
    /// `/admin/add-job`, admins only.
    AdminAddJob,
}

impl Route {
    /// Every route, public ones first.
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::About,
        Self::Contact,
        Self::Companies,
        Self::Login,
        Self::Jobs,
        Self::AdminEmployees,
        Self::AdminAddJob,
    ];

    /// Path the route is mounted at.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Companies => "/companies",
            Self::Login => "/login",
            Self::Jobs => "/jobs",
            Self::AdminEmployees => "/admin/employees",
            Self::AdminAddJob => "/admin/add-job",
        }
    }

    /// Whether the route is guarded at all.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Jobs | Self::AdminEmployees | Self::AdminAddJob)
    }

    /// Role a signed-in user needs; `None` for public routes.
    #[must_use]
    pub const fn required_role(self) -> Option<Role> {
        match self {
            Self::Jobs => Some(Role::Employee),
            Self::AdminEmployees | Self::AdminAddJob => Some(Role::Admin),
            Self::Home | Self::About | Self::Contact | Self::Companies | Self::Login => None,
        }
    }

    /// Match a path, ignoring any query, fragment or trailing slash.
    #[must_use]
    pub fn resolve(path: &str) -> Option<Self> {
        let bare = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = match bare.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Result of navigating to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    /// Route matching the requested path, if any.
    pub requested: Option<Route>,
    /// What the navigation layer should do.
    pub decision: GuardDecision,
}

impl Navigation {
    /// Route that ends up on screen.
    #[must_use]
    pub fn destination(&self) -> Route {
        match self.decision {
            GuardDecision::Render => self.requested.unwrap_or(Route::Home),
            GuardDecision::RedirectLogin { .. } => Route::Login,
            GuardDecision::RedirectHome { .. } => Route::Home,
        }
    }
}

/// Resolve `path` and apply [`guard`] to protected routes.
///
/// Unknown paths redirect home, replacing history.
#[must_use]
pub fn navigate(path: &str, session: &SessionState) -> Navigation {
    let requested = Route::resolve(path);
    let decision = match requested {
        None => GuardDecision::RedirectHome { replace: true },
        Some(route) if route.is_protected() => guard(session, route.required_role()),
        Some(_) => GuardDecision::Render,
    };
    Navigation {
        requested,
        decision,
    }
}
