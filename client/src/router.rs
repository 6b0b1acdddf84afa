//! Navigation orchestration over the route table and guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host supplies a [`Navigator`] (wherever "current location" and "go
//! there" live: history API, terminal pager, test fake). The router reads
//! the session through the injected store, applies the guard, and performs
//! the decided navigation. It also hosts the session-expired recovery the
//! API client notifies into, so the HTTP layer never touches navigation
//! directly.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::sync::Arc;

use crate::guard::{self, Decision, GuardPolicy};
use crate::routes::{self, RouteName};
use crate::session::{Session, SessionStore};

/// Host-side navigation seam.
pub trait Navigator: Send + Sync {
    /// Location the visitor is currently on (may include a query string).
    fn current_path(&self) -> String;
    /// Move the visitor to `location`.
    fn navigate(&self, location: &str);
}

/// Guard-enforcing router over an injected store and navigator.
pub struct Router {
    policy: GuardPolicy,
    store: Arc<dyn SessionStore>,
    nav: Arc<dyn Navigator>,
}

impl Router {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>, nav: Arc<dyn Navigator>) -> Self {
        Self::with_policy(store, nav, GuardPolicy::default())
    }

    #[must_use]
    pub fn with_policy(
        store: Arc<dyn SessionStore>,
        nav: Arc<dyn Navigator>,
        policy: GuardPolicy,
    ) -> Self {
        Self { policy, store, nav }
    }

    /// Navigate to `path`, applying static redirects and the guard. Returns
    /// the location actually navigated to.
    pub fn go(&self, path: &str) -> String {
        let session = Session::load(self.store.as_ref());
        let location = self.decide(path, &session);
        self.nav.navigate(&location);
        location
    }

    /// Resolve `path` against the table and session without navigating.
    #[must_use]
    pub fn decide(&self, path: &str, session: &Session) -> String {
        let mut target = routes::resolve(path);
        if let Some(to) = target.redirect {
            target = routes::by_name(to);
        }

        match guard::evaluate(target, path, session, &self.policy) {
            Decision::Allow => target.path.to_owned(),
            Decision::Redirect { to, preserve } => {
                tracing::debug!(from = path, to = to.path(), "navigation redirected");
                match preserve {
                    Some(requested) => format!("{}?redirect={requested}", to.path()),
                    None => to.path().to_owned(),
                }
            }
        }
    }

    /// Recovery hook for expired sessions, suitable for
    /// [`crate::net::Api::on_session_expired`]: unless the visitor is
    /// already on a guest view, send them to login.
    pub fn handle_session_expired(&self) {
        let current = self.nav.current_path();
        if routes::resolve(&current).meta.guest_only {
            return;
        }
        tracing::warn!(from = %current, "session expired, redirecting to login");
        self.nav.navigate(RouteName::Login.path());
    }
}
