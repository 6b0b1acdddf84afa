//! Navigation guard.
//!
//! DESIGN
//! ======
//! A pure, synchronous decision over the target route's meta and the current
//! session snapshot. No network calls happen here; the caller performs the
//! navigation the decision names.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{Route, RouteName};
use crate::session::{Role, Session};

/// Host-configurable access policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    /// Admit admins onto user-only routes instead of redirecting them to the
    /// admin dashboard.
    pub admins_on_user_routes: bool,
    /// Carry the originally requested path as a `redirect` query parameter
    /// when sending an unauthenticated visitor to login.
    pub preserve_redirect: bool,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self {
            admins_on_user_routes: false,
            preserve_redirect: true,
        }
    }
}

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Let the navigation proceed.
    Allow,
    /// Navigate somewhere else instead, optionally carrying the originally
    /// requested path for a post-login return.
    Redirect {
        to: RouteName,
        preserve: Option<String>,
    },
}

impl Decision {
    fn redirect(to: RouteName) -> Self {
        Self::Redirect { to, preserve: None }
    }
}

/// Evaluate a navigation to `target`.
///
/// Checks run in order: authentication, role, guest-only. `requested_path`
/// is what the visitor asked for, kept for the post-login return.
#[must_use]
pub fn evaluate(
    target: &Route,
    requested_path: &str,
    session: &Session,
    policy: &GuardPolicy,
) -> Decision {
    if target.meta.requires_auth {
        if !session.is_authenticated() {
            let preserve = policy
                .preserve_redirect
                .then(|| requested_path.to_owned());
            return Decision::Redirect {
                to: RouteName::Login,
                preserve,
            };
        }
        match target.meta.role {
            Some(Role::Admin) if !session.is_admin() => {
                return Decision::redirect(RouteName::UserDashboard);
            }
            Some(Role::User) if session.is_admin() && !policy.admins_on_user_routes => {
                return Decision::redirect(RouteName::AdminDashboard);
            }
            _ => {}
        }
    }

    if target.meta.guest_only && session.is_authenticated() {
        let to = if session.is_admin() {
            RouteName::AdminDashboard
        } else {
            RouteName::UserDashboard
        };
        return Decision::redirect(to);
    }

    Decision::Allow
}
