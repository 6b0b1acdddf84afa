//! Static route table.
//!
//! Defined once at startup and never mutated. Each entry carries the access
//! meta the guard evaluates; the rendering layer maps [`RouteName`] to a view
//! component. `/` and the catch-all are plain redirects onto the login route.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::session::Role;

/// Names for every addressable view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Home,
    Login,
    Register,
    UserDashboard,
    AdminDashboard,
    Parking,
    NotFound,
}

impl RouteName {
    /// Canonical path for this route.
    #[must_use]
    pub fn path(self) -> &'static str {
        by_name(self).path
    }
}

/// Static access requirements attached to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub role: Option<Role>,
    pub guest_only: bool,
}

impl RouteMeta {
    const fn open() -> Self {
        Self {
            requires_auth: false,
            role: None,
            guest_only: false,
        }
    }

    const fn guest() -> Self {
        Self {
            requires_auth: false,
            role: None,
            guest_only: true,
        }
    }

    const fn auth(role: Option<Role>) -> Self {
        Self {
            requires_auth: true,
            role,
            guest_only: false,
        }
    }
}

/// One entry in the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: RouteName,
    pub meta: RouteMeta,
    /// Static redirect applied before the guard runs.
    pub redirect: Option<RouteName>,
}

const fn route(path: &'static str, name: RouteName, meta: RouteMeta) -> Route {
    Route {
        path,
        name,
        meta,
        redirect: None,
    }
}

const fn redirect(path: &'static str, name: RouteName, to: RouteName) -> Route {
    Route {
        path,
        name,
        meta: RouteMeta::open(),
        redirect: Some(to),
    }
}

static ROUTES: [Route; 7] = [
    redirect("/", RouteName::Home, RouteName::Login),
    route("/login", RouteName::Login, RouteMeta::guest()),
    route("/register", RouteName::Register, RouteMeta::guest()),
    route(
        "/user/dashboard",
        RouteName::UserDashboard,
        RouteMeta::auth(Some(Role::User)),
    ),
    route(
        "/admin/dashboard",
        RouteName::AdminDashboard,
        RouteMeta::auth(Some(Role::Admin)),
    ),
    route("/parking", RouteName::Parking, RouteMeta::auth(None)),
    redirect("*", RouteName::NotFound, RouteName::Login),
];

/// The full route table, in declaration order with the catch-all last.
#[must_use]
pub fn table() -> &'static [Route] {
    &ROUTES
}

/// Look a route up by name.
#[must_use]
pub fn by_name(name: RouteName) -> &'static Route {
    ROUTES
        .iter()
        .find(|route| route.name == name)
        .unwrap_or(&ROUTES[ROUTES.len() - 1])
}

/// Resolve a location to a route, ignoring any query or fragment. Unknown
/// paths resolve to the catch-all.
#[must_use]
pub fn resolve(location: &str) -> &'static Route {
    let path = location.split(['?', '#']).next().unwrap_or(location);
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .unwrap_or(&ROUTES[ROUTES.len() - 1])
}
