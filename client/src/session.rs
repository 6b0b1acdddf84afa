//! Client-held session state and its storage abstraction.
//!
//! DESIGN
//! ======
//! The session is an explicit context object, never a process global. Both
//! the router guard and the API client take a [`SessionStore`] so tests and
//! hosts can swap the persistence medium; [`MemoryStore`] is the in-crate
//! implementation.
//!
//! The session has exactly two reachable states, anonymous and
//! authenticated(role). Login/register moves it forward, logout or any 401
//! moves it back. Nothing else transitions it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Storage key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key holding the role string (`"user"` or `"admin"`).
pub const USER_ROLE_KEY: &str = "user_role";
/// Storage key holding the serialized user profile.
pub const USER_KEY: &str = "user";

/// Role attached to an authenticated session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Stable string form used in storage and on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse a stored role string. Unknown values yield `None` so a
    /// corrupted entry degrades to "no role" rather than a panic.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Key/value persistence for the session fields.
///
/// Reads and writes are atomic per key; clearing removes the token, role,
/// and profile together. No further locking is layered on top.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().expect("session store lock");
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().expect("session store lock");
        entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().expect("session store lock");
        entries.remove(key);
    }
}

/// Snapshot of the persisted session, read on every navigation and request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    /// The anonymous session: no token, no role.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated session with the given token and role.
    #[must_use]
    pub fn authenticated(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role),
        }
    }

    /// Read the current session out of the store.
    #[must_use]
    pub fn load(store: &dyn SessionStore) -> Self {
        let token = store.get(ACCESS_TOKEN_KEY);
        let role = store.get(USER_ROLE_KEY).and_then(|raw| Role::parse(&raw));
        Self { token, role }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// Persist an authenticated session: token, role, and serialized profile.
pub fn persist_session(store: &dyn SessionStore, token: &str, role: Role, profile_json: &str) {
    store.set(ACCESS_TOKEN_KEY, token);
    store.set(USER_ROLE_KEY, role.as_str());
    store.set(USER_KEY, profile_json);
    tracing::info!(role = role.as_str(), "session established");
}

/// Remove all session keys together. Used on logout and on any 401.
pub fn clear_session(store: &dyn SessionStore) {
    store.remove(ACCESS_TOKEN_KEY);
    store.remove(USER_ROLE_KEY);
    store.remove(USER_KEY);
    tracing::info!("session cleared");
}
