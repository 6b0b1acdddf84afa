//! Client SDK for the ParkDeck parking-reservation service.
//!
//! ARCHITECTURE
//! ============
//! Two cooperating pieces share one injected [`session::SessionStore`]:
//!
//! - [`router`] evaluates every navigation against the static [`routes`]
//!   table and the persisted session, redirecting to login or to the
//!   role-appropriate dashboard when access is not permitted.
//! - [`net::Api`] wraps all outbound HTTP: it attaches the bearer token,
//!   normalizes every failure into [`net::ApiError`], and on a 401 clears
//!   the session and notifies a subscriber.
//!
//! Rendering is a separate concern; this crate only decides, fetches, and
//! reports.

pub mod config;
pub mod guard;
pub mod net;
pub mod router;
pub mod routes;
pub mod session;

pub use config::ApiConfig;
pub use guard::{Decision, GuardPolicy};
pub use net::{Api, ApiError, ErrorKind};
pub use router::{Navigator, Router};
pub use routes::{Route, RouteMeta, RouteName};
pub use session::{MemoryStore, Role, Session, SessionStore};
