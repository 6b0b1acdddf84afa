//! HTTP gateway: one configured client, uniform error shape, and the
//! one-to-one endpoint groups (auth, user, parking, admin).

mod api;
mod api_admin;
mod api_auth;
mod api_parking;
mod api_user;
mod error;
pub mod types;

pub use api::{Api, SessionExpiredHook};
pub use error::{ApiError, ErrorKind};
