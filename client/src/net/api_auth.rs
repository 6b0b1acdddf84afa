//! Authentication endpoints and the session transitions they drive.
//!
//! Successful login/register is the only way the session moves from
//! anonymous to authenticated; logout (and any 401 inside [`super::api`])
//! is the only way back.

#[cfg(test)]
#[path = "api_auth_test.rs"]
mod api_auth_test;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, DuplicateCheck, DuplicateProbe, LoginRequest, RegisterRequest, User};
use crate::session::{clear_session, persist_session};

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";
const ME_PATH: &str = "/auth/me";
const CHECK_DUPLICATE_PATH: &str = "/check_duplicate";

impl Api {
    /// `POST /auth/login`. Persists the issued session on success.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.post(LOGIN_PATH, request).await?;
        self.establish_session(&response);
        Ok(response)
    }

    /// `POST /auth/register`. Persists the issued session on success.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.post(REGISTER_PATH, request).await?;
        self.establish_session(&response);
        Ok(response)
    }

    /// `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get(ME_PATH).await
    }

    /// `POST /check_duplicate`: registration-page probe for taken
    /// usernames/emails.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn check_duplicate(&self, probe: &DuplicateProbe) -> Result<DuplicateCheck, ApiError> {
        self.post(CHECK_DUPLICATE_PATH, probe).await
    }

    /// Explicit logout: drop the persisted session. No server call is made;
    /// the token simply stops being presented.
    pub fn logout(&self) {
        clear_session(self.session_store());
    }

    fn establish_session(&self, response: &AuthResponse) {
        let profile =
            serde_json::to_string(&response.user).unwrap_or_else(|_| "{}".to_owned());
        persist_session(
            self.session_store(),
            &response.access_token,
            response.user.role,
            &profile,
        );
    }
}
