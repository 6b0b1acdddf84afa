//! The configured HTTP client every endpoint group goes through.
//!
//! ARCHITECTURE
//! ============
//! Two cross-cutting behaviors live here and nowhere else:
//!
//! - every outbound request picks up the bearer token from the injected
//!   store, regardless of endpoint;
//! - every failure is normalized into [`ApiError`] before the caller sees
//!   it, and a 401 additionally clears the session and notifies the
//!   registered session-expired subscriber.
//!
//! The subscriber seam keeps navigation out of the HTTP layer; wire
//! [`crate::router::Router::handle_session_expired`] in to reproduce the
//! classic redirect-to-login recovery.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Arc, Mutex};

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::session::{ACCESS_TOKEN_KEY, SessionStore, clear_session};

/// Subscriber invoked after a 401 has cleared the session.
pub type SessionExpiredHook = Arc<dyn Fn(&ApiError) + Send + Sync>;

/// Gateway client for the ParkDeck REST surface.
pub struct Api {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    expired_hook: Mutex<Option<SessionExpiredHook>>,
}

impl Api {
    /// Build a client with the fixed request timeout from `config`.
    ///
    /// # Errors
    ///
    /// Returns the underlying client-construction error (TLS backend
    /// initialization, effectively).
    pub fn new(config: &ApiConfig, store: Arc<dyn SessionStore>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            store,
            expired_hook: Mutex::new(None),
        })
    }

    /// Register the session-expired subscriber. The last registration wins.
    pub fn on_session_expired(&self, hook: impl Fn(&ApiError) + Send + Sync + 'static) {
        *self.expired_hook.lock().expect("hook lock") = Some(Arc::new(hook));
    }

    pub(crate) fn session_store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Start a request against `path`, attaching the bearer token iff the
    /// store currently holds one.
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.endpoint(path));
        if let Some(token) = self.store.get(ACCESS_TOKEN_KEY) {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, path)).await
    }

    /// Send a prepared request and normalize the outcome.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                let normalized = transport_error(error.is_timeout());
                tracing::warn!(message = %normalized.message, "request failed without a response");
                return Err(normalized);
            }
        };

        let status = response.status();
        if status.is_success() {
            let code = status.as_u16();
            return response.json::<T>().await.map_err(|error| {
                tracing::warn!(status = code, %error, "response body failed to decode");
                ApiError::decode(code)
            });
        }

        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        let normalized = ApiError::from_response(status.as_u16(), &body);
        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.expire_session(&normalized);
        }
        tracing::warn!(
            status = status.as_u16(),
            message = %normalized.message,
            "api request rejected"
        );
        Err(normalized)
    }

    /// 401 recovery: clear the persisted session, then notify the
    /// subscriber. The caller still receives the normalized error so the
    /// active view can show a message.
    fn expire_session(&self, error: &ApiError) {
        clear_session(self.store.as_ref());
        tracing::warn!("authentication expired, session cleared");
        let hook = self.expired_hook.lock().expect("hook lock").clone();
        if let Some(hook) = hook {
            hook(error);
        }
    }
}

/// Map a no-response transport failure onto the normalized shape.
fn transport_error(timed_out: bool) -> ApiError {
    if timed_out {
        ApiError::timeout()
    } else {
        ApiError::network()
    }
}
