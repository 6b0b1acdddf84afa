//! User-facing lookups.

#[cfg(test)]
#[path = "api_user_test.rs"]
mod api_user_test;

use serde_json::Value;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::RoleResponse;

const ROLE_PATH: &str = "/user/role";
const DASHBOARD_DATA_PATH: &str = "/user/dashboard-data";

impl Api {
    /// `GET /user/role`.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn user_role(&self) -> Result<RoleResponse, ApiError> {
        self.get(ROLE_PATH).await
    }

    /// `GET /user/dashboard-data`. The payload shape belongs to the view,
    /// so it passes through as opaque JSON.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn user_dashboard_data(&self) -> Result<Value, ApiError> {
        self.get(DASHBOARD_DATA_PATH).await
    }
}
