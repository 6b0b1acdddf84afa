//! Admin endpoints. Access control is the server's job; the guard merely
//! keeps the admin views from mounting for the wrong role.

#[cfg(test)]
#[path = "api_admin_test.rs"]
mod api_admin_test;

use serde_json::Value;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{NewLot, ParkingLot, Reservation, User};

const DASHBOARD_DATA_PATH: &str = "/admin/dashboard-data";
const USERS_PATH: &str = "/admin/users";
const RESERVATIONS_PATH: &str = "/admin/reservations";
const LOTS_PATH: &str = "/admin/lots";

impl Api {
    /// `GET /admin/dashboard-data`, passed through as opaque JSON.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn admin_dashboard_data(&self) -> Result<Value, ApiError> {
        self.get(DASHBOARD_DATA_PATH).await
    }

    /// `GET /admin/users`.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn admin_users(&self) -> Result<Vec<User>, ApiError> {
        self.get(USERS_PATH).await
    }

    /// `GET /admin/reservations`.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn admin_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.get(RESERVATIONS_PATH).await
    }

    /// `GET /admin/lots`.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn admin_lots(&self) -> Result<Vec<ParkingLot>, ApiError> {
        self.get(LOTS_PATH).await
    }

    /// `POST /admin/lots`.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn create_lot(&self, lot: &NewLot) -> Result<ParkingLot, ApiError> {
        self.post(LOTS_PATH, lot).await
    }
}
