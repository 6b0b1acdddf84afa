//! Wire DTOs for the ParkDeck REST surface.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON payloads field-for-field so serde
//! round-trips stay lossless. Timestamps travel as ISO 8601 strings;
//! identifiers are server-assigned integers. Dashboard payloads are left as
//! opaque `serde_json::Value`; their shape belongs to the views.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::session::Role;

/// An account as returned by `/auth/me` and the admin user list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Credentials for `/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `/auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Issued session returned by login and register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// Probe payload for the registration-page duplicate check.
#[derive(Clone, Debug, Serialize)]
pub struct DuplicateProbe {
    pub username: String,
    pub email: String,
}

/// Which fields of a [`DuplicateProbe`] already exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateCheck {
    pub username: bool,
    pub email: bool,
}

/// Role lookup response from `/user/role`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleResponse {
    pub role: Role,
}

/// A parking lot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParkingLot {
    pub id: i64,
    /// Human-facing lot name (e.g. `"Downtown Parking"`).
    pub prime_location_name: String,
    /// Hourly rate.
    pub price_per_hr: f64,
    pub address: String,
    pub pin_code: String,
    /// Total spot count in this lot.
    pub max_spots: i64,
}

/// Occupancy state of a single spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpotStatus {
    #[serde(rename = "A")]
    Available,
    #[serde(rename = "O")]
    Occupied,
}

/// A single parking spot within a lot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSpot {
    pub id: i64,
    pub lot_id: i64,
    /// Spot number, unique within its lot.
    pub spot_no: i64,
    pub status: SpotStatus,
}

/// Lifecycle state of a reservation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "U")]
    Upcoming,
    #[serde(rename = "A")]
    Active,
    #[serde(rename = "C")]
    Completed,
    #[serde(rename = "X")]
    Cancelled,
}

/// A spot reservation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub spot_id: i64,
    pub user_id: i64,
    /// Requested booking start, ISO 8601.
    pub parking_time: String,
    /// Actual check-in, ISO 8601, once parked.
    pub checkin_time: Option<String>,
    /// Actual departure, ISO 8601, once released.
    pub leaving_time: Option<String>,
    pub cost: Option<f64>,
    pub vehicle_number: String,
    pub status: ReservationStatus,
}

/// Payload for `/parking/reserve`.
#[derive(Clone, Debug, Serialize)]
pub struct ReserveRequest {
    pub lot_id: i64,
    /// Specific spot, if the visitor picked one; the server assigns
    /// otherwise.
    pub spot_id: Option<i64>,
    /// Requested booking start, ISO 8601.
    pub parking_time: String,
    pub vehicle_number: String,
}

/// Payload for creating a lot via the admin surface.
#[derive(Clone, Debug, Serialize)]
pub struct NewLot {
    pub prime_location_name: String,
    pub price_per_hr: f64,
    pub address: String,
    pub pin_code: String,
    pub max_spots: i64,
}
