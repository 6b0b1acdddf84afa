//! Parking endpoints: lots, spots, reservations.

#[cfg(test)]
#[path = "api_parking_test.rs"]
mod api_parking_test;

use serde_json::Value;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{ParkingLot, ParkingSpot, Reservation, ReserveRequest};

const LOTS_PATH: &str = "/parking/lots";
const RESERVE_PATH: &str = "/parking/reserve";

fn lot_spots_path(lot_id: i64) -> String {
    format!("/parking/lots/{lot_id}/spots")
}

fn cancel_reservation_path(reservation_id: i64) -> String {
    format!("/parking/reservations/{reservation_id}/cancel")
}

impl Api {
    /// `GET /parking/lots`.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn parking_lots(&self) -> Result<Vec<ParkingLot>, ApiError> {
        self.get(LOTS_PATH).await
    }

    /// `GET /parking/lots/{lot_id}/spots`.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn lot_spots(&self, lot_id: i64) -> Result<Vec<ParkingSpot>, ApiError> {
        self.get(&lot_spots_path(lot_id)).await
    }

    /// `POST /parking/reserve`.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn reserve(&self, request: &ReserveRequest) -> Result<Reservation, ApiError> {
        self.post(RESERVE_PATH, request).await
    }

    /// `POST /parking/reservations/{id}/cancel`.
    ///
    /// # Errors
    ///
    /// Rejects with the normalized [`ApiError`].
    pub async fn cancel_reservation(&self, reservation_id: i64) -> Result<Value, ApiError> {
        self.post_empty(&cancel_reservation_path(reservation_id)).await
    }
}
