use std::sync::Arc;

use reqwest::Method;
use reqwest::header::AUTHORIZATION;

use super::*;
use crate::config::ApiConfig;
use crate::session::{ACCESS_TOKEN_KEY, MemoryStore, SessionStore};

#[test]
fn endpoint_paths_match_the_rest_surface() {
    assert_eq!(LOTS_PATH, "/parking/lots");
    assert_eq!(RESERVE_PATH, "/parking/reserve");
}

#[test]
fn lot_spots_path_embeds_the_lot_id() {
    assert_eq!(lot_spots_path(7), "/parking/lots/7/spots");
}

#[test]
fn cancel_reservation_path_embeds_the_reservation_id() {
    assert_eq!(
        cancel_reservation_path(42),
        "/parking/reservations/42/cancel"
    );
}

#[test]
fn reserve_builds_an_authenticated_post() {
    let store = Arc::new(MemoryStore::new());
    store.set(ACCESS_TOKEN_KEY, "t");
    let api = Api::new(&ApiConfig::new("http://localhost:5000/api"), store)
        .expect("client construction");

    let request = api
        .request(Method::POST, RESERVE_PATH)
        .build()
        .expect("request build");
    assert_eq!(request.method(), &Method::POST);
    assert_eq!(
        request.url().as_str(),
        "http://localhost:5000/api/parking/reserve"
    );
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    assert_eq!(header, Some("Bearer t"));
}
