use serde_json::{Value, json};

use super::*;

#[test]
fn from_response_prefers_server_message_and_field_errors() {
    let body = json!({
        "message": "Validation failed",
        "errors": { "email": "already taken", "username": "too short" }
    });
    let error = ApiError::from_response(422, &body);
    assert_eq!(error.status, 422);
    assert_eq!(error.message, "Validation failed");
    assert_eq!(error.errors.get("email").map(String::as_str), Some("already taken"));
    assert_eq!(error.errors.len(), 2);
}

#[test]
fn from_response_falls_back_to_generic_message() {
    let error = ApiError::from_response(500, &Value::Null);
    assert_eq!(error.status, 500);
    assert_eq!(error.message, GENERIC_MESSAGE);
    assert!(error.errors.is_empty());
}

#[test]
fn from_response_ignores_non_string_field_errors() {
    let body = json!({ "errors": { "count": 3, "email": "bad" } });
    let error = ApiError::from_response(400, &body);
    assert_eq!(error.errors.len(), 1);
    assert!(error.errors.contains_key("email"));
}

#[test]
fn timeout_has_status_zero_and_timeout_message() {
    let error = ApiError::timeout();
    assert_eq!(error.status, 0);
    assert_eq!(error.message, TIMEOUT_MESSAGE);
    assert_eq!(
        error.errors.get("general").map(String::as_str),
        Some("Connection timeout")
    );
}

#[test]
fn network_has_status_zero_and_network_message() {
    let error = ApiError::network();
    assert_eq!(error.status, 0);
    assert_eq!(error.message, NETWORK_MESSAGE);
    assert_eq!(
        error.errors.get("general").map(String::as_str),
        Some("Network error")
    );
}

#[test]
fn kind_classifies_the_full_taxonomy() {
    assert_eq!(
        ApiError::from_response(401, &Value::Null).kind(),
        ErrorKind::AuthenticationExpired
    );
    assert_eq!(
        ApiError::from_response(503, &Value::Null).kind(),
        ErrorKind::ServerRejected
    );
    assert_eq!(ApiError::timeout().kind(), ErrorKind::Timeout);
    assert_eq!(ApiError::network().kind(), ErrorKind::NetworkUnavailable);
}

#[test]
fn decode_keeps_the_original_status() {
    let error = ApiError::decode(200);
    assert_eq!(error.status, 200);
    assert_eq!(error.kind(), ErrorKind::ServerRejected);
}

#[test]
fn display_includes_message_and_status() {
    let error = ApiError::from_response(404, &json!({ "message": "No such lot" }));
    assert_eq!(error.to_string(), "No such lot (status 404)");
}
