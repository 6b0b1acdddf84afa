use super::*;

#[test]
fn user_deserializes_with_role() {
    let user: User = serde_json::from_str(
        r#"{"id":3,"username":"dana","email":"dana@example.com","role":"admin"}"#,
    )
    .expect("user json");
    assert_eq!(user.id, 3);
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn spot_status_uses_single_letter_codes() {
    assert_eq!(
        serde_json::to_string(&SpotStatus::Available).expect("serialize"),
        "\"A\""
    );
    let status: SpotStatus = serde_json::from_str("\"O\"").expect("deserialize");
    assert_eq!(status, SpotStatus::Occupied);
}

#[test]
fn reservation_status_uses_single_letter_codes() {
    let codes = [
        (ReservationStatus::Upcoming, "\"U\""),
        (ReservationStatus::Active, "\"A\""),
        (ReservationStatus::Completed, "\"C\""),
        (ReservationStatus::Cancelled, "\"X\""),
    ];
    for (status, expected) in codes {
        assert_eq!(serde_json::to_string(&status).expect("serialize"), expected);
    }
}

#[test]
fn reservation_tolerates_open_ended_fields() {
    let reservation: Reservation = serde_json::from_str(
        r#"{
            "id": 9,
            "spot_id": 4,
            "user_id": 3,
            "parking_time": "2025-07-01T09:00:00",
            "checkin_time": null,
            "leaving_time": null,
            "cost": null,
            "vehicle_number": "KA01AB1234",
            "status": "U"
        }"#,
    )
    .expect("reservation json");
    assert_eq!(reservation.status, ReservationStatus::Upcoming);
    assert_eq!(reservation.checkin_time, None);
    assert_eq!(reservation.cost, None);
}

#[test]
fn reserve_request_serializes_expected_fields() {
    let request = ReserveRequest {
        lot_id: 2,
        spot_id: Some(14),
        parking_time: "2025-07-01T09:00:00".to_owned(),
        vehicle_number: "KA01AB1234".to_owned(),
    };
    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(value["lot_id"], 2);
    assert_eq!(value["spot_id"], 14);
    assert_eq!(value["vehicle_number"], "KA01AB1234");
}

#[test]
fn auth_response_round_trips() {
    let raw = r#"{
        "access_token": "tok",
        "user": {"id":1,"username":"sam","email":"sam@example.com","role":"user"}
    }"#;
    let response: AuthResponse = serde_json::from_str(raw).expect("auth json");
    assert_eq!(response.access_token, "tok");
    assert_eq!(response.user.role, Role::User);
}
