use serde_json::json;
use transit_access_data::validation::{
    validate_accessibility_point_create, validate_bus_route_create, validate_bus_stop_create,
    validate_bus_stop_timetable_create,
};

#[test]
fn valid_accessibility_point_passes_with_fields_intact() {
    let point = validate_accessibility_point_create(&json!({
        "name": "Main Library Ramp",
        "latitude": 40.71,
        "longitude": -74.00,
        "type": "ramp",
    }))
    .unwrap();

    assert_eq!(point.name, "Main Library Ramp");
    assert_eq!(point.latitude, 40.71);
    assert_eq!(point.longitude, -74.00);
    assert_eq!(point.point_type, "ramp");
    assert_eq!(point.description, None);
    assert_eq!(point.building_name, None);
}

#[test]
fn optional_fields_carry_through_when_present() {
    let point = validate_accessibility_point_create(&json!({
        "name": "Science Wing Entrance",
        "latitude": 40.72,
        "longitude": -74.01,
        "type": "accessible_entrance",
        "description": "Automatic doors on the east side",
        "building_name": "Science Wing",
    }))
    .unwrap();

    assert_eq!(
        point.description.as_deref(),
        Some("Automatic doors on the east side")
    );
    assert_eq!(point.building_name.as_deref(), Some("Science Wing"));
}

#[test]
fn missing_required_field_is_named() {
    let err = validate_accessibility_point_create(&json!({
        "name": "Main Library Ramp",
        "longitude": -74.00,
        "type": "ramp",
    }))
    .unwrap_err();

    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].field, "latitude");
    assert_eq!(err.errors[0].reason, "is required");
}

#[test]
fn every_offending_field_is_reported_in_one_pass() {
    let err = validate_accessibility_point_create(&json!({
        "latitude": "forty",
        "longitude": -74.00,
        "type": 7,
        "floor": 2,
    }))
    .unwrap_err();

    let mut fields: Vec<&str> = err.fields().collect();
    fields.sort();
    assert_eq!(fields, ["floor", "latitude", "name", "type"]);
}

#[test]
fn server_assigned_fields_are_rejected_on_create() {
    let err = validate_bus_stop_create(&json!({
        "id": 7,
        "name": "5th Ave & Main",
        "latitude": 40.0,
        "longitude": -73.9,
        "stop_code": "B100",
        "created_at": "2024-01-01T00:00:00Z",
    }))
    .unwrap_err();

    let mut fields: Vec<&str> = err.fields().collect();
    fields.sort();
    assert_eq!(fields, ["created_at", "id"]);
    for e in &err.errors {
        assert_eq!(e.reason, "is server-assigned and not accepted on create");
    }
}

#[test]
fn unknown_fields_are_rejected() {
    let err = validate_bus_route_create(&json!({
        "route_number": "12",
        "route_name": "Crosstown",
        "color": "#1f77b4",
        "operator": "City Transit",
    }))
    .unwrap_err();

    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].field, "operator");
    assert_eq!(err.errors[0].reason, "unknown field");
}

#[test]
fn bus_stop_accessible_defaults_to_true() {
    let stop = validate_bus_stop_create(&json!({
        "name": "5th Ave & Main",
        "latitude": 40.0,
        "longitude": -73.9,
        "stop_code": "B100",
    }))
    .unwrap();

    assert!(stop.accessible);
}

#[test]
fn bus_stop_accessible_false_is_kept() {
    let stop = validate_bus_stop_create(&json!({
        "name": "Old Bridge Stop",
        "latitude": 40.1,
        "longitude": -73.8,
        "stop_code": "B101",
        "accessible": false,
    }))
    .unwrap();

    assert!(!stop.accessible);
}

#[test]
fn valid_bus_route_passes() {
    let route = validate_bus_route_create(&json!({
        "route_number": "12",
        "route_name": "Crosstown",
        "color": "#1f77b4",
    }))
    .unwrap();

    assert_eq!(route.route_number, "12");
    assert_eq!(route.route_name, "Crosstown");
    assert_eq!(route.color, "#1f77b4");
}

#[test]
fn timetable_variant_takes_schedule_and_no_stop_code() {
    let stop = validate_bus_stop_timetable_create(&json!({
        "name": "5th Ave & Main",
        "latitude": 40.0,
        "longitude": -73.9,
        "schedule": {
            "weekday": ["07:15", "08:00", "08:45"],
            "weekend": ["09:30"],
        },
    }))
    .unwrap();

    assert!(stop.accessible);
    assert_eq!(
        stop.schedule["weekday"],
        vec!["07:15", "08:00", "08:45"]
    );
    assert_eq!(stop.schedule["weekend"], vec!["09:30"]);
}

#[test]
fn timetable_variant_rejects_stop_code() {
    let err = validate_bus_stop_timetable_create(&json!({
        "name": "5th Ave & Main",
        "latitude": 40.0,
        "longitude": -73.9,
        "stop_code": "B100",
        "schedule": {},
    }))
    .unwrap_err();

    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].field, "stop_code");
    assert_eq!(err.errors[0].reason, "unknown field");
}

#[test]
fn timetable_missing_schedule_is_an_error() {
    let err = validate_bus_stop_timetable_create(&json!({
        "name": "5th Ave & Main",
        "latitude": 40.0,
        "longitude": -73.9,
    }))
    .unwrap_err();

    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].field, "schedule");
}

#[test]
fn validation_error_display_lists_every_field() {
    let err = validate_bus_stop_create(&json!({
        "latitude": 40.0,
        "longitude": -73.9,
    }))
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("name: is required"));
    assert!(message.contains("stop_code: is required"));
}
