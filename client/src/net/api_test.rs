use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn property_path_encodes_id() {
    assert_eq!(property_path("42"), "/api/properties/42");
    assert_eq!(property_path("4 2"), "/api/properties/4%202");
}

#[test]
fn with_query_without_pairs_is_plain_path() {
    assert_eq!(with_query("/api/properties", &[]), "/api/properties");
}

#[test]
fn with_query_encodes_values() {
    let pairs = vec![("city", "Navi Mumbai".to_owned()), ("type", "VILLA".to_owned())];
    assert_eq!(with_query("/api/properties", &pairs), "/api/properties?city=Navi%20Mumbai&type=VILLA");
}

#[test]
fn status_path_includes_reason_only_when_present() {
    assert_eq!(
        property_status_path(7, PropertyStatus::Approved, None),
        "/api/properties/7/status?status=APPROVED"
    );
    assert_eq!(
        property_status_path(7, PropertyStatus::Rejected, Some("  ")),
        "/api/properties/7/status?status=REJECTED"
    );
    assert_eq!(
        property_status_path(7, PropertyStatus::Rejected, Some("Blurry photos")),
        "/api/properties/7/status?status=REJECTED&reason=Blurry%20photos"
    );
}

#[test]
fn error_message_plain_text_body() {
    assert_eq!(
        error_message_from_body(400, "Error: Email is already in use!"),
        "Error: Email is already in use!"
    );
}

#[test]
fn error_message_field_error_object() {
    let body = r#"{"title":"Title is required","price":"Price cannot be negative"}"#;
    let message = error_message_from_body(400, body);
    assert!(message.contains("Title is required"));
    assert!(message.contains("Price cannot be negative"));
    assert!(message.contains(", "));
}

#[test]
fn error_message_prefers_message_field() {
    let body = r#"{"timestamp":"2025-01-01","status":500,"error":"Internal Server Error","message":"Property is already SOLD"}"#;
    assert_eq!(error_message_from_body(500, body), "Property is already SOLD");
}

#[test]
fn error_message_empty_body_uses_status() {
    assert_eq!(error_message_from_body(401, "  "), "request failed: 401");
    assert_eq!(error_message_from_body(400, "{}"), "request failed: 400");
}

#[test]
fn error_message_json_string_body() {
    assert_eq!(error_message_from_body(400, "\"Invalid OTP\""), "Invalid OTP");
}

#[test]
fn status_error_displays_message() {
    let err = ApiError::Status { status: 400, message: "Invalid OTP".to_owned() };
    assert_eq!(err.to_string(), "Invalid OTP");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_off_browser() {
    let api = ApiClient::default();
    let result = futures::executor::block_on(api.get_property("1"));
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(api.login(&LoginRequest {
        email: "a@b.c".to_owned(),
        password: "secret".to_owned(),
    }));
    assert_eq!(result, Err(ApiError::Unavailable));
}
