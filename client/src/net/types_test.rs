use super::*;

// =============================================================
// Helpers
// =============================================================

fn property_json() -> serde_json::Value {
    serde_json::json!({
        "id": 12,
        "title": "Sea-facing apartment",
        "type": "APARTMENT",
        "price": 15_000_000.0,
        "area": "1200 sqft",
        "beds": 3,
        "baths": 2,
        "bhk": "3BHK",
        "description": "Bright and airy",
        "address": "12 Marine Drive",
        "city": "Mumbai",
        "images": "https://img/a.jpg, https://img/b.jpg,",
        "rejectionReason": null,
        "status": "APPROVED",
        "seller": {
            "id": 3,
            "name": "Ravi",
            "email": "ravi@example.com",
            "role": "SELLER",
            "phone": "9876543210",
            "password": "$2a$hash",
            "createdAt": "2025-01-01T10:00:00"
        },
        "createdAt": [2025, 1, 2, 9, 30, 0]
    })
}

fn property() -> Property {
    serde_json::from_value(property_json()).unwrap()
}

// =============================================================
// Property
// =============================================================

#[test]
fn property_parses_backend_shape() {
    let p = property();
    assert_eq!(p.id, 12);
    assert_eq!(p.kind, PropertyType::Apartment);
    assert_eq!(p.status, PropertyStatus::Approved);
    assert_eq!(p.beds, Some(3));
    assert_eq!(p.seller.as_ref().map(|s| s.role), Some(Role::Seller));
    assert_eq!(p.seller.as_ref().and_then(|s| s.phone.as_deref()), Some("9876543210"));
}

#[test]
fn property_optional_fields_default() {
    let p: Property = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Open farmland",
        "type": "FARM",
        "price": 100.0,
        "address": "Plot 9",
        "city": "Nashik"
    }))
    .unwrap();
    assert_eq!(p.status, PropertyStatus::Pending);
    assert_eq!(p.beds, None);
    assert_eq!(p.seller, None);
    assert_eq!(p.cover_image(), PLACEHOLDER_IMAGE);
}

#[test]
fn image_urls_split_and_trim() {
    assert_eq!(property().image_urls(), vec!["https://img/a.jpg", "https://img/b.jpg"]);
    assert_eq!(property().cover_image(), "https://img/a.jpg");
}

#[test]
fn token_amount_is_five_percent() {
    assert!((property().token_amount() - 750_000.0).abs() < 1e-6);
    assert!((token_amount(0.0)).abs() < f64::EPSILON);
}

#[test]
fn full_address_joins_parts() {
    assert_eq!(property().full_address(), "12 Marine Drive, Mumbai");
    let mut p = property();
    p.address = "  ".to_owned();
    assert_eq!(p.full_address(), "Mumbai");
}

#[test]
fn property_type_parse_roundtrips_wire_names() {
    for kind in PropertyType::ALL {
        assert_eq!(PropertyType::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(PropertyType::parse("castle"), None);
}

#[test]
fn rooms_apply_to_dwellings_only() {
    assert!(PropertyType::Villa.has_rooms());
    assert!(!PropertyType::Land.has_rooms());
    assert!(!PropertyType::Commercial.has_rooms());
}

// =============================================================
// PropertyDraft
// =============================================================

fn draft() -> PropertyDraft {
    PropertyDraft {
        title: "Cosy cottage".to_owned(),
        kind: PropertyType::House,
        price: 2_500_000.0,
        area: "900 sqft".to_owned(),
        address: "4 Hill Road".to_owned(),
        city: "Shimla".to_owned(),
        ..PropertyDraft::default()
    }
}

#[test]
fn draft_valid_passes() {
    assert_eq!(draft().validate(), Ok(()));
}

#[test]
fn draft_title_length_enforced() {
    let mut d = draft();
    d.title = "Hut".to_owned();
    assert_eq!(d.validate(), Err("Title must be between 5 and 100 characters"));
    d.title = "x".repeat(101);
    assert!(d.validate().is_err());
}

#[test]
fn draft_negative_price_rejected() {
    let mut d = draft();
    d.price = -1.0;
    assert_eq!(d.validate(), Err("Price cannot be negative"));
}

#[test]
fn draft_required_location_fields() {
    let mut d = draft();
    d.city = " ".to_owned();
    assert_eq!(d.validate(), Err("City is required"));
}

#[test]
fn draft_serializes_wire_names_and_skips_id() {
    let mut d = draft();
    d.id = Some(5);
    d.beds = Some(2);
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["type"], "HOUSE");
    assert_eq!(json["beds"], 2);
    assert!(json.get("id").is_none());
    assert!(json.get("baths").is_none());
}

#[test]
fn draft_from_property_prefills() {
    let d = PropertyDraft::from_property(&property());
    assert_eq!(d.id, Some(12));
    assert_eq!(d.description, "Bright and airy");
    assert_eq!(d.kind, PropertyType::Apartment);
}

// =============================================================
// PropertyFilter
// =============================================================

#[test]
fn empty_filter_has_no_query() {
    assert!(PropertyFilter::default().query_pairs().is_empty());
}

#[test]
fn filter_query_uses_backend_names() {
    let filter = PropertyFilter {
        city: " Pune ".to_owned(),
        min_price: Some(100.0),
        max_price: Some(5000.5),
        kind: Some(PropertyType::Villa),
        beds: Some(2),
    };
    assert_eq!(
        filter.query_pairs(),
        vec![
            ("city", "Pune".to_owned()),
            ("minPrice", "100".to_owned()),
            ("maxPrice", "5000.5".to_owned()),
            ("type", "VILLA".to_owned()),
            ("beds", "2".to_owned()),
        ]
    );
}

// =============================================================
// Timestamps, transactions, leads
// =============================================================

#[test]
fn transaction_accepts_iso_and_array_dates() {
    let iso: Transaction = serde_json::from_value(serde_json::json!({
        "id": 1, "amount": 500.0, "transactionId": "tx-1", "paymentDate": "2025-03-04T05:06:07"
    }))
    .unwrap();
    assert_eq!(iso.payment_date.as_deref(), Some("2025-03-04T05:06:07"));

    let array: Transaction = serde_json::from_value(serde_json::json!({
        "id": 2, "amount": 500.0, "transactionId": "tx-2", "paymentDate": [2025, 3, 4, 5, 6, 7, 123]
    }))
    .unwrap();
    assert_eq!(array.payment_date.as_deref(), Some("2025-03-04T05:06:07"));

    let date_only: Transaction = serde_json::from_value(serde_json::json!({
        "id": 3, "amount": 1.0, "paymentDate": [2025, 12, 1]
    }))
    .unwrap();
    assert_eq!(date_only.payment_date.as_deref(), Some("2025-12-01T00:00:00"));
    assert_eq!(date_only.transaction_id, "");
}

#[test]
fn transaction_rejects_bad_date_shape() {
    let result = serde_json::from_value::<Transaction>(serde_json::json!({
        "id": 1, "amount": 1.0, "paymentDate": {"year": 2025}
    }));
    assert!(result.is_err());
}

#[test]
fn lead_parses_nested_user_and_property() {
    let lead: Lead = serde_json::from_value(serde_json::json!({
        "id": 9,
        "user": {"id": 4, "name": "Meera", "email": "m@example.com", "role": "BUYER"},
        "property": property_json(),
        "createdAt": null
    }))
    .unwrap();
    assert_eq!(lead.user.name, "Meera");
    assert_eq!(lead.property.id, 12);
    assert_eq!(lead.created_at, None);
}

#[test]
fn format_date_takes_date_part() {
    assert_eq!(format_date(Some("2025-03-04T05:06:07")), "2025-03-04");
    assert_eq!(format_date(Some("2025")), "2025");
    assert_eq!(format_date(None), "-");
}

// =============================================================
// Auth
// =============================================================

#[test]
fn auth_response_into_session() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "token": "jwt", "id": 5, "name": "Kiran", "email": "k@example.com", "role": "ADMIN"
    }))
    .unwrap();
    let session = resp.into_session("ignored@example.com");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.email, "k@example.com");
    assert_eq!(session.token, "jwt");
}

#[test]
fn auth_response_without_email_uses_fallback() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "token": "jwt", "id": 5, "name": "Kiran", "role": "BUYER"
    }))
    .unwrap();
    assert_eq!(resp.into_session("typed@example.com").email, "typed@example.com");
}

#[test]
fn signup_request_serializes_camel_case() {
    let req = SignupRequest {
        name: "Dev Shah".to_owned(),
        email: "dev@example.com".to_owned(),
        password: "secret1".to_owned(),
        role: Role::Seller,
        phone: "9999999999".to_owned(),
        company_name: Some("Shah Estates".to_owned()),
        address: None,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["role"], "SELLER");
    assert_eq!(json["companyName"], "Shah Estates");
    assert!(json.get("address").is_none());
}

// =============================================================
// format_price
// =============================================================

#[test]
fn format_price_groups_thousands() {
    assert_eq!(format_price(15_000_000.0), "₹ 15,000,000");
    assert_eq!(format_price(999.0), "₹ 999");
    assert_eq!(format_price(1000.0), "₹ 1,000");
    assert_eq!(format_price(0.0), "₹ 0");
}

#[test]
fn format_price_keeps_significant_decimals() {
    assert_eq!(format_price(1_500_000.5), "₹ 1,500,000.5");
    assert_eq!(format_price(12.25), "₹ 12.25");
    assert_eq!(format_price(750_000.000_000_1), "₹ 750,000");
}

#[test]
fn format_price_handles_non_finite() {
    assert_eq!(format_price(f64::NAN), "₹ N/A");
}
