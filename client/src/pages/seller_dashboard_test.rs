use super::*;
use crate::net::types::PropertyType;

fn listing(id: i64, status: PropertyStatus) -> Property {
    Property {
        id,
        title: format!("Listing {id}"),
        kind: PropertyType::House,
        price: 1_000_000.0,
        area: "900 sqft".to_owned(),
        beds: None,
        baths: None,
        bhk: None,
        description: None,
        address: "MG Road".to_owned(),
        city: "Pune".to_owned(),
        images: None,
        rejection_reason: None,
        status,
        seller: None,
    }
}

#[test]
fn pending_count_only_counts_pending() {
    let list = vec![
        listing(1, PropertyStatus::Pending),
        listing(2, PropertyStatus::Approved),
        listing(3, PropertyStatus::Pending),
        listing(4, PropertyStatus::Rejected),
    ];
    assert_eq!(pending_count(&list), 2);
    assert_eq!(pending_count(&[]), 0);
}
