use super::*;

#[test]
fn embed_url_encodes_address() {
    assert_eq!(
        embed_url("https://maps.google.com/maps", "12 Marine Drive, Mumbai").as_deref(),
        Some("https://maps.google.com/maps?q=12%20Marine%20Drive%2C%20Mumbai&z=15&output=embed")
    );
}

#[test]
fn blank_address_has_no_map() {
    assert_eq!(embed_url("https://maps.google.com/maps", "   "), None);
    assert_eq!(directions_url(""), None);
}

#[test]
fn directions_url_encodes_address() {
    assert_eq!(
        directions_url("Baner, Pune").as_deref(),
        Some("https://www.google.com/maps/search/?api=1&query=Baner%2C%20Pune")
    );
}
