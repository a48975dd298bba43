use super::*;

#[test]
fn whatsapp_link_keeps_digits() {
    assert_eq!(whatsapp_link(Some("+91 98765-43210"), None).as_deref(), Some("https://wa.me/919876543210"));
}

#[test]
fn whatsapp_link_encodes_message() {
    assert_eq!(
        whatsapp_link(Some("9876543210"), Some("Hi, I'm interested")).as_deref(),
        Some("https://wa.me/9876543210?text=Hi%2C%20I%27m%20interested")
    );
}

#[test]
fn whatsapp_link_needs_a_number() {
    assert_eq!(whatsapp_link(None, None), None);
    assert_eq!(whatsapp_link(Some("n/a"), Some("hello")), None);
}

#[test]
fn tel_link_strips_spaces() {
    assert_eq!(tel_link(Some(" 98765 43210 ")).as_deref(), Some("tel:9876543210"));
    assert_eq!(tel_link(Some("  ")), None);
}

#[test]
fn mailto_link_trims() {
    assert_eq!(mailto_link(" asha@example.com "), "mailto:asha@example.com");
}
