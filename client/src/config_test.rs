use super::*;

#[test]
fn defaults_when_unset() {
    let config = ClientConfig::from_values(None, None, None);
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.google_client_id, None);
    assert_eq!(config.maps_embed_base, DEFAULT_MAPS_EMBED_BASE);
}

#[test]
fn trailing_slashes_trimmed() {
    let config = ClientConfig::from_values(Some("https://api.example.com/"), None, Some("https://maps.example.com//"));
    assert_eq!(config.api_base, "https://api.example.com");
    assert_eq!(config.maps_embed_base, "https://maps.example.com");
}

#[test]
fn blank_values_fall_back() {
    let config = ClientConfig::from_values(Some("  "), Some(" "), Some(""));
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.google_client_id, None);
    assert_eq!(config.maps_embed_base, DEFAULT_MAPS_EMBED_BASE);
}

#[test]
fn google_client_id_kept_when_present() {
    let config = ClientConfig::from_values(None, Some("abc.apps.googleusercontent.com"), None);
    assert_eq!(config.google_client_id.as_deref(), Some("abc.apps.googleusercontent.com"));
}

#[test]
fn api_url_joins_with_single_slash() {
    let config = ClientConfig::from_values(Some("http://localhost:8081/"), None, None);
    assert_eq!(config.api_url("/api/properties"), "http://localhost:8081/api/properties");
    assert_eq!(config.api_url("api/properties"), "http://localhost:8081/api/properties");
}
