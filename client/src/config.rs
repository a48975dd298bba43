//! Build-time client configuration.
//!
//! Values are baked into the WASM bundle at compile time, since the browser
//! has no process environment:
//! - `REALESTATE_API_BASE`: backend base address, default `http://localhost:8081`
//! - `REALESTATE_GOOGLE_CLIENT_ID`: Google identity client id; Google sign-in
//!   is hidden when unset
//! - `REALESTATE_MAPS_EMBED_BASE`: map embed endpoint, default Google Maps

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:8081";
pub const DEFAULT_MAPS_EMBED_BASE: &str = "https://maps.google.com/maps";

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub google_client_id: Option<String>,
    pub maps_embed_base: String,
}

impl ClientConfig {
    /// Configuration compiled into this build.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("REALESTATE_API_BASE"),
            option_env!("REALESTATE_GOOGLE_CLIENT_ID"),
            option_env!("REALESTATE_MAPS_EMBED_BASE"),
        )
    }

    fn from_values(api_base: Option<&str>, google_client_id: Option<&str>, maps_embed_base: Option<&str>) -> Self {
        Self {
            api_base: normalize_base(api_base, DEFAULT_API_BASE),
            google_client_id: google_client_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(ToOwned::to_owned),
            maps_embed_base: normalize_base(maps_embed_base, DEFAULT_MAPS_EMBED_BASE),
        }
    }

    /// Join an absolute API path (`/api/...`) onto the base address.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn normalize_base(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_owned()
}
