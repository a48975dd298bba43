//! REST client for the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`], since the backend is only reached from the
//! browser.
//!
//! The bearer token is passed in by the calling view on each request. This
//! module never reads the session itself.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying a message extracted
//! from the body. The backend answers validation failures with either a plain
//! string or a JSON object of field errors, and both are flattened into one
//! user-facing line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{
    AuthResponse, ContactRequest, GoogleLoginRequest, Lead, LoginRequest, OtpVerification, ProfileUpdate, Property,
    PropertyDraft, PropertyFilter, PropertyStatus, SignupRequest, Transaction, UserAccount,
};
use crate::config::ClientConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Backend client bound to the configured base address.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // auth
    // -------------------------------------------------------------------------

    /// `POST /api/auth/login`
    ///
    /// # Errors
    ///
    /// Returns the backend's message for bad credentials or unverified email.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.json(Verb::Post, "/api/auth/login", None, Some(to_value(request)?)).await
    }

    /// `POST /api/auth/google` with the identity provider's credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the credential.
    pub async fn google_login(&self, credential: &str) -> Result<AuthResponse, ApiError> {
        let body = to_value(&GoogleLoginRequest { token: credential.to_owned() })?;
        self.json(Verb::Post, "/api/auth/google", None, Some(body)).await
    }

    /// `POST /api/auth/signup`. Returns the backend's confirmation text.
    ///
    /// # Errors
    ///
    /// Returns field validation messages or "email already in use".
    pub async fn signup(&self, request: &SignupRequest) -> Result<String, ApiError> {
        self.text(Verb::Post, "/api/auth/signup", None, Some(to_value(request)?)).await
    }

    /// `POST /api/auth/verify-otp`
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid or expired code.
    pub async fn verify_otp(&self, request: &OtpVerification) -> Result<String, ApiError> {
        self.text(Verb::Post, "/api/auth/verify-otp", None, Some(to_value(request)?)).await
    }

    // -------------------------------------------------------------------------
    // properties
    // -------------------------------------------------------------------------

    /// `GET /api/properties` with browse filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>, ApiError> {
        let path = with_query("/api/properties", &filter.query_pairs());
        self.json(Verb::Get, &path, None, None).await
    }

    /// `GET /api/properties/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the listing does not exist.
    pub async fn get_property(&self, id: &str) -> Result<Property, ApiError> {
        self.json(Verb::Get, &property_path(id), None, None).await
    }

    /// `POST /api/properties`
    ///
    /// # Errors
    ///
    /// Returns validation messages from the backend.
    pub async fn create_property(&self, draft: &PropertyDraft, token: &str) -> Result<Property, ApiError> {
        self.json(Verb::Post, "/api/properties", Some(token), Some(to_value(draft)?)).await
    }

    /// `PUT /api/properties/{id}`
    ///
    /// # Errors
    ///
    /// Returns validation messages from the backend.
    pub async fn update_property(&self, id: i64, draft: &PropertyDraft, token: &str) -> Result<Property, ApiError> {
        let path = property_path(&id.to_string());
        self.json(Verb::Put, &path, Some(token), Some(to_value(draft)?)).await
    }

    /// `DELETE /api/properties/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the caller does not own the listing.
    pub async fn delete_property(&self, id: i64, token: &str) -> Result<(), ApiError> {
        self.text(Verb::Delete, &property_path(&id.to_string()), Some(token), None)
            .await
            .map(drop)
    }

    /// `GET /api/properties/my-listings`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn my_listings(&self, token: &str) -> Result<Vec<Property>, ApiError> {
        self.json(Verb::Get, "/api/properties/my-listings", Some(token), None).await
    }

    /// `GET /api/properties/pending`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn pending_properties(&self, token: &str) -> Result<Vec<Property>, ApiError> {
        self.json(Verb::Get, "/api/properties/pending", Some(token), None).await
    }

    /// `PUT /api/properties/{id}/status?status=..&reason=..`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn set_property_status(
        &self,
        id: i64,
        status: PropertyStatus,
        reason: Option<&str>,
        token: &str,
    ) -> Result<(), ApiError> {
        let path = property_status_path(id, status, reason);
        self.text(Verb::Put, &path, Some(token), None).await.map(drop)
    }

    // -------------------------------------------------------------------------
    // likes, contacts, bookings
    // -------------------------------------------------------------------------

    /// `POST /api/likes/{id}`. Returns whether the listing is now liked.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn toggle_like(&self, property_id: i64, token: &str) -> Result<bool, ApiError> {
        self.json(Verb::Post, &format!("/api/likes/{property_id}"), Some(token), None).await
    }

    /// `GET /api/likes/{id}/check`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn is_liked(&self, property_id: i64, token: &str) -> Result<bool, ApiError> {
        self.json(Verb::Get, &format!("/api/likes/{property_id}/check"), Some(token), None)
            .await
    }

    /// `GET /api/likes/wishlist`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn wishlist(&self, token: &str) -> Result<Vec<Property>, ApiError> {
        self.json(Verb::Get, "/api/likes/wishlist", Some(token), None).await
    }

    /// `GET /api/likes/seller-dashboard`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn seller_leads(&self, token: &str) -> Result<Vec<Lead>, ApiError> {
        self.json(Verb::Get, "/api/likes/seller-dashboard", Some(token), None).await
    }

    /// `POST /api/contacts/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn contact_seller(&self, property_id: &str, token: &str) -> Result<ContactRequest, ApiError> {
        let path = format!("/api/contacts/{}", urlencoding::encode(property_id));
        self.json(Verb::Post, &path, Some(token), None).await
    }

    /// `POST /api/transactions/book/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is already sold.
    pub async fn book_property(&self, property_id: &str, token: &str) -> Result<Transaction, ApiError> {
        let path = format!("/api/transactions/book/{}", urlencoding::encode(property_id));
        self.json(Verb::Post, &path, Some(token), None).await
    }

    /// `GET /api/transactions/buyer`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn buyer_transactions(&self, token: &str) -> Result<Vec<Transaction>, ApiError> {
        self.json(Verb::Get, "/api/transactions/buyer", Some(token), None).await
    }

    /// `GET /api/transactions/seller`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn seller_transactions(&self, token: &str) -> Result<Vec<Transaction>, ApiError> {
        self.json(Verb::Get, "/api/transactions/seller", Some(token), None).await
    }

    /// `GET /api/transactions/all`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn all_transactions(&self, token: &str) -> Result<Vec<Transaction>, ApiError> {
        self.json(Verb::Get, "/api/transactions/all", Some(token), None).await
    }

    // -------------------------------------------------------------------------
    // users
    // -------------------------------------------------------------------------

    /// `GET /api/users/profile`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn profile(&self, token: &str) -> Result<UserAccount, ApiError> {
        self.json(Verb::Get, "/api/users/profile", Some(token), None).await
    }

    /// `PUT /api/users/profile`
    ///
    /// # Errors
    ///
    /// Returns validation messages from the backend.
    pub async fn update_profile(&self, update: &ProfileUpdate, token: &str) -> Result<UserAccount, ApiError> {
        self.json(Verb::Put, "/api/users/profile", Some(token), Some(to_value(update)?)).await
    }

    /// `GET /api/users/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist.
    pub async fn user(&self, id: i64, token: &str) -> Result<UserAccount, ApiError> {
        self.json(Verb::Get, &format!("/api/users/{id}"), Some(token), None).await
    }

    /// `GET /api/admin/users`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn admin_users(&self, token: &str) -> Result<Vec<UserAccount>, ApiError> {
        self.json(Verb::Get, "/api/admin/users", Some(token), None).await
    }

    /// `DELETE /api/admin/users/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_user(&self, id: i64, token: &str) -> Result<(), ApiError> {
        self.text(Verb::Delete, &format!("/api/admin/users/{id}"), Some(token), None)
            .await
            .map(drop)
    }

    // -------------------------------------------------------------------------
    // transport
    // -------------------------------------------------------------------------

    async fn json<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let raw = self.text(verb, path, token, body).await?;
        serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn text(
        &self,
        verb: Verb,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.config.api_url(path);
            let mut builder = match verb {
                Verb::Get => Request::get(&url),
                Verb::Post => Request::post(&url),
                Verb::Put => Request::put(&url),
                Verb::Delete => Request::delete(&url),
            };
            if let Some(token) = token {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let request = match body {
                Some(body) => builder.json(&body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { status, message: error_message_from_body(status, &text) });
            }
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, token, body);
            Err(ApiError::Unavailable)
        }
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn property_path(id: &str) -> String {
    format!("/api/properties/{}", urlencoding::encode(id))
}

fn property_status_path(id: i64, status: PropertyStatus, reason: Option<&str>) -> String {
    let mut pairs = vec![("status", status.as_str().to_owned())];
    if let Some(reason) = reason.map(str::trim).filter(|r| !r.is_empty()) {
        pairs.push(("reason", reason.to_owned()));
    }
    with_query(&format!("/api/properties/{id}/status"), &pairs)
}

/// Append URL-encoded `pairs` to `path` as a query string.
fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// Turn an error body into one display line.
///
/// Field-error objects are flattened by joining their values; a `message`
/// field wins when present.
pub fn error_message_from_body(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("request failed: {status}");
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(serde_json::Value::Object(map)) => {
            if let Some(serde_json::Value::String(message)) = map.get("message")
                && !message.trim().is_empty()
            {
                return message.clone();
            }
            let joined = map
                .values()
                .map(|v| match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            if joined.is_empty() { format!("request failed: {status}") } else { joined }
        }
        _ => body.to_owned(),
    }
}
