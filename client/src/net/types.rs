//! JSON DTOs exchanged with the marketplace backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Enums mirror the
//! backend's SCREAMING_CASE names. Timestamps are kept as display strings;
//! the backend emits either ISO strings or `[y, m, d, h, mi, s, ...]` arrays
//! depending on its Jackson setup, and both normalize to ISO text here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::session::{Role, Session};

/// Cover image used when a listing has none.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x400";

/// Share of the asking price charged when a buyer books a property.
pub const TOKEN_RATE: f64 = 0.05;

// =============================================================================
// LISTINGS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    #[default]
    House,
    Land,
    Farm,
    Apartment,
    Villa,
    Commercial,
}

impl PropertyType {
    pub const ALL: [Self; 6] = [Self::House, Self::Land, Self::Farm, Self::Apartment, Self::Villa, Self::Commercial];

    /// Wire name, used for query parameters and `<select>` values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::House => "HOUSE",
            Self::Land => "LAND",
            Self::Farm => "FARM",
            Self::Apartment => "APARTMENT",
            Self::Villa => "VILLA",
            Self::Commercial => "COMMERCIAL",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Land => "Land",
            Self::Farm => "Farm",
            Self::Apartment => "Apartment",
            Self::Villa => "Villa",
            Self::Commercial => "Commercial",
        }
    }

    /// Whether bed/bath/BHK fields apply to this kind of listing.
    pub fn has_rooms(self) -> bool {
        matches!(self, Self::House | Self::Apartment | Self::Villa)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Sold,
}

impl PropertyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Sold => "SOLD",
        }
    }

    /// Badge modifier class for status chips.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge--warning",
            Self::Approved => "badge badge--success",
            Self::Rejected => "badge badge--danger",
            Self::Sold => "badge badge--muted",
        }
    }
}

/// A user as embedded in listings, leads, and transactions, and as returned
/// by the profile endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub price: f64,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub beds: Option<u32>,
    #[serde(default)]
    pub baths: Option<u32>,
    #[serde(default)]
    pub bhk: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    /// Comma-separated image URLs.
    #[serde(default)]
    pub images: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub status: PropertyStatus,
    #[serde(default)]
    pub seller: Option<UserAccount>,
}

impl Property {
    pub fn image_urls(&self) -> Vec<String> {
        split_images(self.images.as_deref().unwrap_or_default())
    }

    pub fn cover_image(&self) -> String {
        self.image_urls()
            .into_iter()
            .next()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned())
    }

    /// Booking amount charged for this listing.
    pub fn token_amount(&self) -> f64 {
        token_amount(self.price)
    }

    pub fn full_address(&self) -> String {
        match (self.address.trim(), self.city.trim()) {
            ("", city) => city.to_owned(),
            (address, "") => address.to_owned(),
            (address, city) => format!("{address}, {city}"),
        }
    }
}

/// Create/update payload for a seller's listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    #[serde(skip)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub price: f64,
    pub area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bhk: Option<String>,
    pub description: String,
    pub address: String,
    pub city: String,
    pub images: String,
}

impl PropertyDraft {
    /// Pre-fill the form from an existing listing.
    pub fn from_property(property: &Property) -> Self {
        Self {
            id: Some(property.id),
            title: property.title.clone(),
            kind: property.kind,
            price: property.price,
            area: property.area.clone(),
            beds: property.beds,
            baths: property.baths,
            bhk: property.bhk.clone(),
            description: property.description.clone().unwrap_or_default(),
            address: property.address.clone(),
            city: property.city.clone(),
            images: property.images.clone().unwrap_or_default(),
        }
    }

    /// Client-side checks matching the backend's bean validation, so most
    /// mistakes surface before a round trip.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as a user-facing message.
    pub fn validate(&self) -> Result<(), &'static str> {
        let title_len = self.title.trim().chars().count();
        if !(5..=100).contains(&title_len) {
            return Err("Title must be between 5 and 100 characters");
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price cannot be negative");
        }
        if self.area.trim().is_empty() {
            return Err("Area is required");
        }
        if self.address.trim().is_empty() {
            return Err("Address is required");
        }
        if self.city.trim().is_empty() {
            return Err("City is required");
        }
        if self.description.chars().count() > 2000 {
            return Err("Description too long");
        }
        Ok(())
    }
}

/// Listing browse filters. Empty fields are omitted from the query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyFilter {
    pub city: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub kind: Option<PropertyType>,
    pub beds: Option<u32>,
}

impl PropertyFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let city = self.city.trim();
        if !city.is_empty() {
            pairs.push(("city", city.to_owned()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", max.to_string()));
        }
        if let Some(kind) = self.kind {
            pairs.push(("type", kind.as_str().to_owned()));
        }
        if let Some(beds) = self.beds {
            pairs.push(("beds", beds.to_string()));
        }
        pairs
    }
}

// =============================================================================
// LEADS, CONTACTS, TRANSACTIONS
// =============================================================================

/// A buyer's like on one of the seller's listings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i64,
    pub user: UserAccount,
    pub property: Property,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    #[default]
    Pending,
    Contacted,
    Closed,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub id: i64,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<String>,
}

/// A booking: the token payment a buyer made against a listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub buyer: Option<UserAccount>,
    #[serde(default)]
    pub seller: Option<UserAccount>,
    #[serde(default)]
    pub property: Option<Property>,
    pub amount: f64,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub payment_date: Option<String>,
}

// =============================================================================
// AUTH AND PROFILE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Identity-provider credential handed to the backend once.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoogleLoginRequest {
    pub token: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OtpVerification {
    pub email: String,
    pub otp: String,
}

/// Login response from the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl AuthResponse {
    /// Build the session record. `fallback_email` covers responses that omit
    /// the email (the password form already knows it).
    pub fn into_session(self, fallback_email: &str) -> Session {
        Session {
            id: self.id,
            name: self.name,
            email: self.email.unwrap_or_else(|| fallback_email.to_owned()),
            role: self.role,
            token: self.token,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

// =============================================================================
// HELPERS
// =============================================================================

pub fn token_amount(price: f64) -> f64 {
    price * TOKEN_RATE
}

/// Format a rupee amount with thousands separators, e.g. `₹ 1,500,000.5`.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "₹ N/A".to_owned();
    }
    let cents = (value.abs() * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = cents as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    match frac {
        0 => format!("₹ {sign}{grouped}"),
        f if f % 10 == 0 => format!("₹ {sign}{grouped}.{}", f / 10),
        f => format!("₹ {sign}{grouped}.{f:02}"),
    }
}

/// Date portion (`YYYY-MM-DD`) of a normalized timestamp.
pub fn format_date(timestamp: Option<&str>) -> String {
    timestamp
        .map(|ts| ts.get(..10).unwrap_or(ts).to_owned())
        .unwrap_or_else(|| "-".to_owned())
}

fn split_images(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Array(parts) => {
            let mut fields = [0_u64; 6];
            for (slot, part) in fields.iter_mut().zip(parts.iter()) {
                *slot = part
                    .as_u64()
                    .ok_or_else(|| D::Error::custom("expected numeric timestamp component"))?;
            }
            if parts.len() < 3 {
                return Err(D::Error::custom("timestamp array needs at least year, month, day"));
            }
            let [y, mo, d, h, mi, s] = fields;
            Ok(Some(format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}")))
        }
        _ => Err(D::Error::custom("expected timestamp string or array")),
    }
}
