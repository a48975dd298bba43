//! Session store: the single source of truth for who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is constructed at app start, restored from durable
//! storage, and provided to every view through Leptos context. The route
//! outlet reads it on each navigation; login/logout flows call the mutators.
//!
//! PERSISTED LAYOUT
//! ================
//! `user`  -> JSON-serialized [`Session`] (token included)
//! `token` -> the bare bearer token
//!
//! The serialized record is authoritative. `restore` rewrites a missing or
//! divergent `token` key from it, and drops a `token` key that has no record.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

use crate::util::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};

/// Marketplace role attached to a session.
///
/// Any role string the client does not recognize, or a missing role,
/// deserializes to [`Role::Unknown`], which no role-gated route accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Buyer,
    Seller,
    Admin,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Dashboard route owned by this role.
    pub fn dashboard_path(self) -> Option<&'static str> {
        match self {
            Self::Buyer => Some("/buyer"),
            Self::Seller => Some("/seller"),
            Self::Admin => Some("/admin"),
            Self::Unknown => None,
        }
    }

    /// Human-readable label ("Buyer", "Seller", ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::Buyer => "Buyer",
            Self::Seller => "Seller",
            Self::Admin => "Admin",
            Self::Unknown => "Unknown",
        }
    }
}

/// The authenticated actor, as returned by the backend on login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "role_or_unknown")]
    pub role: Role,
    pub token: String,
}

/// A `null` or non-string role keeps the session and falls back to
/// [`Role::Unknown`].
fn role_or_unknown<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Role, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()).unwrap_or_default())
}

enum StoredRecord {
    Absent,
    Malformed,
    Valid(Session),
}

/// Reactive session holder backed by durable key-value storage.
///
/// Clones share the same session signal and storage.
#[derive(Clone)]
pub struct SessionStore {
    current: ArcRwSignal<Option<Session>>,
    restored: ArcRwSignal<bool>,
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Build an empty store. Call [`SessionStore::restore`] to adopt a
    /// persisted session.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            current: ArcRwSignal::new(None),
            restored: ArcRwSignal::new(false),
            storage,
        }
    }

    /// Adopt the persisted session, if one is stored and parses.
    ///
    /// A malformed record is logged and ignored; the store is left anonymous
    /// and the stored keys are not touched.
    pub fn restore(&self) -> Option<Session> {
        let restored = match self.read_record() {
            StoredRecord::Valid(session) => {
                if self.storage.get(TOKEN_KEY).as_deref() != Some(session.token.as_str()) {
                    leptos::logging::warn!("stored token out of sync with session record, rewriting");
                    self.storage.set(TOKEN_KEY, &session.token);
                }
                Some(session)
            }
            StoredRecord::Malformed => None,
            StoredRecord::Absent => {
                if self.storage.get(TOKEN_KEY).is_some() {
                    leptos::logging::warn!("dropping stored token with no session record");
                    self.storage.remove(TOKEN_KEY);
                }
                None
            }
        };
        self.current.set(restored.clone());
        self.restored.set(true);
        restored
    }

    /// Whether [`SessionStore::restore`] has run. Views hold off on route
    /// decisions until it has, so a reload does not bounce a signed-in user
    /// to the login page.
    pub fn is_restored(&self) -> bool {
        self.restored.get()
    }

    /// Replace the current session and persist both keys.
    pub fn set_session(&self, session: Session) {
        match serde_json::to_string(&session) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(e) => leptos::logging::error!("failed to serialize session: {e}"),
        }
        self.storage.set(TOKEN_KEY, &session.token);
        self.current.set(Some(session));
    }

    /// Drop the current session and delete both persisted keys.
    pub fn clear_session(&self) {
        self.storage.remove(USER_KEY);
        self.storage.remove(TOKEN_KEY);
        self.current.set(None);
    }

    /// Current session. Tracked when read inside a reactive scope.
    pub fn current_session(&self) -> Option<Session> {
        self.current.get()
    }

    pub fn current_session_untracked(&self) -> Option<Session> {
        self.current.get_untracked()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.with(|s| s.as_ref().map(|s| s.role))
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.with(Option::is_some)
    }

    /// Bearer token of the current session, for views to attach to requests.
    pub fn bearer_token(&self) -> Option<String> {
        self.current.with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }

    fn read_record(&self) -> StoredRecord {
        let Some(raw) = self.storage.get(USER_KEY) else {
            return StoredRecord::Absent;
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => StoredRecord::Valid(session),
            Err(e) => {
                leptos::logging::warn!("ignoring malformed stored session: {e}");
                StoredRecord::Malformed
            }
        }
    }
}
