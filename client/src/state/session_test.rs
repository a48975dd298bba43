use std::sync::Arc;

use super::*;
use crate::util::guard::{AppView, LOGIN_PATH, RouteDecision, resolve};
use crate::util::storage::MemoryStorage;

fn session(role: Role) -> Session {
    Session {
        id: 7,
        name: "Asha Rao".to_owned(),
        email: "asha@example.com".to_owned(),
        role,
        token: "jwt-abc".to_owned(),
    }
}

fn store_over(storage: &MemoryStorage) -> SessionStore {
    SessionStore::new(Arc::new(storage.clone()))
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_backend_strings() {
    assert_eq!(serde_json::from_str::<Role>("\"BUYER\"").unwrap(), Role::Buyer);
    assert_eq!(serde_json::from_str::<Role>("\"SELLER\"").unwrap(), Role::Seller);
    assert_eq!(serde_json::from_str::<Role>("\"ADMIN\"").unwrap(), Role::Admin);
}

#[test]
fn role_unrecognized_string_is_unknown() {
    assert_eq!(serde_json::from_str::<Role>("\"SUPERUSER\"").unwrap(), Role::Unknown);
    assert_eq!(serde_json::from_str::<Role>("\"buyer\"").unwrap(), Role::Unknown);
}

#[test]
fn role_dashboard_paths() {
    assert_eq!(Role::Buyer.dashboard_path(), Some("/buyer"));
    assert_eq!(Role::Seller.dashboard_path(), Some("/seller"));
    assert_eq!(Role::Admin.dashboard_path(), Some("/admin"));
    assert_eq!(Role::Unknown.dashboard_path(), None);
}

#[test]
fn session_with_missing_role_parses_as_unknown() {
    let raw = r#"{"id":1,"name":"A","email":"a@b.c","token":"t"}"#;
    let parsed: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.role, Role::Unknown);
}

#[test]
fn session_with_null_or_non_string_role_parses_as_unknown() {
    for role in ["null", "7", "{}"] {
        let raw = format!(r#"{{"id":1,"name":"A","email":"a@b.c","role":{role},"token":"t"}}"#);
        let parsed: Session = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.role, Role::Unknown, "role {role}");
    }
}

#[test]
fn restore_keeps_null_role_session_for_profile_only() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, r#"{"id":4,"name":"N","email":"n@b.c","role":null,"token":"tok"}"#);
    let store = store_over(&storage);
    let restored = store.restore().unwrap();
    assert_eq!(restored.role, Role::Unknown);
    assert_eq!(resolve("/profile", store.current_session().as_ref()), RouteDecision::Mount(AppView::Profile));
    assert_eq!(resolve("/buyer", store.current_session().as_ref()), RouteDecision::Redirect(LOGIN_PATH));
}

// =============================================================
// restore
// =============================================================

#[test]
fn restored_flag_flips_on_restore() {
    let storage = MemoryStorage::new();
    let store = store_over(&storage);
    assert!(!store.is_restored());
    store.restore();
    assert!(store.is_restored());
}

#[test]
fn restore_on_empty_storage_is_anonymous() {
    let storage = MemoryStorage::new();
    let store = store_over(&storage);
    assert_eq!(store.restore(), None);
    assert_eq!(store.current_session(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn restore_malformed_records_fail_open() {
    let malformed = [
        "",
        "not json",
        "{",
        "null",
        "42",
        "[]",
        "{}",
        r#"{"id":"seven","name":"A","email":"a","role":"BUYER","token":"t"}"#,
        r#"{"name":"A","email":"a","role":"BUYER","token":"t"}"#,
    ];
    for raw in malformed {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, raw);
        let store = store_over(&storage);
        assert_eq!(store.restore(), None, "record {raw:?} should not restore");
        assert_eq!(store.current_session(), None);
        assert_eq!(storage.get(USER_KEY).as_deref(), Some(raw));
    }
}

#[test]
fn restore_adopts_valid_record() {
    let storage = MemoryStorage::new();
    let expected = session(Role::Seller);
    storage.set(USER_KEY, &serde_json::to_string(&expected).unwrap());
    storage.set(TOKEN_KEY, "jwt-abc");
    let store = store_over(&storage);
    assert_eq!(store.restore(), Some(expected.clone()));
    assert_eq!(store.current_session(), Some(expected));
    assert_eq!(store.role(), Some(Role::Seller));
}

#[test]
fn restore_rewrites_missing_token_key_from_record() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, &serde_json::to_string(&session(Role::Buyer)).unwrap());
    store_over(&storage).restore();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt-abc"));
}

#[test]
fn restore_rewrites_divergent_token_key_from_record() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, &serde_json::to_string(&session(Role::Buyer)).unwrap());
    storage.set(TOKEN_KEY, "stale");
    let store = store_over(&storage);
    store.restore();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt-abc"));
    assert_eq!(store.bearer_token().as_deref(), Some("jwt-abc"));
}

#[test]
fn restore_drops_orphan_token() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "orphan");
    assert_eq!(store_over(&storage).restore(), None);
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn restore_keeps_token_beside_malformed_record() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, "garbage");
    storage.set(TOKEN_KEY, "tok");
    store_over(&storage).restore();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok"));
}

// =============================================================
// set / clear
// =============================================================

#[test]
fn set_session_is_readable_and_survives_reload() {
    let storage = MemoryStorage::new();
    let store = store_over(&storage);
    let expected = session(Role::Admin);
    store.set_session(expected.clone());
    assert_eq!(store.current_session(), Some(expected.clone()));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt-abc"));

    let reloaded = store_over(&storage);
    assert_eq!(reloaded.restore(), Some(expected.clone()));
    assert_eq!(reloaded.current_session(), Some(expected));
}

#[test]
fn set_session_replaces_previous() {
    let storage = MemoryStorage::new();
    let store = store_over(&storage);
    store.set_session(session(Role::Buyer));
    let mut next = session(Role::Seller);
    next.token = "jwt-next".to_owned();
    store.set_session(next.clone());
    assert_eq!(store.current_session(), Some(next));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt-next"));
}

#[test]
fn clear_session_removes_memory_and_storage() {
    let storage = MemoryStorage::new();
    let store = store_over(&storage);
    store.set_session(session(Role::Buyer));
    store.clear_session();
    assert_eq!(store.current_session(), None);
    assert!(storage.is_empty());

    let reloaded = store_over(&storage);
    assert_eq!(reloaded.restore(), None);
}

#[test]
fn clear_session_when_already_empty_succeeds() {
    let storage = MemoryStorage::new();
    let store = store_over(&storage);
    store.clear_session();
    store.clear_session();
    assert_eq!(store.current_session(), None);
}

#[test]
fn clones_share_the_session() {
    let storage = MemoryStorage::new();
    let store = store_over(&storage);
    let view_handle = store.clone();
    store.set_session(session(Role::Buyer));
    assert_eq!(view_handle.role(), Some(Role::Buyer));
    view_handle.clear_session();
    assert_eq!(store.current_session(), None);
}
