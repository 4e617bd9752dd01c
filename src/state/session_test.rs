use super::*;
use crate::net::types::{Role, User};
use crate::util::storage::MemoryStorage;

fn user() -> User {
    User {
        id: 7,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        nickname: "Alice".to_owned(),
        avatar: String::new(),
        school: "Example University".to_owned(),
        student_id: "2023-0042".to_owned(),
        role: Role::Student,
        solved: 12,
        submitted: 30,
        rating: 1500,
        is_active: true,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        last_login_at: "2025-06-01T00:00:00Z".to_owned(),
    }
}

fn assert_invariant(session: &Session) {
    assert_eq!(
        session.is_authenticated(),
        session.user().is_some() && session.token().is_some()
    );
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn hydrate_empty_storage_yields_logged_out() {
    let store = SessionStore::new(Arc::new(MemoryStorage::default()));
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
    assert!(store.token().is_none());
    assert_invariant(&store.session());
}

#[test]
fn hydrate_token_without_user_yields_logged_out() {
    let storage = Arc::new(MemoryStorage::default());
    storage.set(TOKEN_KEY, "tok-1");

    let store = SessionStore::new(storage);
    assert!(!store.is_authenticated());
    assert_invariant(&store.session());
}

#[test]
fn hydrate_user_without_token_yields_logged_out() {
    let storage = Arc::new(MemoryStorage::default());
    storage.set(USER_KEY, &serde_json::to_string(&user()).unwrap());

    let store = SessionStore::new(storage);
    assert!(!store.is_authenticated());
    assert_invariant(&store.session());
}

#[test]
fn hydrate_corrupt_user_record_yields_logged_out() {
    let storage = Arc::new(MemoryStorage::default());
    storage.set(TOKEN_KEY, "tok-1");
    storage.set(USER_KEY, "{not json");

    let store = SessionStore::new(storage);
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
    assert_invariant(&store.session());
}

#[test]
fn hydrate_well_formed_storage_yields_authenticated() {
    let storage = Arc::new(MemoryStorage::default());
    storage.set(TOKEN_KEY, "tok-1");
    storage.set(USER_KEY, &serde_json::to_string(&user()).unwrap());

    let store = SessionStore::new(storage);
    assert!(store.is_authenticated());
    assert_eq!(store.current_user(), Some(user()));
    assert_eq!(store.token(), Some("tok-1".to_owned()));
    assert_invariant(&store.session());
}

// =============================================================
// set_session
// =============================================================

#[test]
fn set_session_updates_state_and_storage() {
    let storage = Arc::new(MemoryStorage::default());
    let store = SessionStore::new(storage.clone());

    store.set_session(user(), "tok-9".to_owned());

    assert!(store.is_authenticated());
    assert_eq!(store.current_user(), Some(user()));
    assert_eq!(store.token(), Some("tok-9".to_owned()));
    assert_eq!(storage.get(TOKEN_KEY), Some("tok-9".to_owned()));
    assert_eq!(
        storage.get(USER_KEY),
        Some(serde_json::to_string(&user()).unwrap())
    );
    assert_invariant(&store.session());
}

#[test]
fn set_session_survives_reload() {
    let storage = Arc::new(MemoryStorage::default());
    let store = SessionStore::new(storage.clone());
    store.set_session(user(), "tok-9".to_owned());

    // A reload is a fresh store hydrating from the same backing storage.
    let reloaded = SessionStore::new(storage);
    assert_eq!(reloaded.session(), store.session());
    assert_eq!(
        reloaded.session(),
        Session::authenticated(user(), "tok-9".to_owned())
    );
}

#[test]
fn set_session_replaces_previous_session() {
    let store = SessionStore::new(Arc::new(MemoryStorage::default()));
    store.set_session(user(), "tok-1".to_owned());

    let mut other = user();
    other.id = 8;
    other.username = "bob".to_owned();
    store.set_session(other.clone(), "tok-2".to_owned());

    assert_eq!(store.current_user(), Some(other));
    assert_eq!(store.token(), Some("tok-2".to_owned()));
    assert_invariant(&store.session());
}

// =============================================================
// clear_session
// =============================================================

#[test]
fn clear_session_resets_state_and_storage() {
    let storage = Arc::new(MemoryStorage::default());
    let store = SessionStore::new(storage.clone());
    store.set_session(user(), "tok-1".to_owned());

    store.clear_session();

    assert!(!store.is_authenticated());
    assert_eq!(store.session(), Session::logged_out());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
    assert_invariant(&store.session());
}

#[test]
fn clear_session_is_idempotent() {
    let storage = Arc::new(MemoryStorage::default());
    let store = SessionStore::new(storage.clone());
    store.set_session(user(), "tok-1".to_owned());

    store.clear_session();
    let after_first = store.session();
    store.clear_session();

    assert_eq!(store.session(), after_first);
    assert_eq!(store.session(), Session::logged_out());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn clear_then_reload_stays_logged_out() {
    let storage = Arc::new(MemoryStorage::default());
    let store = SessionStore::new(storage.clone());
    store.set_session(user(), "tok-1".to_owned());
    store.clear_session();

    let reloaded = SessionStore::new(storage);
    assert!(!reloaded.is_authenticated());
}
