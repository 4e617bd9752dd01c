//! Session state: who is logged in, kept durable across reloads.
//!
//! DESIGN
//! ======
//! The session is a triple of user record, credential token, and a derived
//! logged-in flag. The three fields only ever change together, through
//! [`Session::authenticated`] / [`Session::logged_out`], so no reader can
//! observe a half-updated state. Every mutation is mirrored synchronously to
//! the injected [`StorageBackend`] under the `token` and `user` slots, which
//! is what makes a reload come back logged in.
//!
//! ERROR HANDLING
//! ==============
//! Missing or corrupt persisted state is never an error: hydration falls
//! back to the logged-out session. Persistence writes are fire and forget;
//! a failed write costs durability, not correctness of the in-memory state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage::StorageBackend;

/// Storage slot holding the raw credential token.
pub const TOKEN_KEY: &str = "token";
/// Storage slot holding the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// The current visitor's authentication state.
///
/// Fields are private so the `logged-in iff user and token are both present`
/// invariant cannot be broken from outside; use the accessors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
    is_authenticated: bool,
}

impl Session {
    /// The empty, not-logged-in session.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// A fully-populated, logged-in session.
    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }
}

/// Single source of truth for the session, provided via context by the
/// application root.
///
/// Reads are reactive (components re-render when the session changes);
/// mutation happens only through [`SessionStore::set_session`] and
/// [`SessionStore::clear_session`], plus the one-time hydration that runs in
/// [`SessionStore::new`].
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
    storage: StoredValue<Arc<dyn StorageBackend>>,
}

impl SessionStore {
    /// Create the store and immediately hydrate it from `storage`.
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        let store = Self {
            session: RwSignal::new(Session::logged_out()),
            storage: StoredValue::new(storage),
        };
        store.hydrate();
        store
    }

    /// Rebuild the in-memory session from persisted state.
    ///
    /// Both slots present and a well-formed user record means logged in;
    /// anything else (empty slot, unparsable record) means logged out. Runs
    /// once at construction; navigation never re-reads storage.
    pub fn hydrate(&self) {
        let token = self.storage.with_value(|s| s.get(TOKEN_KEY));
        let stored_user = self.storage.with_value(|s| s.get(USER_KEY));

        let user = stored_user.as_deref().and_then(|raw| {
            let parsed = serde_json::from_str::<User>(raw);
            if parsed.is_err() {
                log::warn!("discarding unparsable stored user record");
            }
            parsed.ok()
        });

        match (user, token) {
            (Some(user), Some(token)) => self.session.set(Session::authenticated(user, token)),
            _ => self.session.set(Session::logged_out()),
        }
    }

    /// Install a freshly-authenticated `(user, token)` pair and persist it.
    ///
    /// The pair must come from a successful login exchange; no validation
    /// happens here.
    pub fn set_session(&self, user: User, token: String) {
        let serialized = serde_json::to_string(&user).ok();
        self.session.set(Session::authenticated(user, token.clone()));

        self.storage.with_value(|s| {
            s.set(TOKEN_KEY, &token);
            if let Some(raw) = &serialized {
                s.set(USER_KEY, raw);
            }
        });
    }

    /// Log out: reset to the empty session and delete both persisted slots.
    /// Idempotent.
    pub fn clear_session(&self) {
        self.session.set(Session::logged_out());
        self.storage.with_value(|s| {
            s.remove(TOKEN_KEY);
            s.remove(USER_KEY);
        });
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Clone of the current user record, if logged in.
    pub fn current_user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    /// Clone of the current credential token, if logged in.
    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token().map(ToOwned::to_owned))
    }

    /// Snapshot of the whole session triple.
    pub fn session(&self) -> Session {
        self.session.get()
    }
}
