//! Session store: the single owner of the authenticated identity and token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once via context at the application root. Credential operations
//! in `net::auth` are the only writers; the request gateway and the route
//! guard are read-only consumers. Identity and token live in one `Option`
//! so a half-populated session is unrepresentable.
//!
//! Every `set`/`clear` mirrors the session to localStorage before returning,
//! and `restore` seeds memory from localStorage at startup. Malformed durable
//! state is treated as an absent session, never surfaced as an error.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Identity, Role};

/// localStorage key holding the serialized identity record.
#[cfg(any(test, feature = "hydrate"))]
const IDENTITY_KEY: &str = "workflow_pro_user";
/// localStorage key holding the raw credential token.
#[cfg(any(test, feature = "hydrate"))]
const TOKEN_KEY: &str = "workflow_pro_token";

/// A populated session: both halves present by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSession {
    pub identity: Identity,
    pub token: String,
}

/// Reactive session state, cheap to copy into closures and components.
#[derive(Clone, Copy)]
pub struct SessionStore {
    current: RwSignal<Option<ActiveSession>>,
    loading: RwSignal<bool>,
}

impl SessionStore {
    /// An empty, settled store. Call [`SessionStore::restore`] once at
    /// startup to seed it from durable storage.
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    /// Seed the in-memory session from localStorage. Malformed or
    /// half-present durable data is discarded and the store stays empty.
    pub fn restore(&self) {
        #[cfg(feature = "hydrate")]
        {
            let identity_raw = read_storage(IDENTITY_KEY);
            let token_raw = read_storage(TOKEN_KEY);
            match decode_stored(identity_raw.as_deref(), token_raw.as_deref()) {
                Some(session) => self.current.set(Some(session)),
                None => {
                    if identity_raw.is_some() || token_raw.is_some() {
                        log::warn!("discarding unusable persisted session");
                        remove_storage(IDENTITY_KEY);
                        remove_storage(TOKEN_KEY);
                    }
                }
            }
        }
    }

    /// Replace both session halves and mirror them to durable storage.
    pub fn set(&self, identity: Identity, token: String) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(encoded) = encode_identity(&identity) {
                write_storage(IDENTITY_KEY, &encoded);
                write_storage(TOKEN_KEY, &token);
            }
        }
        self.current.set(Some(ActiveSession { identity, token }));
    }

    /// Empty the session and remove both durable entries.
    pub fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            remove_storage(IDENTITY_KEY);
            remove_storage(TOKEN_KEY);
        }
        self.current.set(None);
    }

    /// Reactive read of the full session.
    pub fn snapshot(&self) -> Option<ActiveSession> {
        self.current.get()
    }

    /// Reactive: true iff identity and token are both present.
    pub fn is_authenticated(&self) -> bool {
        self.current.with(Option::is_some)
    }

    /// Reactive read of the current role, absent when logged out.
    pub fn current_role(&self) -> Option<Role> {
        self.current.with(|session| session.as_ref().map(|s| s.identity.role))
    }

    /// Reactive read of the identity, for user-aware chrome.
    pub fn identity(&self) -> Option<Identity> {
        self.current.with(|session| session.as_ref().map(|s| s.identity.clone()))
    }

    /// Call-time (non-subscribing) read of the token, for the gateway.
    pub fn token(&self) -> Option<String> {
        self.current
            .with_untracked(|session| session.as_ref().map(|s| s.token.clone()))
    }

    /// Reactive: true while a credential operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn set_loading(&self, value: bool) {
        self.loading.set(value);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the two durable entries into a session. Returns `None` unless both
/// entries are present and the identity record parses with a known role.
#[cfg(any(test, feature = "hydrate"))]
fn decode_stored(identity_raw: Option<&str>, token_raw: Option<&str>) -> Option<ActiveSession> {
    let identity_raw = identity_raw?;
    let token = token_raw?.to_owned();
    if token.is_empty() {
        return None;
    }
    let identity: Identity = serde_json::from_str(identity_raw).ok()?;
    Some(ActiveSession { identity, token })
}

/// Serialize the identity for durable storage.
#[cfg(any(test, feature = "hydrate"))]
fn encode_identity(identity: &Identity) -> Option<String> {
    serde_json::to_string(identity).ok()
}

#[cfg(feature = "hydrate")]
fn read_storage(key: &str) -> Option<String> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    storage.get_item(key).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn write_storage(key: &str, value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(feature = "hydrate")]
fn remove_storage(key: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(key);
    }
}
