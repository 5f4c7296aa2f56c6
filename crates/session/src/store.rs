//! Session read capability over persisted storage.

use routewarden_core::{Credential, Role};

use crate::storage::{KeyValueRead, CREDENTIAL_KEY, ROLE_KEY};

/// Read access to the current session, as the guard sees it.
///
/// Injected into the guard/adapter rather than read from ambient state, so
/// decisions are testable without a real persistence layer.
pub trait SessionRead {
    /// The stored auth token, if any. Presence only; never validated here.
    fn credential(&self) -> Option<Credential>;

    /// The stored role tier. Absent or unparsable data degrades to
    /// [`Role::ANONYMOUS`], never to an error.
    fn role(&self) -> Role;
}

/// [`SessionRead`] over a string key-value store.
///
/// Reads the `"credential"` and `"role"` keys the login flow writes.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueRead> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: KeyValueRead> SessionRead for SessionStore<S> {
    fn credential(&self) -> Option<Credential> {
        self.storage
            .read(CREDENTIAL_KEY)
            .filter(|t| !t.is_empty())
            .map(Credential::new)
    }

    fn role(&self) -> Role {
        let raw = self.storage.read(ROLE_KEY);
        let role = Role::from_stored(raw.as_deref());
        if role.is_anonymous() && raw.as_deref().is_some_and(|r| !r.is_empty()) {
            tracing::debug!(raw = raw.as_deref(), "stored role did not parse, using anonymous");
        }
        role
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
