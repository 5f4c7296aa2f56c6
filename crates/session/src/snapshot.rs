//! Per-navigation session snapshot.

use serde::{Deserialize, Serialize};

use routewarden_core::{Credential, Role};

use crate::store::SessionRead;

/// The session as observed at one instant.
///
/// Captured immediately before a navigation decision and discarded after it,
/// so a login/logout racing the decision cannot split the guard's view of
/// credential and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub credential: Option<Credential>,
    pub role: Role,
}

impl Session {
    /// Snapshot the current session from a read capability.
    pub fn capture(sessions: &impl SessionRead) -> Self {
        Self {
            credential: sessions.credential(),
            role: sessions.role(),
        }
    }

    /// A session with no credential and the anonymous role.
    pub fn anonymous() -> Self {
        Self { credential: None, role: Role::ANONYMOUS }
    }

    /// An authenticated session at the given tier. Test/host convenience.
    pub fn authenticated(token: impl Into<String>, role: Role) -> Self {
        Self {
            credential: Some(Credential::new(token)),
            role,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
