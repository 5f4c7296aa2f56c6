//! Integer privilege tiers.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Privilege tier of a session, as persisted by the login flow.
///
/// Roles are small integers at this layer; what each tier *means* (member,
/// admin, institution, ...) is a policy concern of the route table, not of
/// the type. `Role::ANONYMOUS` (zero) is the tier every session degrades to
/// when no usable role value is stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(u8);

impl Role {
    /// The zero tier: unauthenticated-looking or corrupted role data.
    pub const ANONYMOUS: Role = Role(0);

    pub const fn new(tier: u8) -> Self {
        Self(tier)
    }

    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Lenient parse of a stored role representation.
    ///
    /// Absence, an empty string, or anything that is not a base-10 `u8`
    /// yields [`Role::ANONYMOUS`]. No error is raised: a corrupted role must
    /// degrade to "no privileged access", never block navigation.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if !s.is_empty() => s.trim().parse::<u8>().map(Role).unwrap_or(Role::ANONYMOUS),
            _ => Role::ANONYMOUS,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        *self == Role::ANONYMOUS
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u8> for Role {
    fn from(tier: u8) -> Self {
        Self(tier)
    }
}

/// Strict parse, for configuration surfaces that should reject garbage.
impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map(Role)
            .map_err(|e| DomainError::validation(format!("role '{s}': {e}")))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
