//! Concrete navigation targets.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A concrete route path such as `/dashboard` or `/institutions/17`.
///
/// This is the *resolved* target of a navigation, never a pattern — `:param`
/// placeholders belong to the route table's pattern type. Validated on
/// construction: non-empty and rooted at `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(String);

impl RoutePath {
    pub fn new(path: impl Into<String>) -> DomainResult<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(DomainError::invalid_path("empty path"));
        }
        if !path.starts_with('/') {
            return Err(DomainError::invalid_path(format!("'{path}' is not rooted at /")));
        }
        Ok(Self(path))
    }

    /// Construct from a literal known to be valid at compile time.
    ///
    /// Only for hard-coded paths (policy defaults, tests); arbitrary input
    /// goes through [`RoutePath::new`].
    ///
    /// # Panics
    ///
    /// Panics on an empty or unrooted literal, in every build profile — a
    /// bad hard-coded path is a programming error, not input to degrade on.
    pub fn new_static(path: &'static str) -> Self {
        assert!(
            !path.is_empty() && path.starts_with('/'),
            "static route path '{path}' must be rooted at /"
        );
        Self(path.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty path segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

impl core::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoutePath> for String {
    fn from(value: RoutePath) -> Self {
        value.0
    }
}

impl FromStr for RoutePath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
