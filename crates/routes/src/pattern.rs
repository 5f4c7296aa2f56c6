//! Route path patterns with `:param` placeholders.

use serde::{Deserialize, Serialize};

use routewarden_core::{DomainError, DomainResult, RoutePath};

/// A route pattern such as `/institutions/:id`.
///
/// Segments are either static text or a `:param` placeholder matching exactly
/// one non-empty segment. No wildcards, no optional segments — the original
/// route tables never needed them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePattern(String);

impl RoutePattern {
    pub fn new(pattern: impl Into<String>) -> DomainResult<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(DomainError::invalid_path("empty pattern"));
        }
        if !pattern.starts_with('/') {
            return Err(DomainError::invalid_path(format!("'{pattern}' is not rooted at /")));
        }
        for seg in pattern.split('/').skip(1) {
            if seg == ":" {
                return Err(DomainError::invalid_path(format!("'{pattern}' has an unnamed param")));
            }
        }
        Ok(Self(pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the pattern contains no `:param` placeholder.
    pub fn is_static(&self) -> bool {
        self.0.split('/').all(|seg| !seg.starts_with(':'))
    }

    /// Segment-wise match of a concrete path against this pattern.
    pub fn matches(&self, path: &RoutePath) -> bool {
        let mut pattern_segs = self.0.split('/').filter(|s| !s.is_empty());
        let mut path_segs = path.segments();
        loop {
            match (pattern_segs.next(), path_segs.next()) {
                (None, None) => return true,
                // params match any single non-empty segment
                (Some(p), Some(_)) if p.starts_with(':') => {}
                (Some(p), Some(s)) if p == s => {}
                _ => return false,
            }
        }
    }
}

impl core::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RoutePattern {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoutePattern> for String {
    fn from(value: RoutePattern) -> Self {
        value.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
