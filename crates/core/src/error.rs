//! Domain error model.

use thiserror::Error;

/// Result type used across the guard's domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant here is a *load-time* failure (route table construction,
/// policy construction). The decision path itself has no fatal errors:
/// malformed session or requirement data degrades to the least-privileged
/// decision instead of surfacing here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. degenerate guard policy).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A route path or pattern was malformed.
    #[error("invalid route path: {0}")]
    InvalidPath(String),

    /// Two route definitions share the same path pattern.
    #[error("duplicate route: {0}")]
    DuplicateRoute(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn duplicate_route(msg: impl Into<String>) -> Self {
        Self::DuplicateRoute(msg.into())
    }
}
