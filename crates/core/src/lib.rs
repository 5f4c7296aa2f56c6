//! `routewarden-core` — shared primitives for the route-access guard.
//!
//! This crate contains **pure domain** types (no IO, no host-router coupling).

pub mod credential;
pub mod error;
pub mod id;
pub mod path;
pub mod role;

pub use credential::Credential;
pub use error::{DomainError, DomainResult};
pub use id::NavigationId;
pub use path::RoutePath;
pub use role::Role;
