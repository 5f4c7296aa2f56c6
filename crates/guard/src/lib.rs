//! `routewarden-guard` — the navigation authorization decision.
//!
//! This crate is intentionally decoupled from any host router and from
//! storage: [`decide`] is a pure function over a route requirement and a
//! session snapshot. Credential presence is checked strictly before role
//! membership, so an unauthenticated user is never answered with a
//! wrong-role redirect.

pub mod decision;
pub mod policy;
pub mod request;

pub use decision::{decide, Decision};
pub use policy::GuardPolicy;
pub use request::NavigationRequest;
