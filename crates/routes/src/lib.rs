//! `routewarden-routes` — typed, validated route-access metadata.
//!
//! Route requirements arrive as a loose declarative shape (optional booleans,
//! a role list of unknown provenance) and are normalized into an invariant-
//! holding [`RouteRequirement`] *at load time*, so the decision path never
//! sees a malformed shape. Table-level problems (duplicate paths) are
//! load-time errors; requirement-level problems degrade with a warning.

pub mod pattern;
pub mod requirement;
pub mod table;

pub use pattern::RoutePattern;
pub use requirement::{RawRequirement, RouteRequirement};
pub use table::{RouteDef, RouteTable};
