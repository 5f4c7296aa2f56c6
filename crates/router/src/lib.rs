//! `routewarden-router` — adapter between the guard and a hosting router.
//!
//! The host calls [`Navigator::handle`] once per navigation attempt and gets
//! exactly one [`HookOutcome`] back; the tagged return value replaces the
//! callback conventions of concrete routers, so "call back exactly once" is
//! guaranteed by the type rather than by discipline.

pub mod defaults;
pub mod navigator;

pub use defaults::default_routes;
pub use navigator::{HookOutcome, NavigationSeq, Navigator};
