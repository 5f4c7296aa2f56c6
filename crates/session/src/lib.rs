//! `routewarden-session` — read access to the persisted session.
//!
//! The guard never touches ambient global storage: it is handed a
//! [`SessionRead`] capability and takes a [`Session`] snapshot per
//! navigation. Writes (login/logout) are the hosting application's concern
//! and deliberately absent from the guard path.

pub mod snapshot;
pub mod storage;
pub mod store;

pub use snapshot::Session;
pub use storage::{KeyValueRead, MemoryStorage, CREDENTIAL_KEY, ROLE_KEY};
pub use store::{SessionRead, SessionStore};
