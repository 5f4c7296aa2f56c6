//! String key-value persistence boundary.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key under which the login flow persists the auth token.
pub const CREDENTIAL_KEY: &str = "credential";

/// Storage key under which the login flow persists the role tier.
pub const ROLE_KEY: &str = "role";

/// Read side of a string key-value store.
///
/// Models browser local storage: synchronous, infallible reads that return
/// `None` for absent keys. Every consumer (the guard and the external HTTP
/// credential-attachment step alike) must tolerate `None` without error.
pub trait KeyValueRead {
    fn read(&self, key: &str) -> Option<String>;
}

/// In-process storage with local-storage semantics.
///
/// Stands in for the browser's persistence in tests and non-browser hosts.
/// Writes take `&self` to mirror the shared-handle shape of the real thing;
/// the guard's model is single-threaded cooperative, so `RefCell` suffices.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, key: &str, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.to_string(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl KeyValueRead for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl<T: KeyValueRead> KeyValueRead for &T {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read(CREDENTIAL_KEY), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let storage = MemoryStorage::new();
        storage.write(ROLE_KEY, "2");
        assert_eq!(storage.read(ROLE_KEY), Some("2".to_string()));
        storage.remove(ROLE_KEY);
        assert_eq!(storage.read(ROLE_KEY), None);
    }
}
