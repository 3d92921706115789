//! In-process backing store
//!
//! A `parking_lot`-guarded map standing in for the networked key-value
//! store. Fixture dictionaries write through the inherent `set`/`get`
//! methods; the harness sees only the [`BackingStore`] oracle surface
//! (`scan_prefix` + `delete`).
//!
//! `set_offline(true)` makes every oracle call fail with
//! `StoreUnavailable`, which lets tests exercise the suite-fatal path
//! without a real network.

use kvparity_core::{BackingStore, HarnessError, Result, Value};
use parking_lot::Mutex;
use std::collections::BTreeMap;

/// Shared in-memory key-value store
///
/// One physical store per suite; both implementation instances and the
/// harness's oracle reads go through the same map.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Value>>,
    offline: Mutex<bool>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the store becoming unreachable
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock() = offline;
    }

    fn check_online(&self) -> Result<()> {
        if *self.offline.lock() {
            return Err(HarnessError::StoreUnavailable(
                "simulated connection failure".to_string(),
            ));
        }
        Ok(())
    }

    /// Set a raw key (fixture data path, not part of the oracle surface)
    pub fn set(&self, key: &str, value: Value) {
        self.entries.lock().insert(key.to_string(), value);
    }

    /// Get a raw key (fixture data path)
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.lock().get(key).cloned()
    }

    /// Remove a raw key, returning whether it existed (fixture data path)
    pub fn remove(&self, key: &str) -> bool {
        self.entries.lock().remove(key).is_some()
    }

    /// Total number of raw keys across all namespaces
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the store holds no keys at all
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl BackingStore for MemoryStore {
    fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        self.check_online()?;
        let entries = self.entries.lock();
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.check_online()?;
        self.entries.lock().remove(key);
        Ok(())
    }
}
