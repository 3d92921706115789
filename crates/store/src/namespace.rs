//! Namespace partitioning of the shared backing store
//!
//! Each implementation instance owns one namespace: every key it persists
//! is stored as `namespace` + delimiter + `key`. The delimiter is the
//! store's key-joining convention, an external contract, so it is a
//! configurable field here rather than a hard-coded constant.

use kvparity_core::{BackingStore, Result};
use std::sync::Arc;
use tracing::debug;

/// Default namespace delimiter, matching the usual `namespace:key` scheme
pub const DEFAULT_DELIMITER: char = ':';

/// Prefix-partitions one shared store into per-instance namespaces
///
/// Guarantees that two instances under test never observe each other's
/// keys, and that state left over from one scenario cannot leak into the
/// next. Holds the suite's only handle to the oracle surface.
#[derive(Clone)]
pub struct Namespacer {
    store: Arc<dyn BackingStore>,
    delimiter: char,
}

impl Namespacer {
    /// Create a namespacer with the default `:` delimiter
    pub fn new(store: Arc<dyn BackingStore>) -> Self {
        Self::with_delimiter(store, DEFAULT_DELIMITER)
    }

    /// Create a namespacer with an explicit delimiter
    pub fn with_delimiter(store: Arc<dyn BackingStore>, delimiter: char) -> Self {
        Self { store, delimiter }
    }

    /// The configured delimiter
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The raw-key prefix for a namespace, delimiter included
    pub fn prefix_for(&self, namespace: &str) -> String {
        format!("{}{}", namespace, self.delimiter)
    }

    /// Join path segments into a single user key, delimiter-separated
    ///
    /// Used by hierarchical (chain) operations: `["layer1", "layer2"]`
    /// stores under `layer1:layer2` with the default delimiter.
    pub fn join(&self, segments: &[&str]) -> String {
        segments.join(&self.delimiter.to_string())
    }

    /// Enumerate the raw keys under a namespace, prefix stripped
    ///
    /// Returns user-visible keys, sorted (the underlying scan is ordered).
    pub fn raw_keys(&self, namespace: &str) -> Result<Vec<String>> {
        let prefix = self.prefix_for(namespace);
        let keys = self.store.scan_prefix(&prefix)?;
        Ok(keys
            .into_iter()
            .map(|k| k[prefix.len()..].to_string())
            .collect())
    }

    /// Delete every key under a namespace
    ///
    /// Synchronous and idempotent: clearing an already-empty namespace is a
    /// no-op, not an error. Called before the suite starts and after every
    /// scenario execution, success or failure.
    pub fn clear(&self, namespace: &str) -> Result<()> {
        let prefix = self.prefix_for(namespace);
        let keys = self.store.scan_prefix(&prefix)?;
        let removed = keys.len();
        for key in keys {
            self.store.delete(&key)?;
        }
        debug!(namespace, removed, "cleared namespace");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use kvparity_core::Value;

    fn setup() -> (Arc<MemoryStore>, Namespacer) {
        let store = Arc::new(MemoryStore::new());
        let ns = Namespacer::new(store.clone() as Arc<dyn BackingStore>);
        (store, ns)
    }

    #[test]
    fn test_prefix_for() {
        let (_store, ns) = setup();
        assert_eq!(ns.prefix_for("v1"), "v1:");
    }

    #[test]
    fn test_custom_delimiter() {
        let store = Arc::new(MemoryStore::new());
        let ns = Namespacer::with_delimiter(store as Arc<dyn BackingStore>, '/');
        assert_eq!(ns.prefix_for("v1"), "v1/");
        assert_eq!(ns.join(&["a", "b"]), "a/b");
    }

    #[test]
    fn test_join_segments() {
        let (_store, ns) = setup();
        assert_eq!(ns.join(&["layer1", "layer2"]), "layer1:layer2");
        assert_eq!(ns.join(&["solo"]), "solo");
    }

    #[test]
    fn test_raw_keys_strips_prefix() {
        let (store, ns) = setup();
        store.set("v1:foo", Value::Int(1));
        store.set("v1:bar", Value::Int(2));
        store.set("v2:other", Value::Int(3));

        let keys = ns.raw_keys("v1").unwrap();
        assert_eq!(keys, vec!["bar".to_string(), "foo".to_string()]);
    }

    #[test]
    fn test_clear_removes_only_own_namespace() {
        let (store, ns) = setup();
        store.set("v1:foo", Value::Int(1));
        store.set("v1:bar", Value::Int(2));
        store.set("v2:keep", Value::Int(3));

        ns.clear("v1").unwrap();
        assert!(ns.raw_keys("v1").unwrap().is_empty());
        assert_eq!(store.get("v2:keep"), Some(Value::Int(3)));
    }

    #[test]
    fn test_clear_empty_namespace_is_idempotent() {
        let (store, ns) = setup();
        store.set("v2:keep", Value::Int(1));

        ns.clear("v1").unwrap();
        ns.clear("v1").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_namespaces_do_not_collide_on_shared_prefix() {
        // "v1" and "v10" share a string prefix but not a namespace
        let (store, ns) = setup();
        store.set("v1:foo", Value::Int(1));
        store.set("v10:foo", Value::Int(2));

        let keys = ns.raw_keys("v1").unwrap();
        assert_eq!(keys, vec!["foo".to_string()]);

        ns.clear("v1").unwrap();
        assert_eq!(store.get("v10:foo"), Some(Value::Int(2)));
    }
}
