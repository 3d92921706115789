//! Shared fixtures for the harness's own unit tests
//!
//! `FixtureDict` is a minimal dictionary-under-test backed by a shared
//! `MemoryStore`. Capability declarations are configurable so one fixture
//! type can play both an older (core-only) and a newer (full-surface)
//! implementation, and `hide_from_state` makes it misreport its own
//! contents for consistency-check tests.

#![allow(dead_code)]

use kvparity_core::{
    capability_set, BackingStore, Capability, CapabilitySet, DictError, DictResult, KvDict, Value,
};
use kvparity_store::{MemoryStore, Namespacer};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One shared store plus the namespacer over it
pub(crate) fn suite() -> (Arc<MemoryStore>, Namespacer) {
    let store = Arc::new(MemoryStore::new());
    let namespacer = Namespacer::new(store.clone() as Arc<dyn BackingStore>);
    (store, namespacer)
}

/// All extended capabilities
pub(crate) fn full_caps() -> CapabilitySet {
    capability_set(&[
        Capability::MultiGet,
        Capability::ChainSet,
        Capability::ChainGet,
        Capability::ChainDel,
        Capability::ListKeys,
    ])
}

/// In-memory dictionary under test
pub(crate) struct FixtureDict {
    store: Arc<MemoryStore>,
    namespacer: Namespacer,
    namespace: String,
    caps: CapabilitySet,
    hidden_key: Option<String>,
}

impl FixtureDict {
    /// Core operations only, no declared capabilities (an "older" surface)
    pub fn bare(store: &Arc<MemoryStore>, namespacer: &Namespacer, namespace: &str) -> Self {
        Self {
            store: store.clone(),
            namespacer: namespacer.clone(),
            namespace: namespace.to_string(),
            caps: CapabilitySet::new(),
            hidden_key: None,
        }
    }

    /// Full extended surface
    pub fn full(store: &Arc<MemoryStore>, namespacer: &Namespacer, namespace: &str) -> Self {
        let mut dict = Self::bare(store, namespacer, namespace);
        dict.caps = full_caps();
        dict
    }

    pub fn set_capabilities(&mut self, caps: CapabilitySet) {
        self.caps = caps;
    }

    /// Make `to_map` omit this key: the fixture starts lying about its state
    pub fn hide_from_state(&mut self, key: &str) {
        self.hidden_key = Some(key.to_string());
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.namespacer.prefix_for(&self.namespace), key)
    }

    fn require(&self, cap: Capability) -> DictResult<()> {
        if self.caps.contains(&cap) {
            Ok(())
        } else {
            Err(DictError::Unsupported(cap.name()))
        }
    }

    fn scan_own_keys(&self) -> DictResult<Vec<String>> {
        self.namespacer
            .raw_keys(&self.namespace)
            .map_err(|e| DictError::Backend(e.to_string()))
    }
}

impl KvDict for FixtureDict {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn capabilities(&self) -> &CapabilitySet {
        &self.caps
    }

    fn set_item(&mut self, key: &str, value: Value) -> DictResult<()> {
        self.store.set(&self.prefixed(key), value);
        Ok(())
    }

    fn get_item(&self, key: &str) -> DictResult<Value> {
        self.store
            .get(&self.prefixed(key))
            .ok_or_else(|| DictError::KeyNotFound(key.to_string()))
    }

    fn del_item(&mut self, key: &str) -> DictResult<()> {
        if self.store.remove(&self.prefixed(key)) {
            Ok(())
        } else {
            Err(DictError::KeyNotFound(key.to_string()))
        }
    }

    fn to_map(&self) -> DictResult<BTreeMap<String, Value>> {
        let mut map = BTreeMap::new();
        for key in self.scan_own_keys()? {
            if self.hidden_key.as_deref() == Some(key.as_str()) {
                continue;
            }
            let value = self
                .store
                .get(&self.prefixed(&key))
                .ok_or_else(|| DictError::Backend(format!("key vanished during scan: {key}")))?;
            map.insert(key, value);
        }
        Ok(map)
    }

    fn multi_get(&self, key_prefix: &str) -> DictResult<Vec<Value>> {
        self.require(Capability::MultiGet)?;
        let mut values = Vec::new();
        for key in self.scan_own_keys()? {
            if key.starts_with(key_prefix) {
                if let Some(value) = self.store.get(&self.prefixed(&key)) {
                    values.push(value);
                }
            }
        }
        Ok(values)
    }

    fn chain_set(&mut self, path: &[&str], value: Value) -> DictResult<()> {
        self.require(Capability::ChainSet)?;
        let key = self.namespacer.join(path);
        self.store.set(&self.prefixed(&key), value);
        Ok(())
    }

    fn chain_get(&self, path: &[&str]) -> DictResult<Value> {
        self.require(Capability::ChainGet)?;
        let key = self.namespacer.join(path);
        self.store
            .get(&self.prefixed(&key))
            .ok_or(DictError::KeyNotFound(key))
    }

    fn chain_del(&mut self, path: &[&str]) -> DictResult<()> {
        self.require(Capability::ChainDel)?;
        let key = self.namespacer.join(path);
        if self.store.remove(&self.prefixed(&key)) {
            Ok(())
        } else {
            Err(DictError::KeyNotFound(key))
        }
    }

    fn list_keys(&self) -> DictResult<Vec<String>> {
        self.require(Capability::ListKeys)?;
        self.scan_own_keys()
    }
}
