//! Shared test fixtures for the integration suite.
//!
//! `StoreDict` is a reference dictionary implementation written directly
//! against the public API: it persists through a shared `MemoryStore`,
//! declares its capability set at construction, and can be given behavioral
//! quirks to simulate a regressed candidate version.

#![allow(dead_code)]

use kvparity::{
    capability_set, BackingStore, Capability, CapabilitySet, DictError, DictResult,
    HarnessConfig, KvDict, MemoryStore, Namespacer, Value,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Once};

static INIT_TRACING: Once = Once::new();

/// Install a test subscriber once per process.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// One shared store, the namespacer over it, and the default config.
pub fn suite() -> (Arc<MemoryStore>, Namespacer, HarnessConfig) {
    init_tracing();
    let config = HarnessConfig::default();
    let store = Arc::new(MemoryStore::new());
    let namespacer = Namespacer::with_delimiter(
        store.clone() as Arc<dyn BackingStore>,
        config.delimiter,
    );
    (store, namespacer, config)
}

/// All extended capabilities.
pub fn full_caps() -> CapabilitySet {
    capability_set(&[
        Capability::MultiGet,
        Capability::ChainSet,
        Capability::ChainGet,
        Capability::ChainDel,
        Capability::ListKeys,
    ])
}

/// Deliberate behavioral deviations for regression simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quirk {
    /// Faithful behavior
    #[default]
    None,
    /// Deleting a missing key silently succeeds instead of raising
    SilentMissingDelete,
    /// get_item returns Null instead of raising on a missing key
    NullOnMissingGet,
}

/// Dictionary implementation under test, backed by the shared store.
pub struct StoreDict {
    store: Arc<MemoryStore>,
    namespacer: Namespacer,
    namespace: String,
    caps: CapabilitySet,
    quirk: Quirk,
}

impl StoreDict {
    /// Core surface only: models an older API version.
    pub fn v1_surface(
        store: &Arc<MemoryStore>,
        namespacer: &Namespacer,
        namespace: &str,
    ) -> Self {
        Self {
            store: store.clone(),
            namespacer: namespacer.clone(),
            namespace: namespace.to_string(),
            caps: CapabilitySet::new(),
            quirk: Quirk::None,
        }
    }

    /// Full extended surface.
    pub fn full_surface(
        store: &Arc<MemoryStore>,
        namespacer: &Namespacer,
        namespace: &str,
    ) -> Self {
        let mut dict = Self::v1_surface(store, namespacer, namespace);
        dict.caps = full_caps();
        dict
    }

    pub fn with_quirk(mut self, quirk: Quirk) -> Self {
        self.quirk = quirk;
        self
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

    fn own_keys(&self) -> DictResult<Vec<String>> {
        self.namespacer
            .raw_keys(&self.namespace)
            .map_err(|e| DictError::Backend(e.to_string()))
    }
}

impl KvDict for StoreDict {
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
        match self.store.get(&self.prefixed(key)) {
            Some(value) => Ok(value),
            None if self.quirk == Quirk::NullOnMissingGet => Ok(Value::Null),
            None => Err(DictError::KeyNotFound(key.to_string())),
        }
    }

    fn del_item(&mut self, key: &str) -> DictResult<()> {
        let existed = self.store.remove(&self.prefixed(key));
        if existed || self.quirk == Quirk::SilentMissingDelete {
            Ok(())
        } else {
            Err(DictError::KeyNotFound(key.to_string()))
        }
    }

    fn to_map(&self) -> DictResult<BTreeMap<String, Value>> {
        let mut map = BTreeMap::new();
        for key in self.own_keys()? {
            if let Some(value) = self.store.get(&self.prefixed(&key)) {
                map.insert(key, value);
            }
        }
        Ok(map)
    }

    fn multi_get(&self, key_prefix: &str) -> DictResult<Vec<Value>> {
        self.require(Capability::MultiGet)?;
        let mut values = Vec::new();
        for key in self.own_keys()? {
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
        self.own_keys()
    }
}
