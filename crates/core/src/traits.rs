//! Core trait definitions
//!
//! Two boundaries, kept separate on purpose:
//!
//! - [`KvDict`] is the implementation-under-test boundary. The harness
//!   drives scripts through it and reads its self-reported state.
//! - [`BackingStore`] is the ground-truth oracle boundary: the raw
//!   key-value store both instances persist into. The harness uses it only
//!   for the consistency check and cleanup, never as a primary data path.

use crate::capability::CapabilitySet;
use crate::error::{DictError, DictResult, Result};
use crate::value::Value;
use std::collections::BTreeMap;

/// A dictionary implementation under test
///
/// One live instance per candidate version, bound to one namespace in the
/// shared backing store, created at suite start and reused across scenarios
/// (its namespace is cleared between scenarios).
///
/// The core operation set is mandatory. Extended operations default to
/// `Err(DictError::Unsupported)`; an implementation that overrides one must
/// also declare the matching [`Capability`](crate::Capability) tag, since
/// scenario gating consults the declared set, not the vtable.
pub trait KvDict {
    /// Namespace this instance's keys live under in the backing store
    fn namespace(&self) -> &str;

    /// Extended operations this instance declares support for
    fn capabilities(&self) -> &CapabilitySet;

    /// Set a key to a value, creating or overwriting
    fn set_item(&mut self, key: &str, value: Value) -> DictResult<()>;

    /// Get a value; raises `KeyNotFound` when the key is missing
    fn get_item(&self, key: &str) -> DictResult<Value>;

    /// Delete a key; raises `KeyNotFound` when the key is missing
    fn del_item(&mut self, key: &str) -> DictResult<()>;

    /// Report all of this instance's keys and values as a mapping
    ///
    /// The capturer cross-checks this against raw store contents; an
    /// implementation that lies here fails the consistency check.
    fn to_map(&self) -> DictResult<BTreeMap<String, Value>>;

    // ========== Extended operations (capability-gated) ==========

    /// Multi-value lookup: all values whose key starts with `key_prefix`,
    /// in key order (implementations must return a deterministic order)
    fn multi_get(&self, key_prefix: &str) -> DictResult<Vec<Value>> {
        let _ = key_prefix;
        Err(DictError::Unsupported("multi_get"))
    }

    /// Hierarchical set: `path` segments are joined with the store's
    /// delimiter to form the stored key
    fn chain_set(&mut self, path: &[&str], value: Value) -> DictResult<()> {
        let _ = (path, value);
        Err(DictError::Unsupported("chain_set"))
    }

    /// Hierarchical get by path segments
    fn chain_get(&self, path: &[&str]) -> DictResult<Value> {
        let _ = path;
        Err(DictError::Unsupported("chain_get"))
    }

    /// Hierarchical delete by path segments
    fn chain_del(&mut self, path: &[&str]) -> DictResult<()> {
        let _ = path;
        Err(DictError::Unsupported("chain_del"))
    }

    /// Enumerate all keys in this instance's namespace
    fn list_keys(&self) -> DictResult<Vec<String>> {
        Err(DictError::Unsupported("list_keys"))
    }
}

/// The shared backing store, used as a ground-truth oracle
///
/// Physically one store, logically partitioned by namespace prefix. The
/// harness needs only prefix enumeration and single-key deletion; any
/// failure here is fatal to the suite (`HarnessError::StoreUnavailable`),
/// never a per-scenario soft failure.
pub trait BackingStore: Send + Sync {
    /// Enumerate every raw key whose name starts with `prefix`
    fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    /// Delete one raw key; deleting an absent key is a no-op
    fn delete(&self, key: &str) -> Result<()>;
}
