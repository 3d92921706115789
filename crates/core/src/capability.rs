//! Capability tags for optional dictionary operations
//!
//! An implementation declares, at construction, which optional operations
//! it supports. The prober queries this declared set; nothing in the
//! harness relies on runtime reflection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An optional operation a dictionary implementation may expose
///
/// The core set {set_item, get_item, del_item, to_map} is mandatory and
/// has no tag; only the extended operations are gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Capability {
    /// `multi_get`: multi-value lookup by key prefix
    MultiGet,
    /// `chain_set`: hierarchical set keyed by path segments
    ChainSet,
    /// `chain_get`: hierarchical get keyed by path segments
    ChainGet,
    /// `chain_del`: hierarchical delete keyed by path segments
    ChainDel,
    /// `list_keys`: enumerate all keys in the instance's namespace
    ListKeys,
}

impl Capability {
    /// Operation name as exposed on the API surface
    pub fn name(&self) -> &'static str {
        match self {
            Capability::MultiGet => "multi_get",
            Capability::ChainSet => "chain_set",
            Capability::ChainGet => "chain_get",
            Capability::ChainDel => "chain_del",
            Capability::ListKeys => "list_keys",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of optional operations an instance declares
pub type CapabilitySet = BTreeSet<Capability>;

/// Build a capability set from a slice
pub fn capability_set(caps: &[Capability]) -> CapabilitySet {
    caps.iter().copied().collect()
}
