//! Harness configuration
//!
//! Suite-level knobs live here so the embedding code (CLI, test binary)
//! has one place to override them. Connection details for a networked
//! backing store are the embedder's concern, behind `BackingStore`.

use kvparity_store::namespace::DEFAULT_DELIMITER;

/// Configuration for one harness run
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Namespace for the first-listed (reference) implementation
    pub namespace_a: String,
    /// Namespace for the second implementation
    pub namespace_b: String,
    /// Key-joining delimiter of the backing store
    ///
    /// An external contract of the store, not an invariant of the harness.
    pub delimiter: char,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            namespace_a: "kvparity_v1".to_string(),
            namespace_b: "kvparity_v2".to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}
