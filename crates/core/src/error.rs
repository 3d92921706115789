//! Error types for kvparity
//!
//! Two deliberately separate error worlds, handled differently:
//!
//! - [`DictError`]: scenario-domain errors raised by an implementation
//!   under test (missing key, unsupported operation). These are expected,
//!   captured into the execution outcome, and compared across the two
//!   implementations by a stable (kind, message) pair.
//! - [`HarnessError`]: harness-internal failures (store unreachable,
//!   consistency check divergence). These are never compared; they abort
//!   the current scenario or the whole suite.
//!
//! We use `thiserror` for automatic `Display` and `Error` implementations.

use thiserror::Error;

/// Result type alias for operations on an implementation under test
pub type DictResult<T> = std::result::Result<T, DictError>;

/// Result type alias for harness-internal operations
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Errors raised by a dictionary implementation under test
///
/// These are part of the observable behavior being compared: if version A
/// raises `KeyNotFound` somewhere, version B must raise it too, with the
/// same message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictError {
    /// Key (or chain path) does not exist
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Operation is not part of this implementation's API surface
    #[error("operation not supported: {0}")]
    Unsupported(&'static str),

    /// The implementation's own backend call failed
    #[error("backend error: {0}")]
    Backend(String),
}

impl DictError {
    /// Stable category tag for error comparison
    ///
    /// Errors are compared by (kind, message), never by object identity,
    /// since error representations need not match across implementations.
    pub fn kind(&self) -> &'static str {
        match self {
            DictError::KeyNotFound(_) => "key-not-found",
            DictError::Unsupported(_) => "unsupported",
            DictError::Backend(_) => "backend",
        }
    }
}

/// Harness-internal errors
///
/// Never part of an outcome comparison. A `ConsistencyViolation` or
/// `StateReport` aborts the scenario for the affected implementation;
/// `StoreUnavailable` is fatal to the whole suite.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Backing store could not be reached; fatal to the suite
    #[error("backing store unavailable: {0}")]
    StoreUnavailable(String),

    /// Implementation's reported state diverges from raw store contents
    #[error(
        "consistency violation in namespace {namespace:?}: \
         implementation reports keys {reported:?}, store holds {actual:?}"
    )]
    ConsistencyViolation {
        /// Namespace whose keys diverged
        namespace: String,
        /// Key set from the implementation's state-reporting method
        reported: Vec<String>,
        /// Key set enumerated directly from the backing store
        actual: Vec<String>,
    },

    /// The implementation's state-reporting method itself failed
    #[error("state report failed in namespace {namespace:?}: {source}")]
    StateReport {
        /// Namespace being reported
        namespace: String,
        /// Underlying error from the implementation
        source: DictError,
    },
}
