//! kvparity — differential-equivalence testing for key-value dictionary APIs
//!
//! Runs the same operation scripts against two candidate implementations of
//! an externally-backed dictionary API and asserts both produce identical
//! observable outcomes: return values, raised errors, and persisted state.
//!
//! # Quick Start
//!
//! ```ignore
//! use kvparity::{MemoryStore, Namespacer, Registry, Runner};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let namespacer = Namespacer::new(store.clone());
//!
//! // v1 and v2 are your two candidate implementations of KvDict,
//! // each bound to its own namespace in the shared store.
//! let mut runner = Runner::new(&mut v1, &mut v2, namespacer);
//! let summary = runner.run(&Registry::builtin())?;
//!
//! println!("{}", summary);
//! std::process::exit(summary.exit_code());
//! ```
//!
//! # Architecture
//!
//! The harness compares behavior only: it never inspects timing or store
//! round-trip counts. Equivalence means an empty structural diff over
//! `{output, state}`. The CLI, module loading, and connection setup for a
//! networked backing store are the embedder's concern, behind the
//! [`BackingStore`] trait.

pub use kvparity_core::{
    capability_set, BackingStore, Capability, CapabilitySet, CapturedError, DictError,
    DictResult, HarnessError, KvDict, Outcome, Result, ScriptOutput, Value,
};
pub use kvparity_harness::{
    capture, diff_outcomes, missing_capabilities, supports, Diff, DiffEntry, HarnessConfig,
    Registry, RunSummary, Runner, Scenario, ScenarioReport, Script, Verdict,
};
pub use kvparity_store::{MemoryStore, Namespacer};
