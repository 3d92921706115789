//! Core types and traits for kvparity
//!
//! This crate defines the foundational types used throughout the harness:
//! - Value: Unified value enum for everything a dictionary can hold or return
//! - DictError / HarnessError: the two error worlds (captured vs. fatal)
//! - Capability: optional operation tags an implementation may expose
//! - ScriptOutput / Outcome: the observable record of one script execution
//! - Traits: KvDict (implementation under test), BackingStore (oracle)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capability;
pub mod error;
pub mod outcome;
pub mod traits;
pub mod value;

pub use capability::{capability_set, Capability, CapabilitySet};
pub use error::{DictError, DictResult, HarnessError, Result};
pub use outcome::{CapturedError, Outcome, ScriptOutput};
pub use traits::{BackingStore, KvDict};
pub use value::Value;
