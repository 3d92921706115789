//! Execution outcome types
//!
//! An [`Outcome`] is the full observable record of running one operation
//! script against one implementation: what the script returned (or raised),
//! plus the final persisted state of the instance's namespace.

use crate::error::DictError;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Comparable form of a scenario-domain error
///
/// Errors are recorded as a stable (kind, message) pair rather than the
/// error object itself, so two implementations with different error types
/// can still be judged equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedError {
    /// Stable category tag, e.g. "key-not-found"
    pub kind: String,
    /// Descriptive text of the error
    pub message: String,
}

impl From<&DictError> for CapturedError {
    fn from(err: &DictError) -> Self {
        CapturedError {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// What a script produced: an explicit tri-state
///
/// `NoValue` (the script completed without returning anything) is distinct
/// from both a returned `Value` and a raised `Error`; it only ever equals
/// another `NoValue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScriptOutput {
    /// Script completed and returned nothing
    NoValue,
    /// Script completed and returned a value
    Value(Value),
    /// Script raised a scenario-domain error
    Error(CapturedError),
}

impl ScriptOutput {
    /// Short tag used in diff paths and log lines
    pub fn discriminant(&self) -> &'static str {
        match self {
            ScriptOutput::NoValue => "no-value",
            ScriptOutput::Value(_) => "value",
            ScriptOutput::Error(_) => "error",
        }
    }
}

/// Full observable record of one script execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// The script's result, error, or explicit absence of either
    pub output: ScriptOutput,
    /// Final state of the instance's namespace, keyed by raw (unprefixed) key
    ///
    /// Invariant: this key set equals the set of raw keys found under the
    /// instance's namespace in the backing store at capture time. The
    /// capturer verifies this; it is not assumed.
    pub state: BTreeMap<String, Value>,
}
