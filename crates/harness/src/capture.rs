//! Outcome capture
//!
//! Executes one operation script against one implementation instance and
//! produces the full observable [`Outcome`]: the script's tri-state output
//! plus the final persisted state of the instance's namespace.
//!
//! Two guarantees hold on every exit path:
//! - the implementation's self-reported state is cross-checked against the
//!   raw keys in the backing store (an implementation that lies about its
//!   contents fails the scenario with a harness-internal error, never a
//!   behavioral verdict);
//! - the instance's namespace is cleared afterward, including when the
//!   consistency check itself fails.

use kvparity_core::{
    CapturedError, DictResult, HarnessError, KvDict, Outcome, Result, ScriptOutput, Value,
};
use kvparity_store::Namespacer;
use std::collections::BTreeMap;
use tracing::debug;

/// An operation script: a pure function of one implementation instance
///
/// Side effects on the instance (sets, deletes) are expected; statelessness
/// across invocations is required so scripts can re-run against fresh
/// namespaces. `Ok(None)` means the script legitimately returned nothing.
pub type Script = fn(&mut dyn KvDict) -> DictResult<Option<Value>>;

/// Run `script` against `dict` and capture its full observable outcome
///
/// Only errors raised by the script itself become part of the outcome.
/// Errors from the consistency check or the store propagate as
/// harness-internal failures and abort the scenario for this
/// implementation; cleanup still runs first.
pub fn capture(dict: &mut dyn KvDict, namespacer: &Namespacer, script: Script) -> Result<Outcome> {
    let output = match script(dict) {
        Ok(Some(value)) => ScriptOutput::Value(value),
        Ok(None) => ScriptOutput::NoValue,
        Err(err) => ScriptOutput::Error(CapturedError::from(&err)),
    };
    debug!(
        namespace = dict.namespace(),
        output = output.discriminant(),
        "script completed"
    );

    // Cleanup must run whether or not the consistency check passed, so the
    // check's result is held until after the clear.
    let state = verify_state(dict, namespacer);
    let cleanup = namespacer.clear(dict.namespace());

    let state = state?;
    cleanup?;
    Ok(Outcome { output, state })
}

/// Cross-check the implementation's state report against raw store keys
fn verify_state(dict: &dyn KvDict, namespacer: &Namespacer) -> Result<BTreeMap<String, Value>> {
    let namespace = dict.namespace().to_string();

    let state = dict.to_map().map_err(|source| HarnessError::StateReport {
        namespace: namespace.clone(),
        source,
    })?;

    let mut actual = namespacer.raw_keys(&namespace)?;
    actual.sort_unstable();
    let reported: Vec<String> = state.keys().cloned().collect();

    if reported != actual {
        return Err(HarnessError::ConsistencyViolation {
            namespace,
            reported,
            actual,
        });
    }
    Ok(state)
}
