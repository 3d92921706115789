//! Capability probing
//!
//! Decides, per scenario, whether an implementation instance supports all
//! operations the scenario needs. Purely inspects the instance's declared
//! capability set; no side effects, no store access.
//!
//! Policy: gating consults the FIRST-listed implementation only. When it
//! lacks a required operation the scenario is skipped for both instances —
//! "not applicable to an older API surface" is distinct from "behavioral
//! mismatch" and is reported separately from passes and failures.

use kvparity_core::{Capability, KvDict};

/// Whether `dict` declares every capability in `required`
pub fn supports(dict: &dyn KvDict, required: &[Capability]) -> bool {
    missing_capabilities(dict, required).is_empty()
}

/// The required capabilities `dict` does not declare, in order
pub fn missing_capabilities(dict: &dyn KvDict, required: &[Capability]) -> Vec<Capability> {
    required
        .iter()
        .copied()
        .filter(|cap| !dict.capabilities().contains(cap))
        .collect()
}
