//! Scenario declarations and the registry
//!
//! A scenario is a stable name, an operation script, and the capabilities
//! it requires. This in-process declaration list is the harness's only
//! configured artifact; there is no file format behind it.

use crate::capture::Script;
use kvparity_core::Capability;

/// One named, capability-tagged operation script
#[derive(Clone, Copy)]
pub struct Scenario {
    /// Stable name, used in reports and logs
    pub name: &'static str,
    /// Capabilities the script needs; the reference implementation gates
    pub requires: &'static [Capability],
    /// The operation script itself
    pub script: Script,
}

impl Scenario {
    /// Declare a scenario
    pub const fn new(
        name: &'static str,
        requires: &'static [Capability],
        script: Script,
    ) -> Self {
        Self {
            name,
            requires,
            script,
        }
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("requires", &self.requires)
            .finish()
    }
}

/// Ordered catalogue of scenarios for one run
#[derive(Debug, Default)]
pub struct Registry {
    scenarios: Vec<Scenario>,
}

impl Registry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalogue (see [`crate::scenarios`])
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for scenario in crate::scenarios::catalogue() {
            registry.register(scenario);
        }
        registry
    }

    /// Append a scenario; registration order is execution order
    pub fn register(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    /// Iterate in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    /// Number of registered scenarios
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the registry holds no scenarios
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
