//! Scenario orchestration
//!
//! Drives each registered scenario through its per-scenario state machine:
//! pending → (skipped | running-A → running-B → comparing → (passed |
//! failed)). The two executions are strictly sequential, never concurrent,
//! so namespace partitioning plus mandatory clearing is the only isolation
//! needed. No retries: everything is deterministic given isolated
//! namespaces, so a retry would only mask a real bug.

use crate::capture::capture;
use crate::diff::diff_outcomes;
use crate::probe::missing_capabilities;
use crate::report::{RunSummary, Verdict};
use crate::scenario::{Registry, Scenario};
use kvparity_core::{Capability, HarnessError, KvDict, Outcome, Result};
use kvparity_store::Namespacer;
use tracing::{debug, info, warn};

/// Runs every registered scenario against two implementation instances
///
/// The first instance is the reference: its capability set gates which
/// scenarios run at all. Store unavailability aborts the whole run;
/// per-implementation harness failures abort only the affected scenario.
pub struct Runner<'a> {
    first: &'a mut dyn KvDict,
    second: &'a mut dyn KvDict,
    namespacer: Namespacer,
}

impl<'a> Runner<'a> {
    /// Create a runner over two instances sharing one backing store
    pub fn new(
        first: &'a mut dyn KvDict,
        second: &'a mut dyn KvDict,
        namespacer: Namespacer,
    ) -> Self {
        Self {
            first,
            second,
            namespacer,
        }
    }

    /// Run the full registry and aggregate verdicts
    ///
    /// Both namespaces are cleared before the first scenario and after
    /// every scenario, success or failure.
    pub fn run(&mut self, registry: &Registry) -> Result<RunSummary> {
        info!(scenarios = registry.len(), "starting differential run");
        self.namespacer.clear(self.first.namespace())?;
        self.namespacer.clear(self.second.namespace())?;

        let mut summary = RunSummary::default();
        for scenario in registry.iter() {
            let verdict = self.run_scenario(scenario)?;
            info!(scenario = scenario.name, verdict = verdict.label(), "scenario finished");
            summary.record(scenario.name, verdict);
        }

        info!(
            passed = summary.passed,
            failed = summary.failed,
            skipped = summary.skipped,
            aborted = summary.aborted,
            "differential run complete"
        );
        Ok(summary)
    }

    fn run_scenario(&mut self, scenario: &Scenario) -> Result<Verdict> {
        let verdict = self.execute(scenario);
        // Post-scenario hygiene for both namespaces, on every path. The
        // captures already cleared their own namespace; these are no-ops
        // unless a capture aborted early.
        self.namespacer.clear(self.first.namespace())?;
        self.namespacer.clear(self.second.namespace())?;
        verdict
    }

    fn execute(&mut self, scenario: &Scenario) -> Result<Verdict> {
        let missing = missing_capabilities(&*self.first, scenario.requires);
        if !missing.is_empty() {
            let reason = format!(
                "reference implementation lacks: {}",
                render_capabilities(&missing)
            );
            debug!(scenario = scenario.name, %reason, "skipping");
            return Ok(Verdict::Skipped(reason));
        }

        debug!(scenario = scenario.name, phase = "running-a");
        let outcome_a = match self.capture_one(scenario, Side::First)? {
            Captured::Outcome(outcome) => outcome,
            Captured::Aborted(reason) => return Ok(Verdict::Aborted(reason)),
        };

        debug!(scenario = scenario.name, phase = "running-b");
        let outcome_b = match self.capture_one(scenario, Side::Second)? {
            Captured::Outcome(outcome) => outcome,
            Captured::Aborted(reason) => return Ok(Verdict::Aborted(reason)),
        };

        debug!(scenario = scenario.name, phase = "comparing");
        let diff = diff_outcomes(&outcome_a, &outcome_b);
        if diff.is_empty() {
            Ok(Verdict::Passed)
        } else {
            warn!(scenario = scenario.name, differences = diff.len(), "behavioral mismatch");
            Ok(Verdict::Failed(diff))
        }
    }

    /// Capture one side, separating suite-fatal store failures from
    /// scenario-fatal harness failures
    fn capture_one(&mut self, scenario: &Scenario, side: Side) -> Result<Captured> {
        let dict: &mut dyn KvDict = match side {
            Side::First => &mut *self.first,
            Side::Second => &mut *self.second,
        };
        match capture(dict, &self.namespacer, scenario.script) {
            Ok(outcome) => Ok(Captured::Outcome(outcome)),
            Err(err @ HarnessError::StoreUnavailable(_)) => Err(err),
            Err(err) => {
                warn!(scenario = scenario.name, error = %err, "harness-internal failure");
                Ok(Captured::Aborted(err.to_string()))
            }
        }
    }
}

enum Side {
    First,
    Second,
}

enum Captured {
    Outcome(Outcome),
    Aborted(String),
}

fn render_capabilities(caps: &[Capability]) -> String {
    caps.iter()
        .map(Capability::name)
        .collect::<Vec<_>>()
        .join(", ")
}
