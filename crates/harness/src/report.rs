//! Per-scenario verdicts and the run summary
//!
//! Verdicts keep the three error classes apart: behavioral mismatches are
//! `Failed` with the full diff tree attached, harness-internal problems are
//! `Aborted` and counted separately, so a broken harness is never mistaken
//! for a genuine regression.

use crate::diff::Diff;
use serde::Serialize;
use std::fmt;

/// Verdict for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Verdict {
    /// Both implementations produced equivalent outcomes
    Passed,
    /// Behavioral mismatch; the diff tree enables triage without rerunning
    Failed(Diff),
    /// Reference implementation lacks a required capability
    Skipped(String),
    /// Harness-internal failure (consistency check, state report)
    Aborted(String),
}

impl Verdict {
    /// Short tag for log lines and summary rendering
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Passed => "passed",
            Verdict::Failed(_) => "failed",
            Verdict::Skipped(_) => "skipped",
            Verdict::Aborted(_) => "aborted",
        }
    }
}

/// Verdict for one named scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,
    /// Its verdict
    pub verdict: Verdict,
}

/// Aggregate result of one harness run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    /// Per-scenario reports, in execution order
    pub reports: Vec<ScenarioReport>,
    /// Scenarios with equivalent outcomes
    pub passed: usize,
    /// Scenarios with behavioral mismatches
    pub failed: usize,
    /// Scenarios skipped by capability gating
    pub skipped: usize,
    /// Scenarios aborted by harness-internal failures
    pub aborted: usize,
}

impl RunSummary {
    /// Record one scenario's verdict
    pub fn record(&mut self, name: &str, verdict: Verdict) {
        match verdict {
            Verdict::Passed => self.passed += 1,
            Verdict::Failed(_) => self.failed += 1,
            Verdict::Skipped(_) => self.skipped += 1,
            Verdict::Aborted(_) => self.aborted += 1,
        }
        self.reports.push(ScenarioReport {
            name: name.to_string(),
            verdict,
        });
    }

    /// Whether every executed scenario passed (skips do not count against)
    pub fn success(&self) -> bool {
        self.failed == 0 && self.aborted == 0
    }

    /// Process exit code: nonzero when any scenario failed or aborted
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }

    /// Machine-readable report for tooling that post-processes runs
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.reports {
            match &report.verdict {
                Verdict::Passed => writeln!(f, "PASS  {}", report.name)?,
                Verdict::Failed(diff) => {
                    writeln!(f, "FAIL  {}", report.name)?;
                    for (path, entry) in diff.entries() {
                        writeln!(f, "      {}: {}", path, entry)?;
                    }
                }
                Verdict::Skipped(reason) => writeln!(f, "SKIP  {} ({})", report.name, reason)?,
                Verdict::Aborted(reason) => writeln!(f, "ABORT {} ({})", report.name, reason)?,
            }
        }
        write!(
            f,
            "{} passed, {} failed, {} skipped, {} aborted",
            self.passed, self.failed, self.skipped, self.aborted
        )
    }
}
