//! Differential-equivalence harness for kvparity
//!
//! Runs the same operation script against two candidate dictionary
//! implementations sharing one backing store and asserts both produce
//! identical observable outcomes: return values, raised errors, and
//! persisted state.
//!
//! # Flow
//!
//! The [`Runner`] selects a scenario from the [`Registry`], the prober
//! decides whether the reference implementation supports it, the capturer
//! executes it against each instance in turn (never concurrently), and the
//! diff engine compares the two [`Outcome`](kvparity_core::Outcome)s. An
//! empty [`Diff`] is the sole acceptance criterion.
//!
//! ```ignore
//! use kvparity_harness::{Registry, Runner};
//!
//! let registry = Registry::builtin();
//! let mut runner = Runner::new(&mut v1, &mut v2, namespacer);
//! let summary = runner.run(&registry)?;
//! std::process::exit(summary.exit_code());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capture;
pub mod config;
pub mod diff;
pub mod probe;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod scenarios;

#[cfg(test)]
pub(crate) mod testutil;

pub use capture::{capture, Script};
pub use config::HarnessConfig;
pub use diff::{diff_outcomes, Diff, DiffEntry};
pub use probe::{missing_capabilities, supports};
pub use report::{RunSummary, ScenarioReport, Verdict};
pub use runner::Runner;
pub use scenario::{Registry, Scenario};
