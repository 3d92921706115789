//! Structural diff engine
//!
//! Determines whether two captured outcomes are behaviorally equivalent
//! and, when they are not, describes every divergence as a tree keyed by
//! path through the compared structures (`output`, `output[3]`,
//! `state["foo"]`). The empty diff is the sole acceptance criterion.
//!
//! Comparison semantics:
//! - mappings (state, `Value::Object`) compare unordered, by key set and
//!   per-key values;
//! - sequences (`Value::Array`) compare order-sensitively, surfacing index
//!   mismatches and trailing additions/removals;
//! - errors compare by (kind, message), never by representation;
//! - the output tri-state (no-value / value / error) must match before any
//!   inner comparison happens.
//!
//! The reported structure is not symmetric between the two sides; only the
//! empty/non-empty verdict is.

use kvparity_core::{Outcome, ScriptOutput, Value};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One divergence at a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiffEntry {
    /// Present on the second side only (rendered value)
    Added(String),
    /// Present on the first side only (rendered value)
    Removed(String),
    /// Present on both sides with different content
    Changed {
        /// Rendering of the first side
        left: String,
        /// Rendering of the second side
        right: String,
    },
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffEntry::Added(v) => write!(f, "added: {}", v),
            DiffEntry::Removed(v) => write!(f, "removed: {}", v),
            DiffEntry::Changed { left, right } => write!(f, "changed: {} -> {}", left, right),
        }
    }
}

/// Tree of divergences between two outcomes, keyed by path
///
/// Empty ⇔ the outcomes are behaviorally equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diff {
    entries: BTreeMap<String, DiffEntry>,
}

impl Diff {
    /// Whether the two outcomes were equivalent
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded divergences
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over (path, entry) pairs in path order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &DiffEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up the divergence at a path, if any
    pub fn get(&self, path: &str) -> Option<&DiffEntry> {
        self.entries.get(path)
    }

    fn added(&mut self, path: String, value: &Value) {
        self.entries.insert(path, DiffEntry::Added(value.to_string()));
    }

    fn removed(&mut self, path: String, value: &Value) {
        self.entries.insert(path, DiffEntry::Removed(value.to_string()));
    }

    fn changed(&mut self, path: String, left: String, right: String) {
        self.entries.insert(path, DiffEntry::Changed { left, right });
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(no differences)");
        }
        for (path, entry) in &self.entries {
            writeln!(f, "{}: {}", path, entry)?;
        }
        Ok(())
    }
}

/// Compare two captured outcomes
pub fn diff_outcomes(a: &Outcome, b: &Outcome) -> Diff {
    let mut diff = Diff::default();
    diff_output("output", &a.output, &b.output, &mut diff);
    diff_map("state", &a.state, &b.state, &mut diff);
    diff
}

fn diff_output(path: &str, a: &ScriptOutput, b: &ScriptOutput, diff: &mut Diff) {
    match (a, b) {
        (ScriptOutput::NoValue, ScriptOutput::NoValue) => {}
        (ScriptOutput::Value(x), ScriptOutput::Value(y)) => diff_value(path, x, y, diff),
        (ScriptOutput::Error(x), ScriptOutput::Error(y)) => {
            if x.kind != y.kind {
                diff.changed(format!("{}.error.kind", path), x.kind.clone(), y.kind.clone());
            }
            if x.message != y.message {
                diff.changed(
                    format!("{}.error.message", path),
                    x.message.clone(),
                    y.message.clone(),
                );
            }
        }
        // Tri-state mismatch: an error on one side and not the other (or a
        // value vs. no value) is always a difference.
        _ => diff.changed(path.to_string(), describe_output(a), describe_output(b)),
    }
}

fn diff_value(path: &str, a: &Value, b: &Value, diff: &mut Diff) {
    match (a, b) {
        (Value::Array(x), Value::Array(y)) => {
            let common = x.len().min(y.len());
            for i in 0..common {
                diff_value(&format!("{}[{}]", path, i), &x[i], &y[i], diff);
            }
            for (i, item) in x.iter().enumerate().skip(common) {
                diff.removed(format!("{}[{}]", path, i), item);
            }
            for (i, item) in y.iter().enumerate().skip(common) {
                diff.added(format!("{}[{}]", path, i), item);
            }
        }
        (Value::Object(x), Value::Object(y)) => diff_map(path, x, y, diff),
        _ => {
            if a != b {
                diff.changed(path.to_string(), a.to_string(), b.to_string());
            }
        }
    }
}

fn diff_map(
    path: &str,
    a: &BTreeMap<String, Value>,
    b: &BTreeMap<String, Value>,
    diff: &mut Diff,
) {
    for (key, left) in a {
        let key_path = format!("{}[{:?}]", path, key);
        match b.get(key) {
            Some(right) => diff_value(&key_path, left, right, diff),
            None => diff.removed(key_path, left),
        }
    }
    for (key, right) in b {
        if !a.contains_key(key) {
            diff.added(format!("{}[{:?}]", path, key), right);
        }
    }
}

fn describe_output(output: &ScriptOutput) -> String {
    match output {
        ScriptOutput::NoValue => "no-value".to_string(),
        ScriptOutput::Value(v) => format!("value({})", v),
        ScriptOutput::Error(e) => format!("error({}: {})", e.kind, e.message),
    }
}
