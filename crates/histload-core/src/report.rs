//! Import statistics shown at the end of a successful run.

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::Value;
use std::fmt;

/// Outcome of a run that inserted at least one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    /// Records produced by the normalizer and submitted for insertion.
    pub total_events: usize,
    /// Records the store reports as persisted.
    pub valid_events: u64,
    /// Fragments dropped by the normalizer.
    pub skipped: usize,
    /// Records removed from the collection before inserting.
    pub cleared: u64,
    /// Random records read back from the store.
    pub samples: Vec<Value>,
    /// Taken just before the clear.
    pub started_at: DateTime<Utc>,
    /// Taken once the samples are back.
    pub finished_at: DateTime<Utc>,
}

impl ImportReport {
    /// `valid / total * 100`, or `None` when nothing was submitted.
    pub fn success_percentage(&self) -> Option<f64> {
        if self.total_events == 0 {
            return None;
        }
        Some(self.valid_events as f64 / self.total_events as f64 * 100.0)
    }

    /// Time spent talking to the store, clear through sampling.
    pub fn elapsed(&self) -> TimeDelta {
        self.finished_at - self.started_at
    }

    /// Samples as indented JSON.
    pub fn samples_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.samples).unwrap_or_else(|_| "[]".to_string())
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Import statistics:")?;
        writeln!(f, "Total events processed: {}", self.total_events)?;
        writeln!(f, "Valid events imported: {}", self.valid_events)?;
        match self.success_percentage() {
            Some(pct) => write!(f, "Success rate: {pct:.2}%"),
            None => write!(f, "Success rate: n/a"),
        }
    }
}
