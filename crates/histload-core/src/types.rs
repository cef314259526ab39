//! Core types for histload-core.
//!
//! This module defines the data flowing between pipeline stages: the raw
//! [`Fragment`] cut out of the source text, the normalised [`EventRecord`],
//! and the [`NormalizedBatch`] handed to the sink.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw substring of the source text presumed to hold one event object.
///
/// Nothing about the text is guaranteed; it may be truncated or otherwise
/// malformed JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Zero-based position of this fragment among all matches.
    pub ordinal: usize,
    /// Byte offset of the captured `{` in the source text.
    pub offset: usize,
    /// The captured object literal, braces included.
    pub text: &'a str,
}

/// A normalised historical event, ready to be persisted.
///
/// `date` is carried through untouched; the source files mix plain years,
/// ISO dates and negative years, so no date type is imposed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub date: Value,
    /// Description with wiki templates, anchor tags and extra whitespace removed.
    pub description: String,
    pub lang: String,
    pub granularity: String,
    /// Only present when the source value was truthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category1: Option<Value>,
}

/// Output of the normalizer: the records that survived, in source order, plus
/// the number of fragments that were discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedBatch {
    pub records: Vec<EventRecord>,
    pub skipped: usize,
}

impl NormalizedBatch {
    /// Number of fragments the batch was built from.
    pub fn fragments(&self) -> usize {
        self.records.len() + self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
