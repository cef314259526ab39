//! Sink — the document store the normalised events are loaded into.
//!
//! [`EventSink`] is the seam between the pipeline and a concrete store. The
//! MongoDB implementation lives in `histload-mongo`; [`MemorySink`] keeps
//! everything in a `Vec` and backs `--dry-run` and the test harnesses.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde_json::Value;

use crate::error::SinkError;
use crate::types::EventRecord;

/// A destination collection for event records.
///
/// Operations are awaited one at a time by the pipeline. Implementations must
/// not retry on their own; every error is fatal to the run.
#[async_trait]
pub trait EventSink: Send {
    /// Remove every existing record. Returns how many were removed.
    async fn clear(&mut self) -> Result<u64, SinkError>;

    /// Insert all `records` in one call. Returns how many were persisted.
    async fn insert_batch(&mut self, records: &[EventRecord]) -> Result<u64, SinkError>;

    /// Up to `n` stored records picked by the store, in no particular order.
    async fn sample_random(&mut self, n: usize) -> Result<Vec<Value>, SinkError>;

    /// Release the underlying connection.
    async fn close(&mut self) -> Result<(), SinkError>;
}

#[async_trait]
impl<'a, S: EventSink + ?Sized> EventSink for &'a mut S {
    async fn clear(&mut self) -> Result<u64, SinkError> {
        (**self).clear().await
    }

    async fn insert_batch(&mut self, records: &[EventRecord]) -> Result<u64, SinkError> {
        (**self).insert_batch(records).await
    }

    async fn sample_random(&mut self, n: usize) -> Result<Vec<Value>, SinkError> {
        (**self).sample_random(n).await
    }

    async fn close(&mut self) -> Result<(), SinkError> {
        (**self).close().await
    }
}

/// In-memory [`EventSink`].
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<EventRecord>,
    closed: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `records` already stored, as a prior run would have left them.
    pub fn with_records(records: Vec<EventRecord>) -> Self {
        Self {
            records,
            closed: false,
        }
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[async_trait]
impl EventSink for MemorySink {
    async fn clear(&mut self) -> Result<u64, SinkError> {
        let removed = self.records.len() as u64;
        self.records.clear();
        Ok(removed)
    }

    async fn insert_batch(&mut self, records: &[EventRecord]) -> Result<u64, SinkError> {
        self.records.extend_from_slice(records);
        Ok(records.len() as u64)
    }

    async fn sample_random(&mut self, n: usize) -> Result<Vec<Value>, SinkError> {
        let mut rng = rand::thread_rng();
        self.records
            .choose_multiple(&mut rng, n)
            .map(|record| {
                serde_json::to_value(record).map_err(|e| SinkError::Encoding(e.to_string()))
            })
            .collect()
    }

    async fn close(&mut self) -> Result<(), SinkError> {
        self.closed = true;
        Ok(())
    }
}
