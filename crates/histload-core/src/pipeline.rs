//! Pipeline — one import run from file to store.
//!
//! read → extract → clean → connect → clear → insert → sample → close.
//!
//! The sink is acquired by [`run`] through a connect closure and released by
//! it exactly once, whether the load succeeded or not.

use std::future::Future;
use std::path::Path;

use chrono::Utc;
use tracing::{error, info};

use crate::config::ImportConfig;
use crate::error::{ImportError, SinkError};
use crate::normalizer::normalize_text;
use crate::report::ImportReport;
use crate::sink::EventSink;
use crate::types::NormalizedBatch;

/// Read the whole source file into memory.
pub async fn load_source(path: &Path) -> Result<String, ImportError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Clear the sink and load `batch` into it.
///
/// An empty batch stops after the clear: nothing is inserted and no report is
/// produced.
pub async fn load_into<S: EventSink + ?Sized>(
    sink: &mut S,
    batch: &NormalizedBatch,
    sample_size: usize,
) -> Result<Option<ImportReport>, SinkError> {
    let started_at = Utc::now();

    info!("clearing existing collection");
    let cleared = sink.clear().await?;

    info!("inserting events");
    if batch.is_empty() {
        info!("no events to insert");
        return Ok(None);
    }
    let valid_events = sink.insert_batch(&batch.records).await?;
    let samples = sink.sample_random(sample_size).await?;

    Ok(Some(ImportReport {
        total_events: batch.records.len(),
        valid_events,
        skipped: batch.skipped,
        cleared,
        samples,
        started_at,
        finished_at: Utc::now(),
    }))
}

/// Run a full import with the sink produced by `connect`.
///
/// The file is read and normalised before connecting, so a bad input file
/// never opens a connection.
pub async fn run<S, F, Fut>(
    config: &ImportConfig,
    connect: F,
) -> Result<Option<ImportReport>, ImportError>
where
    S: EventSink,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<S, SinkError>>,
{
    info!(path = %config.source.path.display(), "reading event file");
    let text = load_source(&config.source.path).await?;

    let batch = normalize_text(&text);
    info!(
        fragments = batch.fragments(),
        records = batch.records.len(),
        skipped = batch.skipped,
        "events extracted"
    );

    let mut sink = connect().await?;
    info!("connected to event store");

    let loaded = load_into(&mut sink, &batch, config.report.sample_size).await;
    let closed = sink.close().await;
    match &closed {
        Ok(()) => info!("event store connection closed"),
        Err(e) => error!(error = %e, "failed to close event store connection"),
    }

    let report = loaded?;
    closed?;
    if let Some(report) = &report {
        info!(
            inserted = report.valid_events,
            elapsed_ms = report.elapsed().num_milliseconds(),
            "import finished"
        );
    }
    Ok(report)
}
