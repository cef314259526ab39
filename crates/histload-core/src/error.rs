//! Error types for the histload pipeline.
//!
//! [`FragmentError`] is recoverable: the normalizer drops the fragment and
//! moves on. [`ImportError`] is fatal to the run and is surfaced to the
//! top-level handler in the binary.

use std::path::PathBuf;

/// Why a single fragment produced no record.
#[derive(Debug, thiserror::Error)]
pub enum FragmentError {
    #[error("fragment is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("fragment is not a JSON object")]
    NotAnObject,

    #[error("fragment has no usable `{0}` field")]
    MissingField(&'static str),

    #[error("fragment field `{field}` is not a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Failure reported by an [`EventSink`](crate::EventSink) implementation.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("could not connect to event store: {0}")]
    Connect(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("event store `{operation}` failed: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("event store reported a record that could not be rendered: {0}")]
    Encoding(String),
}

impl SinkError {
    pub fn operation(
        operation: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        SinkError::Operation {
            operation,
            source: source.into(),
        }
    }
}

/// A failure that aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Sink(#[from] SinkError),
}
