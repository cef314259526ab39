//! histload-core — historical event loader core library.
//!
//! This crate exposes the pipeline stages as public modules, plus the shared
//! types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Extractor ──► Normalizer ──► Sink
//!                              │
//!                              └──► Cleaner
//! ```
//!
//! The run is strictly sequential. The sink is the only stage that suspends,
//! and each of its operations is awaited before the next one starts.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod extractor;
pub mod normalizer;
pub mod pipeline;
pub mod report;
pub mod sink;
pub mod types;

pub use error::{FragmentError, ImportError, SinkError};
pub use report::ImportReport;
pub use sink::{EventSink, MemorySink};
pub use types::{EventRecord, Fragment, NormalizedBatch};
