//! histload — historical event loader.
//!
//! Reads a loosely structured JSON dump, extracts every `"event": {...}`
//! object, cleans the descriptions and bulk-loads the result into MongoDB
//! after clearing the destination collection. This crate re-exports the
//! pipeline so that integration tests and benches can import it directly.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Extractor ──► Normalizer ──► Sink
//! ```
//!
//! The stages live in `histload-core`; the MongoDB sink lives in
//! `histload-mongo`.

pub use histload_core::*;
pub use histload_mongo::MongoSink;
