//! Shared test utilities for histload integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod fixtures;
pub mod log_capture;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use log_capture::*;
pub use recording_sink::*;
