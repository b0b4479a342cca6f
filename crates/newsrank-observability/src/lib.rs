//! # newsrank-observability
//!
//! Structured tracing with span definitions, one function per notable log event,
//! and tracking of signals that fell back to defaults so hosts can report
//! "ranking temporarily degraded".

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationSnapshot, DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
