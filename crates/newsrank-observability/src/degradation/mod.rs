//! Degradation tracking for ranking signals.

pub mod tracker;

pub use tracker::{DegradationSnapshot, DegradationTracker, RecoveryStatus, TrackedDegradation};
