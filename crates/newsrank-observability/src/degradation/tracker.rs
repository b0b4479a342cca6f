//! Record every signal fallback: signal, article, failure, fallback value, timestamp, recovery status.

use std::collections::{BTreeSet, VecDeque};

use chrono::{DateTime, Utc};
use newsrank_core::models::{DegradationEvent, Signal};
use serde::{Deserialize, Serialize};

/// Events kept before the oldest are evicted.
pub const DEFAULT_EVENT_CAPACITY: usize = 1_024;

/// Recovery status of a degradation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// The signal is still falling back.
    Active,
    /// The signal produced a real value since.
    Recovered,
}

/// A tracked degradation event with recovery status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

/// Point-in-time view for hosts deciding whether to show "ranking temporarily degraded".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationSnapshot {
    pub degraded_signals: Vec<Signal>,
    pub active_events: usize,
    pub total_events: usize,
}

impl DegradationSnapshot {
    pub fn is_degraded(&self) -> bool {
        !self.degraded_signals.is_empty()
    }
}

/// Bounded log of signal fallbacks.
#[derive(Debug, Clone)]
pub struct DegradationTracker {
    events: VecDeque<TrackedDegradation>,
    capacity: usize,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.min(DEFAULT_EVENT_CAPACITY)),
            capacity: capacity.max(1),
        }
    }

    /// Record a new degradation event. Logging happens where the fallback is taken.
    pub fn record(&mut self, event: DegradationEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
    }

    /// Mark every active event for `signal` as recovered.
    pub fn mark_recovered(&mut self, signal: Signal, at: DateTime<Utc>) {
        for tracked in self.events.iter_mut() {
            if tracked.event.signal == signal && tracked.recovery_status == RecoveryStatus::Active
            {
                tracked.recovery_status = RecoveryStatus::Recovered;
                tracked.recovered_at = Some(at);
            }
        }
    }

    pub fn events(&self) -> impl Iterator<Item = &TrackedDegradation> {
        self.events.iter()
    }

    /// Get active (unrecovered) degradations.
    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    /// Count events for `signal` newer than `window` before `now`.
    pub fn count_recent(&self, signal: Signal, window: chrono::Duration, now: DateTime<Utc>) -> usize {
        let cutoff = now - window;
        self.events
            .iter()
            .filter(|t| t.event.signal == signal && t.event.timestamp > cutoff)
            .count()
    }

    pub fn snapshot(&self) -> DegradationSnapshot {
        let degraded: BTreeSet<Signal> = self
            .events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .map(|t| t.event.signal)
            .collect();
        DegradationSnapshot {
            degraded_signals: degraded.into_iter().collect(),
            active_events: self.active_degradations().len(),
            total_events: self.events.len(),
        }
    }
}

impl Default for DegradationTracker {
    fn default() -> Self {
        Self::new()
    }
}
