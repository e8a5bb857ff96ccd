//! Consecutive failure tracking

use crate::monitoring::types::ServiceState;

/// Alert-worthy change reported by [`FailureTracker::observe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Failures just reached the threshold
    Down,
    /// First success after an outage that reached the threshold
    Recovered,
}

/// Per-service outage detector
///
/// A service is down once `threshold` consecutive probes fail. `Down` is
/// emitted exactly once per outage and `Recovered` only for outages that
/// produced a `Down`.
#[derive(Debug, Clone)]
pub struct FailureTracker {
    threshold: u32,
    consecutive_failures: u32,
}

impl FailureTracker {
    /// Create a tracker; a zero threshold is treated as 1
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            consecutive_failures: 0,
        }
    }

    /// Feed one probe outcome
    pub fn observe(&mut self, state: ServiceState) -> Option<Transition> {
        if state.is_online() {
            let was_down = self.consecutive_failures >= self.threshold;
            self.consecutive_failures = 0;
            return was_down.then_some(Transition::Recovered);
        }

        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        (self.consecutive_failures == self.threshold).then_some(Transition::Down)
    }

    /// Number of failed probes in the current run
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Whether the current run of failures reached the threshold
    pub fn is_down(&self) -> bool {
        self.consecutive_failures >= self.threshold
    }
}
