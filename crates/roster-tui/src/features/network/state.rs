use std::time::{Duration, Instant};

use roster_core::network::NetworkStatus;

#[derive(Debug, Clone)]
pub struct NetworkState {
    pub status: NetworkStatus,
    interval: Duration,
    last_probe: Option<Instant>,
}

impl NetworkState {
    pub fn new(interval: Duration) -> Self {
        Self {
            status: NetworkStatus::Unknown,
            interval,
            last_probe: None,
        }
    }

    /// True when no probe has been started yet or the interval has elapsed.
    pub fn probe_due(&self, now: Instant) -> bool {
        self.last_probe
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    pub fn mark_probe_started(&mut self, now: Instant) {
        self.last_probe = Some(now);
    }

    /// Records a probe result. Returns true when the status changed.
    pub fn record(&mut self, status: NetworkStatus) -> bool {
        let changed = self.status != status;
        self.status = status;
        changed
    }
}
