// SPDX-License-Identifier: MPL-2.0
//! Manually advanced scheduler.
//!
//! Time only moves when [`ManualScheduler::advance`] is called, which makes
//! the inactivity countdown deterministic in tests and in the headless CLI
//! session.

use crate::application::port::{Scheduler, TimerId};
use std::collections::BTreeMap;
use std::time::Duration;

/// Scheduler with a virtual clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<TimerId, Duration>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward and returns the timers that fired, earliest first.
    ///
    /// Fired timers are removed; the caller delivers them to whoever started them.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let mut due: Vec<(Duration, TimerId)> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= self.now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort();
        for (_, id) in &due {
            self.pending.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        self.pending.insert(id, self.now + delay);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }
}
