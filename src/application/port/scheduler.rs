// SPDX-License-Identifier: MPL-2.0
//! Timer port definition.
//!
//! The controls overlay hides after a period of inactivity. The countdown is
//! a one-shot timer started through [`Scheduler`]; when it fires, the host
//! calls back into the controller with the [`TimerId`] it was given.

use std::time::Duration;

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Port for one-shot cancellable timers.
pub trait Scheduler {
    /// Starts a timer that fires once after `delay`.
    fn start(&mut self, delay: Duration) -> TimerId;

    /// Cancels a pending timer. Cancelling a fired or unknown timer is a no-op.
    fn cancel(&mut self, id: TimerId);
}
