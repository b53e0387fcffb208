// SPDX-License-Identifier: MPL-2.0
//! Auto-hide countdown for the control overlay.
//!
//! At most one timer is pending. Restarting cancels the previous timer before
//! starting a new one, and only the most recent timer id is honoured when it
//! fires.

use crate::application::port::{Scheduler, TimerId};
use crate::domain::video::ControlsHideDelay;

#[derive(Debug, Clone)]
pub struct InactivityCountdown {
    delay: ControlsHideDelay,
    pending: Option<TimerId>,
}

impl InactivityCountdown {
    #[must_use]
    pub fn new(delay: ControlsHideDelay) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> ControlsHideDelay {
        self.delay
    }

    #[must_use]
    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    /// Cancels the pending timer, if any, and starts a fresh one.
    pub fn restart<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> TimerId {
        self.cancel(scheduler);
        let id = scheduler.start(self.delay.as_duration());
        self.pending = Some(id);
        id
    }

    pub fn cancel<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
    }

    /// Consumes a fired timer. Returns `false` for stale or unknown ids.
    pub fn expire(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ManualScheduler;
    use std::time::Duration;

    #[test]
    fn restart_keeps_a_single_pending_timer() {
        let mut scheduler = ManualScheduler::new();
        let mut countdown = InactivityCountdown::new(ControlsHideDelay::default());

        let first = countdown.restart(&mut scheduler);
        let second = countdown.restart(&mut scheduler);

        assert_ne!(first, second);
        assert_eq!(countdown.pending(), Some(second));
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn stale_ids_do_not_expire() {
        let mut scheduler = ManualScheduler::new();
        let mut countdown = InactivityCountdown::new(ControlsHideDelay::default());

        let first = countdown.restart(&mut scheduler);
        let second = countdown.restart(&mut scheduler);

        assert!(!countdown.expire(first));
        assert!(countdown.expire(second));
        assert!(!countdown.expire(second));
    }

    #[test]
    fn timer_uses_configured_delay() {
        let mut scheduler = ManualScheduler::new();
        let mut countdown = InactivityCountdown::new(ControlsHideDelay::from_millis(1_000));
        let id = countdown.restart(&mut scheduler);

        assert!(scheduler.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![id]);
    }

    #[test]
    fn cancel_clears_pending() {
        let mut scheduler = ManualScheduler::new();
        let mut countdown = InactivityCountdown::new(ControlsHideDelay::default());
        countdown.restart(&mut scheduler);
        countdown.cancel(&mut scheduler);

        assert_eq!(countdown.pending(), None);
        assert_eq!(scheduler.pending_count(), 0);
    }
}
