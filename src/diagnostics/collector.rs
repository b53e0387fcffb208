// SPDX-License-Identifier: MPL-2.0
//! Bounded collector for player actions.

use super::action_log::{ActionLog, BufferCapacity};
use super::events::{DiagnosticEvent, PlayerAction};

/// Keeps the most recent player actions, evicting the oldest.
#[derive(Debug, Clone)]
pub struct DiagnosticsCollector {
    log: ActionLog,
    next_sequence: u64,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            log: ActionLog::new(capacity),
            next_sequence: 1,
        }
    }

    /// Records an action.
    pub fn log_action(&mut self, action: PlayerAction) {
        let event = DiagnosticEvent::new(self.next_sequence, action);
        self.next_sequence += 1;
        self.log.record(event);
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.log.iter()
    }

    /// Recorded actions, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = &PlayerAction> {
        self.log.iter().map(|event| &event.action)
    }

    #[must_use]
    pub fn last_action(&self) -> Option<&PlayerAction> {
        self.log.latest().map(|event| &event.action)
    }

    /// Events logged after `sequence`.
    pub fn events_since(&self, sequence: u64) -> impl Iterator<Item = &DiagnosticEvent> {
        self.log.since(sequence)
    }

    /// Number of actions dropped to stay within capacity.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.log.evicted()
    }

    /// Total number of actions logged, including evicted ones.
    #[must_use]
    pub fn total_logged(&self) -> u64 {
        self.next_sequence - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_increase() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(PlayerAction::TogglePlayback);
        collector.log_action(PlayerAction::ToggleFullscreen);

        let sequences: Vec<u64> = collector.events().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);
        assert_eq!(collector.last_action(), Some(&PlayerAction::ToggleFullscreen));
    }

    #[test]
    fn oldest_actions_are_evicted_at_capacity() {
        let capacity = BufferCapacity::new(16);
        let mut collector = DiagnosticsCollector::new(capacity);
        for i in 0..20 {
            collector.log_action(PlayerAction::Seek {
                position_secs: f64::from(i),
            });
        }

        assert_eq!(collector.len(), 16);
        assert_eq!(collector.total_logged(), 20);
        assert_eq!(collector.evicted(), 4);
        assert_eq!(collector.events().next().map(|e| e.sequence), Some(5));
        assert_eq!(collector.events_since(18).count(), 2);
    }
}
