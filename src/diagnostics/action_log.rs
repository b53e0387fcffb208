// SPDX-License-Identifier: MPL-2.0
//! Bounded log of recorded player actions.
//!
//! A long viewing session can issue thousands of seeks and volume changes.
//! Only the most recent [`BufferCapacity`] entries are kept; older ones are
//! dropped and counted so a report can say how much history is missing.

use super::events::DiagnosticEvent;
use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// Recent [`DiagnosticEvent`]s in sequence order, oldest first.
///
/// # Example
///
/// ```
/// use codecast::diagnostics::{ActionLog, BufferCapacity, DiagnosticEvent, PlayerAction};
///
/// let mut log = ActionLog::new(BufferCapacity::new(16));
/// for sequence in 1..=20 {
///     log.record(DiagnosticEvent::new(sequence, PlayerAction::TogglePlayback));
/// }
///
/// assert_eq!(log.len(), 16);
/// assert_eq!(log.evicted(), 4);
/// assert_eq!(log.since(18).count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ActionLog {
    entries: VecDeque<DiagnosticEvent>,
    capacity: BufferCapacity,
    evicted: u64,
}

impl ActionLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.value()),
            capacity,
            evicted: 0,
        }
    }

    /// Appends an event, dropping the oldest one when the log is full.
    pub fn record(&mut self, event: DiagnosticEvent) {
        if self.entries.len() >= self.capacity.value() && self.entries.pop_front().is_some() {
            self.evicted += 1;
        }
        self.entries.push_back(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.entries.iter()
    }

    /// Events recorded after `sequence`, for incremental readers.
    pub fn since(&self, sequence: u64) -> impl Iterator<Item = &DiagnosticEvent> {
        self.entries.iter().filter(move |event| event.sequence > sequence)
    }

    #[must_use]
    pub fn latest(&self) -> Option<&DiagnosticEvent> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        self.capacity
    }

    /// Number of events dropped to stay within capacity.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::PlayerAction;

    fn seek(sequence: u64) -> DiagnosticEvent {
        DiagnosticEvent::new(
            sequence,
            PlayerAction::Seek {
                position_secs: sequence as f64,
            },
        )
    }

    #[test]
    fn empty_log_has_no_latest() {
        let log = ActionLog::new(BufferCapacity::default());
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        assert_eq!(log.capacity(), BufferCapacity::default());
    }

    #[test]
    fn full_log_drops_oldest_and_counts_it() {
        let mut log = ActionLog::new(BufferCapacity::new(16));
        for sequence in 1..=40 {
            log.record(seek(sequence));
        }

        assert_eq!(log.len(), 16);
        assert_eq!(log.evicted(), 24);
        assert_eq!(log.iter().next().map(|e| e.sequence), Some(25));
        assert_eq!(log.latest().map(|e| e.sequence), Some(40));
    }

    #[test]
    fn since_skips_already_read_events() {
        let mut log = ActionLog::new(BufferCapacity::new(16));
        for sequence in 1..=5 {
            log.record(seek(sequence));
        }

        let unread: Vec<u64> = log.since(3).map(|e| e.sequence).collect();
        assert_eq!(unread, vec![4, 5]);
        assert_eq!(log.since(5).count(), 0);
    }

    #[test]
    fn capacity_below_minimum_is_clamped() {
        let mut log = ActionLog::new(BufferCapacity::new(1));
        for sequence in 1..=20 {
            log.record(seek(sequence));
        }
        assert_eq!(log.len(), 16);
    }
}
