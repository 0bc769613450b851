//! In-memory, insertion-ordered event store.

use crate::event::TrackerEvent;
use crate::tracker::TrackerType;

/// Append-only list of classified events; `reset` is the only way to remove them.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<TrackerEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, event: TrackerEvent) {
        self.events.push(event);
    }

    pub fn reset(&mut self) {
        self.events.clear();
    }

    pub fn all(&self) -> &[TrackerEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of stored events per tracker, in [`TrackerType::ALL`] order.
    pub fn counts(&self) -> Vec<(TrackerType, usize)> {
        TrackerType::ALL
            .into_iter()
            .map(|t| (t, self.events.iter().filter(|e| e.tracker() == t).count()))
            .collect()
    }
}
