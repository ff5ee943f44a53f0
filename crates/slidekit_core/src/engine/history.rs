//! Linear undo/redo history store.
//!
//! # Responsibility
//! - Keep a truncatable sequence of document snapshots with a cursor.
//! - Bound the log so long sessions cannot grow memory without limit.
//!
//! # Invariants
//! - The store always holds at least one entry; the cursor always points
//!   at a valid entry.
//! - Recording while the cursor sits before the last entry discards the
//!   abandoned redo branch (strictly linear history).
//! - Snapshots cover `slides` and `current_slide_id` only; selection is
//!   deliberately excluded.

use crate::model::id::SlideId;
use crate::model::slide::Slide;

/// Oldest entries are dropped beyond this bound. Tuning knob, not a
/// correctness requirement.
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// One recorded document state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub slides: Vec<Slide>,
    pub current_slide_id: SlideId,
}

/// Truncatable snapshot log with a cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    /// Seeds the log with the freshly initialized document; undo stays
    /// unavailable until the first structural command is recorded.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Appends `next` as the new current entry, discarding any redo branch.
    pub fn record(&mut self, next: Snapshot) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(next);
        if self.entries.len() > MAX_HISTORY_ENTRIES {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Steps the cursor back and returns the now-current snapshot, or
    /// `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Steps the cursor forward and returns the now-current snapshot, or
    /// `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Drops everything and restarts from one entry (document load).
    pub fn reset(&mut self, initial: Snapshot) {
        self.entries = vec![initial];
        self.cursor = 0;
    }

    /// The snapshot the cursor currently points at.
    pub fn current(&self) -> &Snapshot {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        // The store is seeded at construction and never drains fully.
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{History, MAX_HISTORY_ENTRIES, Snapshot};
    use crate::model::slide::Slide;

    fn snapshot(name: &str) -> Snapshot {
        let slide = Slide::blank(name);
        Snapshot {
            current_slide_id: slide.id.clone(),
            slides: vec![slide],
        }
    }

    #[test]
    fn initial_store_has_one_entry_and_no_undo() {
        let history = History::new(snapshot("init"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_after_undo_discards_redo_branch() {
        let mut history = History::new(snapshot("a"));
        history.record(snapshot("b"));
        history.record(snapshot("c"));
        assert!(history.undo().is_some());
        assert!(history.can_redo());

        history.record(snapshot("d"));
        assert!(!history.can_redo());
        assert_eq!(history.len(), 3);
        assert!(history.redo().is_none());
    }

    #[test]
    fn undo_redo_round_trip_restores_snapshot() {
        let mut history = History::new(snapshot("a"));
        let second = snapshot("b");
        history.record(second.clone());

        let undone = history.undo().unwrap().clone();
        assert_ne!(undone, second);
        let redone = history.redo().unwrap().clone();
        assert_eq!(redone, second);
    }

    #[test]
    fn log_is_bounded_by_dropping_oldest_entries() {
        let mut history = History::new(snapshot("init"));
        for i in 0..(MAX_HISTORY_ENTRIES + 20) {
            history.record(snapshot(&format!("s{i}")));
        }
        assert_eq!(history.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(history.cursor(), MAX_HISTORY_ENTRIES - 1);
        assert!(history.can_undo());
    }
}
