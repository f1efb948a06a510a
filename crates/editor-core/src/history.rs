use crate::snapshot::SceneSnapshot;

/// Upper bound on retained history entries.
pub const MAX_HISTORY: usize = 50;

/// One undoable state: the action that produced it plus the full scene
/// snapshot taken right after it.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub label: String,
    pub snapshot: SceneSnapshot,
}

/// Bounded linear undo/redo stack with branch-discard-on-record semantics.
///
/// `cursor` always indexes the currently active entry once any entry
/// exists. Undo and redo only move the cursor; `record` is the sole
/// mutation of the entry list.
#[derive(Debug, Default)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor < self.entries.len() - 1
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Append a new entry after the cursor, discarding any redo branch.
    /// At capacity the oldest entry is evicted; the cursor stays on the
    /// just-recorded entry either way.
    pub fn record(&mut self, label: impl Into<String>, snapshot: SceneSnapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(HistoryEntry {
            label: label.into(),
            snapshot,
        });
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// The entry one step back, without moving the cursor. Lets callers
    /// restore a snapshot first and commit the cursor move only once the
    /// restore has succeeded.
    pub fn peek_back(&self) -> Option<&HistoryEntry> {
        if self.entries.is_empty() || self.cursor == 0 {
            return None;
        }
        self.entries.get(self.cursor - 1)
    }

    /// The entry one step forward, without moving the cursor.
    pub fn peek_forward(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor + 1)
    }

    /// Move the cursor one step back and return the newly active entry.
    /// `None` when already at the oldest entry (a silent no-op for the
    /// caller). An empty stack is the caller's case to report.
    pub fn step_back(&mut self) -> Option<&HistoryEntry> {
        if self.entries.is_empty() || self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Move the cursor one step forward and return the newly active entry.
    /// `None` when already at the tail.
    pub fn step_forward(&mut self) -> Option<&HistoryEntry> {
        if self.entries.is_empty() || self.cursor >= self.entries.len() - 1 {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use shape_types::CameraState;

    use super::*;

    fn snap(marker: u64) -> SceneSnapshot {
        SceneSnapshot {
            camera: CameraState::default(),
            objects: Vec::new(),
            next_id: marker,
        }
    }

    #[test]
    fn record_advances_cursor_to_tail() {
        let mut h = HistoryStack::new();
        h.record("a", snap(1));
        h.record("b", snap(2));
        assert_eq!(h.len(), 2);
        assert_eq!(h.cursor(), 1);
        assert_eq!(h.current().unwrap().label, "b");
    }

    #[test]
    fn undo_then_record_discards_redo_branch() {
        let mut h = HistoryStack::new();
        h.record("a", snap(1));
        h.record("b", snap(2));
        h.record("c", snap(3));
        h.step_back();
        h.step_back();
        assert_eq!(h.cursor(), 0);

        h.record("d", snap(4));
        let labels: Vec<_> = h.labels().collect();
        assert_eq!(labels, vec!["a", "d"]);
        assert!(!h.can_redo());
    }

    #[test]
    fn step_back_at_oldest_is_a_no_op() {
        let mut h = HistoryStack::new();
        h.record("a", snap(1));
        assert!(h.step_back().is_none());
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn step_forward_at_tail_is_a_no_op() {
        let mut h = HistoryStack::new();
        h.record("a", snap(1));
        h.record("b", snap(2));
        assert!(h.step_forward().is_none());
        h.step_back();
        assert_eq!(h.step_forward().unwrap().label, "b");
    }

    #[test]
    fn peek_reads_neighbors_without_moving_the_cursor() {
        let mut h = HistoryStack::new();
        h.record("a", snap(1));
        h.record("b", snap(2));
        assert_eq!(h.peek_back().unwrap().label, "a");
        assert!(h.peek_forward().is_none());
        assert_eq!(h.cursor(), 1);

        h.step_back();
        assert!(h.peek_back().is_none());
        assert_eq!(h.peek_forward().unwrap().label, "b");
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn capacity_evicts_oldest_without_moving_the_active_entry() {
        let mut h = HistoryStack::new();
        for i in 0..(MAX_HISTORY as u64 + 7) {
            h.record(format!("op {i}"), snap(i));
        }
        assert_eq!(h.len(), MAX_HISTORY);
        assert_eq!(h.cursor(), MAX_HISTORY - 1);
        // The 7 oldest entries are gone
        assert_eq!(h.labels().next().unwrap(), "op 7");
        assert_eq!(
            h.current().unwrap().label,
            format!("op {}", MAX_HISTORY as u64 + 6)
        );
    }

    #[test]
    fn cursor_stays_in_bounds_under_mixed_traffic() {
        let mut h = HistoryStack::new();
        h.record("a", snap(1));
        for i in 0..200u64 {
            match i % 5 {
                0 | 1 => h.record(format!("r{i}"), snap(i)),
                2 | 3 => {
                    h.step_back();
                }
                _ => {
                    h.step_forward();
                }
            }
            assert!(h.cursor() < h.len());
            assert!(h.len() <= MAX_HISTORY);
        }
    }
}
