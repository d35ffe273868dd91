use std::{collections::VecDeque, num::NonZero};

/// A bounded history of snapshots with a movable cursor.
///
/// The cursor points at the current snapshot. Pushing after an undo discards
/// the redo branch; pushing at capacity drops the oldest snapshot.
#[derive(Debug, Clone)]
pub(crate) struct UndoRedoStack<T> {
    stack: VecDeque<T>,
    capacity: NonZero<usize>,
    cursor: usize,
}

impl<T> UndoRedoStack<T> {
    #[must_use]
    pub(crate) fn new(capacity: NonZero<usize>) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity,
            cursor: 0,
        }
    }

    /// Drops all history and makes `item` the only snapshot.
    pub(crate) fn reset_to(&mut self, item: T) {
        self.stack.clear();
        self.stack.push_back(item);
        self.cursor = 0;
    }

    pub(crate) fn push(&mut self, item: T) {
        self.stack.truncate(self.cursor + 1);
        if self.stack.len() == self.capacity.get() {
            self.stack.pop_front();
        }
        self.stack.push_back(item);
        self.cursor = self.stack.len() - 1;
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub(crate) fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.stack.get(self.cursor)
    }

    #[must_use]
    pub(crate) fn can_redo(&self) -> bool {
        self.cursor + 1 < self.stack.len()
    }

    pub(crate) fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.stack.get(self.cursor)
    }

    #[must_use]
    pub(crate) fn current(&self) -> Option<&T> {
        self.stack.get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::UndoRedoStack;

    fn stack(capacity: usize, items: &[i32]) -> UndoRedoStack<i32> {
        let mut history = UndoRedoStack::new(NonZero::new(capacity).unwrap());
        let (first, rest) = items.split_first().unwrap();
        history.reset_to(*first);
        for &item in rest {
            history.push(item);
        }
        history
    }

    #[test]
    fn undo_redo_roundtrip() {
        let mut history = stack(10, &[1, 2, 3]);

        assert_eq!(history.current(), Some(&3));
        assert_eq!(history.undo(), Some(&2));
        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), Some(&2));
        assert_eq!(history.redo(), Some(&3));
        assert_eq!(history.redo(), None);
        assert_eq!(history.current(), Some(&3));
    }

    #[test]
    fn push_after_undo_discards_redo_branch() {
        let mut history = stack(10, &[1, 2, 3]);

        assert_eq!(history.undo(), Some(&2));
        history.push(4);

        assert!(!history.can_redo());
        assert_eq!(history.undo(), Some(&2));
        assert_eq!(history.redo(), Some(&4));
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut history = stack(3, &[1, 2, 3, 4]);

        assert_eq!(history.current(), Some(&4));
        assert_eq!(history.undo(), Some(&3));
        assert_eq!(history.undo(), Some(&2));
        assert!(!history.can_undo());
    }

    #[test]
    fn reset_to_clears_both_directions() {
        let mut history = stack(5, &[1, 2, 3]);
        history.undo();

        history.reset_to(9);

        assert_eq!(history.current(), Some(&9));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn empty_history_has_no_current() {
        let mut history: UndoRedoStack<i32> = UndoRedoStack::new(NonZero::new(5).unwrap());

        assert_eq!(history.current(), None);
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
    }
}
