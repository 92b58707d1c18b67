//! Bounded undo history

use std::collections::VecDeque;

/// A bounded stack that evicts its oldest entry on overflow
///
/// The most recent entry is popped first. Evicted entries are gone for good.
#[derive(Debug, Clone)]
pub struct UndoStack<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> UndoStack<T> {
    /// Create an empty stack holding at most `capacity` entries (at least 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push an entry, returning the evicted oldest entry if the stack was full
    pub fn push(&mut self, entry: T) -> Option<T> {
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Pop the most recent entry
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    /// Most recent entry without removing it
    pub fn peek(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut stack = UndoStack::new(3);
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut stack = UndoStack::new(20);
        for i in 0..20 {
            assert_eq!(stack.push(i), None);
        }
        assert_eq!(stack.len(), 20);

        // The 21st push evicts the oldest
        assert_eq!(stack.push(20), Some(0));
        assert_eq!(stack.len(), 20);

        let drained: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(drained.len(), 20);
        assert!(!drained.contains(&0));
        assert_eq!(drained.first(), Some(&20));
        assert_eq!(drained.last(), Some(&1));
    }

    #[test]
    fn test_zero_capacity_is_one() {
        let mut stack = UndoStack::new(0);
        assert_eq!(stack.capacity(), 1);
        stack.push('a');
        assert_eq!(stack.push('b'), Some('a'));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut stack = UndoStack::new(4);
        stack.push(1);
        stack.clear();
        assert!(stack.is_empty());
    }
}
