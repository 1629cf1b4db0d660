//! Linear undo/redo over whole-value snapshots.
//!
//! DESIGN
//! ======
//! `History` keeps `past`, `present`, and `future` copies of a value. Every
//! commit is gated on structural equality with `present`, so writing back an
//! unchanged value never creates an undo step. Committing clears `future`:
//! history is a line, not a tree.
//!
//! Equality is `PartialEq`. A value that is not equal to itself (a `NaN`
//! coordinate, say) simply commits; that costs a spurious undo step and
//! never a failure.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

/// Past/present/future container.
#[derive(Debug, Clone)]
pub struct History<T> {
    past: Vec<T>,
    present: T,
    future: VecDeque<T>,
    limit: Option<usize>,
}

impl<T: Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> History<T> {
    /// Start a history with `initial` as the present and nothing to undo.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self { past: Vec::new(), present: initial, future: VecDeque::new(), limit: None }
    }

    /// Cap the number of undo steps retained. Oldest steps are dropped first.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self.enforce_limit();
        self
    }

    /// The current value.
    #[must_use]
    pub fn present(&self) -> &T {
        &self.present
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    /// Number of redo steps available.
    #[must_use]
    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Step back one commit. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Step forward one undone commit. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    /// Replace `present` and forget all history. The new value cannot be
    /// undone back to whatever preceded it.
    pub fn reset(&mut self, value: T) {
        self.past.clear();
        self.future.clear();
        self.present = value;
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let excess = self.past.len() - limit;
                self.past.drain(..excess);
            }
        }
    }
}

impl<T: PartialEq> History<T> {
    /// Commit `next` as the new present.
    ///
    /// No-op (returns `false`) when `next == present`. Otherwise the old
    /// present moves onto `past` and `future` is cleared.
    pub fn set_state(&mut self, next: T) -> bool {
        if next == self.present {
            return false;
        }
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(previous);
        self.future.clear();
        self.enforce_limit();
        true
    }

    /// Commit the value produced by `f` from the current present.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.present);
        self.set_state(next)
    }
}
