//! Linear undo/redo history.
//!
//! `past` is the forward log of visited states with the most recent last;
//! its top mirrors the machine's current state. `future` holds states that
//! were undone, most recently undone last, and is only meaningful until the
//! next fresh transition.

use serde::{Deserialize, Serialize};

/// Two-stack history over visited state names.
///
/// # Example
///
/// ```rust
/// use retrace::core::History;
///
/// let mut history = History::seeded("idle");
/// history.record("running");
///
/// assert_eq!(history.step_back(), Some("idle"));
/// assert_eq!(history.step_forward(), Some("running"));
/// assert_eq!(history.past(), ["idle", "running"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    past: Vec<String>,
    future: Vec<String>,
}

impl History {
    /// History of a freshly constructed machine: `past` holds only `initial`.
    pub fn seeded(initial: impl Into<String>) -> Self {
        Self {
            past: vec![initial.into()],
            future: Vec::new(),
        }
    }

    /// Append a freshly entered state and discard any pending redo path.
    pub fn record(&mut self, state: impl Into<String>) {
        self.past.push(state.into());
        self.future.clear();
    }

    /// Move one entry from `past` to `future`.
    ///
    /// Returns the new top of `past`, or `None` without mutating when `past`
    /// holds one entry or fewer.
    pub fn step_back(&mut self) -> Option<&str> {
        if self.past.len() <= 1 {
            return None;
        }
        let undone = self.past.pop()?;
        self.future.push(undone);
        self.past.last().map(String::as_str)
    }

    /// Move the most recently undone entry back onto `past`.
    ///
    /// Returns the restored state, or `None` when nothing was undone.
    pub fn step_forward(&mut self) -> Option<&str> {
        let redone = self.future.pop()?;
        self.past.push(redone);
        self.past.last().map(String::as_str)
    }

    /// Empty both stacks. `past` is not re-seeded.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Whether `past` holds an entry before the current one.
    pub fn can_step_back(&self) -> bool {
        self.past.len() > 1
    }

    /// Whether any undone entry is waiting to be re-applied.
    pub fn can_step_forward(&self) -> bool {
        !self.future.is_empty()
    }

    /// Visited states, oldest first.
    pub fn past(&self) -> &[String] {
        &self.past
    }

    /// Undone states, most recently undone last.
    pub fn future(&self) -> &[String] {
        &self.future
    }
}
