//! Derived views over the todo list.
//!
//! Selectors are the query side of the engine: pure derivations over a
//! state snapshot, recomputed on every read. They know nothing about
//! actions or the reducer.

use crate::types::{FilterMode, Todo, TodoState};
use serde::{Deserialize, Serialize};
use todoflow_core::selector::Selector;

/// The filtered subset and aggregate counts for one snapshot
///
/// `active_count + completed_count` always equals the snapshot's total
/// length, whatever the filter: the counts describe the whole list,
/// only `visible` is filtered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoSummary {
    /// The todos visible under the filter, input order preserved
    pub visible: Vec<Todo>,
    /// Number of todos not yet completed, across the whole list
    pub active_count: usize,
    /// Number of completed todos, across the whole list
    pub completed_count: usize,
    /// True iff the list is non-empty and everything is completed
    pub all_complete: bool,
}

/// Selector computing the [`TodoSummary`] for a filter mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilitySelector {
    /// The filter to apply to the visible subset
    pub filter: FilterMode,
}

impl VisibilitySelector {
    /// Creates a selector for the given filter mode
    #[must_use]
    pub const fn new(filter: FilterMode) -> Self {
        Self { filter }
    }
}

impl Selector for VisibilitySelector {
    type State = TodoState;
    type Output = TodoSummary;

    fn select(&self, state: &TodoState) -> TodoSummary {
        let visible = state
            .todos
            .iter()
            .filter(|t| match self.filter {
                FilterMode::All => true,
                FilterMode::Active => !t.completed,
                FilterMode::Completed => t.completed,
            })
            .cloned()
            .collect();

        TodoSummary {
            visible,
            active_count: state.active_count(),
            completed_count: state.completed_count(),
            all_complete: state.all_complete(),
        }
    }
}

/// Derive the [`TodoSummary`] for a snapshot and filter mode
///
/// Convenience wrapper over [`VisibilitySelector`] for callers that
/// don't want to hold a selector value.
#[must_use]
pub fn select(state: &TodoState, filter: FilterMode) -> TodoSummary {
    VisibilitySelector::new(filter).select(state)
}
