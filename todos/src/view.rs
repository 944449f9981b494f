//! View composition for the presentation boundary.
//!
//! This module defines the contract the rendering layer consumes: the
//! filtered listing, the footer label, and the two control states
//! (clear-completed gating, toggle-all checkbox). It is a thin pure
//! combination of the state snapshot and the filter selector output;
//! it never mutates state.

use crate::selectors::{self, TodoSummary};
use crate::types::{FilterMode, Todo, TodoState};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs for one render
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoView {
    /// Todos visible under the current filter, in list order
    pub visible: Vec<Todo>,
    /// The filter the view was composed with
    pub filter: FilterMode,
    /// Number of todos not yet completed, across the whole list
    pub active_count: usize,
    /// Number of completed todos, across the whole list
    pub completed_count: usize,
    /// Footer status text ("No items left" / "1 item left" / "n items left")
    pub items_left_label: String,
    /// Whether the "Clear completed" affordance is shown
    pub show_clear_completed: bool,
    /// Checked state of the toggle-all control
    pub toggle_all_checked: bool,
}

/// Compose the view for a snapshot and filter mode
#[must_use]
pub fn compose(state: &TodoState, filter: FilterMode) -> TodoView {
    let TodoSummary {
        visible,
        active_count,
        completed_count,
        all_complete,
    } = selectors::select(state, filter);

    TodoView {
        visible,
        filter,
        active_count,
        completed_count,
        items_left_label: items_left_label(active_count),
        show_clear_completed: completed_count > 0,
        toggle_all_checked: all_complete,
    }
}

/// Footer label for the active count
///
/// Zero active todos reads "No items left", never "0 items left"; one
/// reads singular; anything else plural.
fn items_left_label(active_count: usize) -> String {
    match active_count {
        0 => "No items left".to_string(),
        1 => "1 item left".to_string(),
        n => format!("{n} items left"),
    }
}
