//! Reducer logic for the todo list.
//!
//! Every transition is total: actions that do not apply (unmatched id,
//! whitespace-only text on `Add`) leave state unchanged instead of
//! failing. The todo list is a pure state machine, so every transition
//! returns no effects.

use crate::actions::TodoAction;
use crate::types::{Todo, TodoState};
use todoflow_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Environment dependencies for the todo reducer
///
/// Empty: the todo list is a pure state machine. Ids come from the
/// state itself and no transition touches a clock, store, or network.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoEnvironment;

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { text } => {
                // Empty or whitespace-only text is a defined no-op,
                // not an error.
                if !text.trim().is_empty() {
                    let id = state.next_id();
                    state.todos.push(Todo::new(id, text));
                }
            },

            TodoAction::Delete { id } => {
                state.todos.retain(|t| t.id != id);
            },

            TodoAction::Edit { id, text } => {
                if let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) {
                    todo.text = text;
                }
            },

            TodoAction::Complete { id } => {
                if let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) {
                    todo.completed = !todo.completed;
                }
            },

            TodoAction::CompleteAll => {
                // Whole-list toggle keyed off "are they all done":
                // sets everything completed unless everything already
                // is, in which case it clears everything.
                let target = !state.all_complete();
                for todo in &mut state.todos {
                    todo.completed = target;
                }
            },

            TodoAction::ClearCompleted => {
                state.todos.retain(|t| !t.completed);
            },
        }

        // Pure state machine - no side effects
        smallvec![Effect::None]
    }
}
