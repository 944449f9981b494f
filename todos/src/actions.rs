//! Actions for the todo list state machine.
//!
//! Each action is an immutable intent record: a tag plus the minimal
//! payload the reducer needs to apply it. The source-model pattern of
//! duck-typed `{type, ...payload}` records becomes a closed sum type
//! here, so a malformed or unknown action is unrepresentable — each
//! variant carries exactly its required fields, enforced at
//! construction.
//!
//! Constructors perform no validation: an `Add` with empty text is a
//! legal action, and the reducer owns the no-op policy for it.

use crate::types::TodoId;
use serde::{Deserialize, Serialize};

/// Intents that can be dispatched to the todo reducer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Create a new todo with the given text
    ///
    /// Whitespace-only text makes this a no-op transition.
    Add {
        /// Text content for the new todo
        text: String,
    },

    /// Remove the todo with the given id
    Delete {
        /// Todo to delete
        id: TodoId,
    },

    /// Replace the text of the todo with the given id
    Edit {
        /// Todo to edit
        id: TodoId,
        /// Replacement text
        text: String,
    },

    /// Toggle the completed flag of the todo with the given id
    Complete {
        /// Todo to toggle
        id: TodoId,
    },

    /// Toggle the whole list: set every todo completed, unless all
    /// already are, in which case set every todo active
    CompleteAll,

    /// Remove every completed todo
    ClearCompleted,
}
