//! Domain types for the todo list state machine.
//!
//! The data model is deliberately small: a todo is `{id, text, completed}`
//! and the state is an insertion-ordered sequence of todos. Ids are
//! assigned by the reducer from the current state (one past the maximum
//! id in the list), so they stay unique and monotonically increasing for
//! as long as any todo survives.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for a todo item
///
/// Ids are assigned at creation and never change. An empty list assigns
/// id 0; a non-empty list assigns one past its current maximum, so a
/// deleted todo's id is only ever reused after the whole list has been
/// emptied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, immutable after creation
    pub id: TodoId,
    /// Text content; never empty after creation
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not-yet-completed todo
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// State of the todo list
///
/// An insertion-ordered sequence: new todos are appended at the tail,
/// edits and toggles never reorder, and deletion removes without
/// reordering the survivors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos, in insertion order
    pub todos: Vec<Todo>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if there are no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks if a todo with this id exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of todos not yet completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// True iff the list is non-empty and every todo is completed
    ///
    /// An empty list is NOT all-complete: the toggle-all control stays
    /// unchecked when there are zero todos.
    #[must_use]
    pub fn all_complete(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|t| t.completed)
    }

    /// The id the next created todo will receive
    ///
    /// One past the maximum id currently in the list; 0 for an empty
    /// list. Deleting the highest-id todo therefore makes its id
    /// available again, but ids within the list are always distinct.
    #[must_use]
    pub fn next_id(&self) -> TodoId {
        TodoId::new(
            self.todos
                .iter()
                .map(|t| t.id.value())
                .max()
                .map_or(0, |max| max + 1),
        )
    }
}

/// Which subset of todos is visible
///
/// Pure display state: it selects a view over the todo list and is not
/// persisted with the todos.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterMode {
    /// Show every todo
    #[default]
    All,
    /// Show only todos not yet completed
    Active,
    /// Show only completed todos
    Completed,
}

impl FilterMode {
    /// All filter modes, in the order the footer presents them
    pub const MODES: [Self; 3] = [Self::All, Self::Active, Self::Completed];
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Active => write!(f, "Active"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Error returned when parsing a [`FilterMode`] from a string fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter mode: {0:?} (expected all, active, or completed)")]
pub struct ParseFilterModeError(pub String);

impl FromStr for FilterMode {
    type Err = ParseFilterModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseFilterModeError(s.to_string())),
        }
    }
}
