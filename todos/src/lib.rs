//! Todo list state machine and derived views.
//!
//! This crate implements the todo engine on top of the Todoflow
//! architecture:
//!
//! - A small immutable-by-snapshot domain model (`{id, text, completed}`)
//! - A closed action sum type (intent records, no validation at
//!   construction)
//! - A total, pure reducer: malformed input is a defined no-op, never an
//!   error
//! - Selectors deriving the filtered subset and aggregate counts
//! - A view composer producing exactly what a presentation layer needs
//!
//! # Quick Start
//!
//! ```no_run
//! use todoflow_runtime::Store;
//! use todoflow_todos::{
//!     FilterMode, TodoAction, TodoEnvironment, TodoReducer, TodoState, compose,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(TodoState::new(), TodoReducer::new(), TodoEnvironment);
//!
//! store.send(TodoAction::Add { text: "Buy milk".to_string() }).await?;
//! store.send(TodoAction::CompleteAll).await?;
//!
//! let view = store.state(|s| compose(s, FilterMode::All)).await;
//! assert!(view.toggle_all_checked);
//! assert_eq!(view.items_left_label, "No items left");
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod reducer;
pub mod selectors;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use actions::TodoAction;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use selectors::{TodoSummary, VisibilitySelector, select};
pub use types::{FilterMode, ParseFilterModeError, Todo, TodoId, TodoState};
pub use view::{TodoView, compose};
