//! # Todoflow Core
//!
//! Core traits and types for the Todoflow architecture.
//!
//! This crate provides the fundamental abstractions for building small,
//! testable state machines with unidirectional data flow.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer, as a closed sum type
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Selector**: Pure derivation of a read model from a state snapshot
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Derived views are recomputed on demand, never incrementally maintained
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! impl Reducer for LampReducer {
//!     type State = LampState;
//!     type Action = LampAction;
//!     type Environment = LampEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut LampState,
//!         action: LampAction,
//!         env: &LampEnvironment,
//!     ) -> SmallVec<[Effect<LampAction>; 4]> {
//!         match action {
//!             LampAction::Toggle => state.on = !state.on,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all state-transition logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for state transitions
    ///
    /// A reducer is total over its action type: every action maps to a
    /// well-defined transition, and transitions that do not apply (e.g.
    /// an id with no matching entity) leave state unchanged rather than
    /// failing. Reducers never perform I/O; anything effectful is
    /// returned as an [`Effect`] description for the runtime to execute.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoState;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TodoState,
    ///         action: TodoAction,
    ///         env: &TodoEnvironment,
    ///     ) -> SmallVec<[Effect<TodoAction>; 4]> {
    ///         // Transition logic here
    ///         smallvec![Effect::None]
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Inspects the action and current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// Callers only ever observe fully-reduced states: the runtime
        /// holds exclusive access for the duration of the call and
        /// publishes the snapshot afterwards.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and carry the action feedback loop:
/// an effect may produce a follow-up action that is dispatched back
/// into the reducer.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime. A pure state machine returns [`Effect::None`] from every
    /// transition.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[allow(missing_docs)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Delayed action (for timeouts, retries)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// True if this effect performs no work
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Selector module - Pure derivations over state snapshots
///
/// Selectors are the query side of the architecture. While reducers
/// handle the write side (action → state transition), selectors derive
/// read models from a state snapshot: filtered subsets, aggregates,
/// display-ready views.
///
/// Selectors are:
///
/// - **Pure**: no side effects, no awareness of actions or reducers
/// - **Recomputed on demand**: evaluated against the current snapshot
///   on every read, never incrementally maintained
/// - **Parameterizable**: a selector value may carry query parameters
///   (e.g. the active filter mode)
pub mod selector {
    /// A pure derivation from a state snapshot to a read model
    ///
    /// # Example
    ///
    /// ```ignore
    /// struct VisibilitySelector { filter: FilterMode }
    ///
    /// impl Selector for VisibilitySelector {
    ///     type State = TodoState;
    ///     type Output = TodoSummary;
    ///
    ///     fn select(&self, state: &TodoState) -> TodoSummary {
    ///         // Derive filtered subset and counts
    ///     }
    /// }
    /// ```
    pub trait Selector {
        /// The state type this selector reads
        type State;

        /// The derived read model
        type Output;

        /// Derive the read model from a state snapshot
        ///
        /// Must be idempotent and side-effect-free: calling it any
        /// number of times against the same snapshot yields the same
        /// output and leaves the snapshot untouched.
        fn select(&self, state: &Self::State) -> Self::Output;
    }
}
