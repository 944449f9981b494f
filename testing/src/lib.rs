//! # Todoflow Testing
//!
//! Testing utilities and helpers for the Todoflow architecture.
//!
//! This crate provides a fluent API for testing reducers with readable
//! Given-When-Then syntax, plus assertion helpers for effects.
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::default())
//!     .given_state(TodoState::default())
//!     .when_action(TodoAction::Add { text: "Buy milk".into() })
//!     .then_state(|state| {
//!         assert_eq!(state.len(), 1);
//!     })
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use todoflow_core::effect::Effect;
use todoflow_core::reducer::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// A test applies one action or a whole sequence of actions to the given
/// state, then runs assertions against the final state and against the
/// effects returned by the last action.
///
/// Because a reducer signals "did not apply" by leaving state unchanged
/// rather than by failing, [`ReducerTest::then_unchanged`] is provided to
/// assert that the whole run was a semantic no-op.
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    actions: Vec<A>,
    assert_unchanged: bool,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion<A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    S: Clone,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            actions: Vec::new(),
            assert_unchanged: false,
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Append one action to apply (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Append a sequence of actions to apply in order (When)
    #[must_use]
    pub fn when_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        self.actions.extend(actions);
        self
    }

    /// Add an assertion about the final state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Assert the run was a semantic no-op (Then)
    ///
    /// The final state must compare equal to the given state. This is
    /// the before/after comparison callers use to detect a transition
    /// that did not apply.
    #[must_use]
    pub fn then_unchanged(mut self) -> Self
    where
        S: PartialEq,
    {
        self.assert_unchanged = true;
        self
    }

    /// Add an assertion about the effects of the last action (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, environment, or at least one action is
    /// not set, or if any assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self)
    where
        S: PartialEq + std::fmt::Debug,
    {
        let initial = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        assert!(
            !self.actions.is_empty(),
            "At least one action must be set with when_action() or when_actions()"
        );

        let mut state = initial.clone();
        let mut last_effects = Vec::new();

        for action in self.actions {
            last_effects = self.reducer.reduce(&mut state, action, &env).into_vec();
        }

        if self.assert_unchanged {
            assert_eq!(
                state, initial,
                "Expected the run to leave state unchanged"
            );
        }

        for assertion in self.state_assertions {
            assertion(&state);
        }

        for assertion in self.effect_assertions {
            assertion(&last_effects);
        }
    }
}

/// Helper assertions for effects
pub mod assertions {
    use todoflow_core::effect::Effect;

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if effects contain anything other than [`Effect::None`].
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.is_empty() || matches!(effects, [Effect::None]),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }
}
