//! # Todoflow Runtime
//!
//! Runtime implementation for the Todoflow architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that owns the current state snapshot and
//!   applies actions one at a time, in submission order
//! - **Effect Executor**: Executes effect descriptions and feeds produced
//!   actions back into the reducer
//!
//! The store is the dispatch channel of the architecture: callers hand it
//! an action, the reducer runs exactly once for that action behind the
//! write lock, and readers only ever observe fully-reduced snapshots.
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use todoflow_core::effect::Effect;
use todoflow_core::reducer::Reducer;
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown
        /// initiated. Effect feedback arriving after shutdown is dropped
        /// silently.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// The Store runtime
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (transition logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (with feedback loop)
///
/// There is exactly one writer path (`send`, which holds the write lock
/// for the duration of one reducer call) and any number of readers
/// (`state`), which always observe a fully-formed snapshot.
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    shutdown: Arc<AtomicBool>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    A: Send + 'static,
    S: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Send an action through the store
    ///
    /// Acquires the write lock, runs the reducer exactly once for this
    /// action, publishes the new snapshot, then executes any returned
    /// effects. Actions sent from the same task are applied in
    /// submission order.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ShutdownInProgress`]: the store no longer accepts
    ///   actions because [`Store::shutdown`] was called.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<(), StoreError> {
        if self.shutdown.load(Ordering::SeqCst) {
            return Err(StoreError::ShutdownInProgress);
        }

        let effects = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action, &self.environment)
        };

        for effect in effects {
            self.execute_effect(effect);
        }

        Ok(())
    }

    /// Read a value derived from the current state snapshot
    ///
    /// The closure runs under the read lock, so it always sees a
    /// fully-reduced state.
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Stop accepting actions
    ///
    /// Subsequent `send` calls fail with [`StoreError::ShutdownInProgress`];
    /// in-flight effect feedback is dropped.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// Whether the store has been shut down
    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Execute one effect description
    ///
    /// `None` is a no-op. `Delay` and `Future` are spawned; any action
    /// they produce is fed back through `send` on a cloned store handle.
    fn execute_effect(&self, effect: Effect<A>) {
        match effect {
            Effect::None => {
                tracing::trace!("Executing Effect::None (no-op)");
            },
            Effect::Delay { duration, action } => {
                tracing::trace!("Executing Effect::Delay (duration: {:?})", duration);
                let store = self.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(duration).await;
                    if let Err(error) = store.send_boxed(*action).await {
                        tracing::trace!(%error, "Dropping delayed action");
                    }
                });
            },
            Effect::Future(fut) => {
                tracing::trace!("Executing Effect::Future");
                let store = self.clone();
                tokio::spawn(async move {
                    if let Some(action) = fut.await {
                        tracing::trace!("Effect::Future produced an action, sending to store");
                        if let Err(error) = store.send_boxed(action).await {
                            tracing::trace!(%error, "Dropping effect feedback");
                        }
                    }
                });
            },
        }
    }

    /// Boxed re-entry into `send` for effect feedback
    ///
    /// Boxing breaks the async type cycle send → spawn → send.
    fn send_boxed(self, action: A) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send>> {
        Box::pin(async move { self.send(action).await })
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            shutdown: Arc::clone(&self.shutdown),
        }
    }
}
