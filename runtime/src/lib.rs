//! # Tidy Runtime
//!
//! Runtime implementation for Tidy reducers.
//!
//! The [`Store`] owns the current state value of a single view session and
//! routes every action through a reducer. It is synchronous and has exactly
//! one owner: each [`Store::send`] runs to completion before returning, so
//! there is nothing to lock and nothing to cancel.
//!
//! On every action the store replaces its state with the value produced by
//! [`tidy_core::reducer::apply`]; the previous value is never mutated.
//!
//! ## Example
//!
//! ```ignore
//! let mut store = Store::new(TodoState::with_items(seed), TodoReducer::new(), env);
//!
//! store.send(TodoAction::Add { text: "Buy milk".to_string() });
//! let total = store.state(|s| s.items.len());
//! ```

use tidy_core::action::Action;
use tidy_core::reducer::{Outcome, Reducer, apply};

/// Metric names recorded by the store
pub mod metric_names {
    /// Counter: actions that changed state, labelled by `action`
    pub const ACTIONS_APPLIED: &str = "store.actions.applied";
    /// Counter: actions that left state unchanged, labelled by `action` and `reason`
    pub const ACTIONS_IGNORED: &str = "store.actions.ignored";
    /// Histogram: time spent inside the reducer, in seconds
    pub const REDUCER_DURATION: &str = "store.reducer.duration_seconds";
}

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use tidy_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_warn_on_ignored(true);
/// assert!(config.warn_on_ignored);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Log ignored actions at `warn` instead of `debug`
    pub warn_on_ignored: bool,
}

impl StoreConfig {
    /// Set whether ignored actions are logged at `warn` level
    #[must_use]
    pub const fn with_warn_on_ignored(mut self, warn: bool) -> Self {
        self.warn_on_ignored = warn;
        self
    }
}

/// The Store - owns state and runs actions through a reducer
///
/// # Type Parameters
///
/// - `R`: Reducer implementation; state, action and environment types come
///   from its associated types
pub struct Store<R>
where
    R: Reducer,
{
    state: R::State,
    reducer: R,
    environment: R::Environment,
    config: StoreConfig,
    revision: u64,
}

impl<R> Store<R>
where
    R: Reducer,
    R::State: Clone,
    R::Action: Action + std::fmt::Debug,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R, environment: R::Environment) -> Self {
        Self::with_config(initial_state, reducer, environment, StoreConfig::default())
    }

    /// Create a new store with custom configuration
    #[must_use]
    pub const fn with_config(
        initial_state: R::State,
        reducer: R,
        environment: R::Environment,
        config: StoreConfig,
    ) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
            config,
            revision: 0,
        }
    }

    /// Send an action to the store
    ///
    /// Runs the reducer against a copy of the current state and replaces the
    /// state with the result. Ignored actions still replace the state value,
    /// but the replacement is equal to what was there before and the
    /// revision does not advance.
    #[tracing::instrument(skip(self, action), name = "store_send", fields(action = action.name()))]
    pub fn send(&mut self, action: R::Action) -> Outcome {
        let name = action.name();
        tracing::trace!(?action, "Reducing action");

        let started = std::time::Instant::now();
        let (next, outcome) = apply(&self.reducer, &self.state, action, &self.environment);
        metrics::histogram!(metric_names::REDUCER_DURATION, "action" => name)
            .record(started.elapsed().as_secs_f64());

        self.state = next;

        match outcome {
            Outcome::Applied => {
                self.revision += 1;
                metrics::counter!(metric_names::ACTIONS_APPLIED, "action" => name).increment(1);
                tracing::debug!(revision = self.revision, "Action applied");
            }
            Outcome::Ignored(reason) => {
                metrics::counter!(
                    metric_names::ACTIONS_IGNORED,
                    "action" => name,
                    "reason" => reason.to_string()
                )
                .increment(1);
                if self.config.warn_on_ignored {
                    tracing::warn!(%reason, "Action ignored");
                } else {
                    tracing::debug!(%reason, "Action ignored");
                }
            }
        }

        outcome
    }

    /// Read current state via a closure
    ///
    /// ```ignore
    /// let visible = store.state(|s| project(s).visible_items);
    /// ```
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        f(&self.state)
    }

    /// Number of actions that have changed state since the store was created
    ///
    /// A presentation layer can compare revisions to decide whether to
    /// re-project and re-render.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Reference to the injected environment
    #[must_use]
    pub const fn environment(&self) -> &R::Environment {
        &self.environment
    }

    /// Consume the store, returning the final state
    #[must_use]
    pub fn into_state(self) -> R::State {
        self.state
    }
}
