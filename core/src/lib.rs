//! # Tidy Core
//!
//! Core traits and types for building state stores out of pure reducers.
//!
//! ## Core Concepts
//!
//! - **State**: An owned, cloneable value describing a feature
//! - **Action**: A named request to transform state
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Outcome)`
//! - **Environment**: Injected dependencies (id generation) via traits
//!
//! A reducer never performs I/O and never fails. Requests that cannot be
//! honoured (an unknown id, an index past the end of a list) leave state
//! untouched and report [`reducer::Outcome::Ignored`].
//!
//! ## Example
//!
//! ```
//! use tidy_core::action::Action;
//! use tidy_core::reducer::{apply, IgnoreReason, Outcome, Reducer};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Counter {
//!     count: u32,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! impl Action for CounterAction {
//!     fn name(&self) -> &'static str {
//!         match self {
//!             Self::Increment => "increment",
//!             Self::Decrement => "decrement",
//!         }
//!     }
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Counter, action: CounterAction, _env: &()) -> Outcome {
//!         match action {
//!             CounterAction::Increment => {
//!                 state.count += 1;
//!                 Outcome::Applied
//!             }
//!             CounterAction::Decrement => match state.count.checked_sub(1) {
//!                 Some(count) => {
//!                     state.count = count;
//!                     Outcome::Applied
//!                 }
//!                 None => Outcome::Ignored(IgnoreReason::NoChange),
//!             },
//!         }
//!     }
//! }
//!
//! let before = Counter { count: 0 };
//! let (after, outcome) = apply(&CounterReducer, &before, CounterAction::Increment, &());
//! assert_eq!(after.count, 1);
//! assert_eq!(before.count, 0);
//! assert!(outcome.is_applied());
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};

/// Action module - the unified input type for reducers
///
/// Actions represent all possible state transitions of a feature.
pub mod action {
    /// Behaviour shared by every action type
    ///
    /// The name is a stable, low-cardinality identifier used as a log field
    /// and as a metric label by the runtime.
    pub trait Action {
        /// Stable name of this action variant (e.g. `"add"`)
        fn name(&self) -> &'static str;
    }
}

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Outcome)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use serde::{Deserialize, Serialize};

    /// Why a reducer left state untouched
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum IgnoreReason {
        /// The action referenced an id that is not present
        UnknownId,
        /// The action referenced a position outside the collection
        IndexOutOfRange,
        /// The action was valid but would not change anything
        NoChange,
        /// No fresh id could be generated for a new entry
        IdUnavailable,
    }

    impl std::fmt::Display for IgnoreReason {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::UnknownId => write!(f, "unknown id"),
                Self::IndexOutOfRange => write!(f, "index out of range"),
                Self::NoChange => write!(f, "no change"),
                Self::IdUnavailable => write!(f, "id unavailable"),
            }
        }
    }

    /// Result of reducing a single action
    ///
    /// `Ignored` is not an error: state is guaranteed to be identical to the
    /// input. It exists so the runtime can report no-ops.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum Outcome {
        /// State was transformed
        Applied,
        /// State was left as-is
        Ignored(IgnoreReason),
    }

    impl Outcome {
        /// Returns `true` if the action changed state
        #[must_use]
        pub const fn is_applied(&self) -> bool {
            matches!(self, Self::Applied)
        }

        /// Returns the reason the action was ignored, if it was
        #[must_use]
        pub const fn ignore_reason(&self) -> Option<IgnoreReason> {
            match self {
                Self::Applied => None,
                Self::Ignored(reason) => Some(*reason),
            }
        }
    }

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into a state change
        ///
        /// Implementations must leave `state` exactly as they found it
        /// whenever they return [`Outcome::Ignored`].
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Outcome;
    }

    /// Apply an action to a state value, producing a new state value
    ///
    /// The input state is never mutated; the reducer runs against a clone.
    pub fn apply<R>(
        reducer: &R,
        state: &R::State,
        action: R::Action,
        env: &R::Environment,
    ) -> (R::State, Outcome)
    where
        R: Reducer,
        R::State: Clone,
    {
        let mut next = state.clone();
        let outcome = reducer.reduce(&mut next, action, env);
        (next, outcome)
    }
}

/// Environment module - Dependency injection traits
///
/// All sources of non-determinism are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use std::sync::atomic::{AtomicU64, Ordering};

    /// `IdGenerator` trait - abstracts identity generation for testability
    ///
    /// Every call must return an id never returned before by the same
    /// generator.
    pub trait IdGenerator: Send + Sync {
        /// Produce a fresh, unique id
        fn next_id(&self) -> String;
    }

    /// Random v4 UUID ids
    #[derive(Clone, Copy, Debug, Default)]
    pub struct UuidIdGenerator;

    impl IdGenerator for UuidIdGenerator {
        fn next_id(&self) -> String {
            uuid::Uuid::new_v4().to_string()
        }
    }

    /// Monotonic counter ids (`"1"`, `"2"`, ...)
    ///
    /// Deterministic, so two generators with the same starting point produce
    /// the same sequence.
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Creates a generator whose first id is `start`
        #[must_use]
        pub const fn starting_at(start: u64) -> Self {
            Self {
                next: AtomicU64::new(start),
            }
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::starting_at(1)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> String {
            self.next.fetch_add(1, Ordering::Relaxed).to_string()
        }
    }
}
