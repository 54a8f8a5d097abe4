//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use tidy_core::reducer::{Outcome, Reducer, apply};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for outcome assertion functions
type OutcomeAssertion = Box<dyn FnOnce(Outcome)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Each action in the When phase is applied in order through
/// [`tidy_core::reducer::apply`], and the test checks that the Given state
/// was never mutated along the way.
///
/// # Example
///
/// ```ignore
/// use tidy_testing::ReducerTest;
///
/// ReducerTest::new(TodoReducer::new())
///     .with_env(test_environment())
///     .given_state(state_with(["A"]))
///     .when_action(TodoAction::Delete { id: TodoId::from("missing") })
///     .then_state(|state| {
///         assert_eq!(state.items.len(), 1);
///     })
///     .then_outcome(assertions::assert_ignored)
///     .run();
/// ```
pub struct ReducerTest<R>
where
    R: Reducer,
{
    reducer: R,
    environment: Option<R::Environment>,
    initial_state: Option<R::State>,
    actions: Vec<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
    outcome_assertions: Vec<OutcomeAssertion>,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
    R::State: Clone + PartialEq + std::fmt::Debug,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
            outcome_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: R::Environment) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Add an action to apply (When)
    ///
    /// May be called more than once; actions run in the order given.
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the outcome of the last action (Then)
    #[must_use]
    pub fn then_outcome<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(Outcome) + 'static,
    {
        self.outcome_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set,
    /// if the Given state was mutated, or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let initial = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        assert!(
            !self.actions.is_empty(),
            "At least one action must be set with when_action()"
        );

        let mut state = initial;
        let mut outcome = Outcome::Applied;

        for action in self.actions {
            let before = state.clone();
            let (next, last) = apply(&self.reducer, &state, action, &env);
            assert_eq!(state, before, "apply() must not mutate its input state");
            if !last.is_applied() {
                assert_eq!(next, state, "Ignored action must leave state unchanged");
            }
            state = next;
            outcome = last;
        }

        // Run state assertions
        for assertion in self.state_assertions {
            assertion(&state);
        }

        // Run outcome assertions
        for assertion in self.outcome_assertions {
            assertion(outcome);
        }
    }
}

/// Helper assertions for outcomes
pub mod assertions {
    use tidy_core::reducer::{IgnoreReason, Outcome};

    /// Assert that the action was applied
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Ignored`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_applied(outcome: Outcome) {
        assert!(
            outcome.is_applied(),
            "Expected action to be applied, but it was ignored: {outcome:?}"
        );
    }

    /// Assert that the action was ignored, for any reason
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Applied`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_ignored(outcome: Outcome) {
        assert!(
            !outcome.is_applied(),
            "Expected action to be ignored, but it was applied"
        );
    }

    /// Build an assertion that the action was ignored for `reason`
    ///
    /// # Panics
    ///
    /// The returned closure panics if the outcome differs.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_ignored_because(reason: IgnoreReason) -> impl FnOnce(Outcome) {
        move |outcome| {
            assert_eq!(
                outcome,
                Outcome::Ignored(reason),
                "Expected action to be ignored because of {reason}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidy_core::reducer::IgnoreReason;

    #[derive(Clone, Debug, PartialEq)]
    struct TestState {
        count: u32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
    }

    struct TestReducer;

    struct TestEnv;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> Outcome {
            match action {
                TestAction::Increment => {
                    state.count += 1;
                    Outcome::Applied
                }
                TestAction::Decrement => match state.count.checked_sub(1) {
                    Some(count) => {
                        state.count = count;
                        Outcome::Applied
                    }
                    None => Outcome::Ignored(IgnoreReason::NoChange),
                },
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_outcome(assertions::assert_applied)
            .run();
    }

    #[test]
    fn test_reducer_test_action_sequence() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Decrement)
            .when_action(TestAction::Decrement)
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 4);
            })
            .run();
    }

    #[test]
    fn test_outcome_of_last_action_is_reported() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Decrement)
            .then_outcome(assertions::assert_ignored_because(IgnoreReason::NoChange))
            .then_outcome(assertions::assert_ignored)
            .run();
    }
}
