//! Reducer logic for the todo list.
//!
//! Every action is total: requests that reference a missing id or an
//! out-of-range position are reported as ignored and leave state untouched.
//! Nothing here can fail.

use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use std::sync::Arc;
use tidy_core::environment::{IdGenerator, UuidIdGenerator};
use tidy_core::reducer::{IgnoreReason, Outcome, Reducer};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of ids for new items
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl Default for TodoEnvironment {
    fn default() -> Self {
        Self::new(Arc::new(UuidIdGenerator))
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add(state: &mut TodoState, text: String, env: &TodoEnvironment) -> Outcome {
        // Empty text is accepted as-is.
        match Self::fresh_id(state, env) {
            Some(id) => {
                state.items.push(TodoItem::new(id, text));
                Outcome::Applied
            }
            None => Outcome::Ignored(IgnoreReason::IdUnavailable),
        }
    }

    /// Draws ids until one is not already in the list
    ///
    /// A generator that never repeats itself yields at most `len` taken ids,
    /// so `len + 1` draws always find a free one.
    fn fresh_id(state: &TodoState, env: &TodoEnvironment) -> Option<TodoId> {
        (0..=state.items.len())
            .map(|_| TodoId::from(env.ids.next_id()))
            .find(|id| state.get(id).is_none())
    }

    fn toggle(state: &mut TodoState, id: &TodoId) -> Outcome {
        match state.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.toggle();
                Outcome::Applied
            }
            None => Outcome::Ignored(IgnoreReason::UnknownId),
        }
    }

    fn delete(state: &mut TodoState, id: &TodoId) -> Outcome {
        match state.position(id) {
            Some(index) => {
                state.items.remove(index);
                Outcome::Applied
            }
            None => Outcome::Ignored(IgnoreReason::UnknownId),
        }
    }

    fn clear_completed(state: &mut TodoState) -> Outcome {
        let before = state.items.len();
        state.items.retain(|item| !item.completed);
        if state.items.len() == before {
            Outcome::Ignored(IgnoreReason::NoChange)
        } else {
            Outcome::Applied
        }
    }

    fn reorder(state: &mut TodoState, source_index: usize, target_index: usize) -> Outcome {
        let len = state.items.len();
        // After removal there are len - 1 items, so the last valid insert
        // position is len - 1, which is also the last valid source index.
        if source_index >= len || target_index >= len {
            return Outcome::Ignored(IgnoreReason::IndexOutOfRange);
        }

        let item = state.items.remove(source_index);
        state.items.insert(target_index, item);
        Outcome::Applied
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
        env: &Self::Environment,
    ) -> Outcome {
        match action {
            TodoAction::Add { text } => Self::add(state, text, env),
            TodoAction::Toggle { id } => Self::toggle(state, &id),
            TodoAction::Delete { id } => Self::delete(state, &id),
            TodoAction::ClearCompleted => Self::clear_completed(state),
            TodoAction::SetFilter { filter } => {
                if state.active_filter == filter {
                    return Outcome::Ignored(IgnoreReason::NoChange);
                }
                state.active_filter = filter;
                Outcome::Applied
            }
            TodoAction::Reorder {
                source_index,
                target_index,
            } => Self::reorder(state, source_index, target_index),
        }
    }
}
