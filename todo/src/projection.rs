//! View projection: what the presentation layer renders.
//!
//! A projection is a pure function of `(items, active_filter)`. Callers
//! re-project after every action.

use crate::types::{Filter, TodoItem, TodoState};
use serde::Serialize;

/// Derived view of a [`TodoState`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoView {
    /// Items passing the active filter, in list order
    pub visible_items: Vec<TodoItem>,
    /// Uncompleted items among `visible_items`
    ///
    /// Counted over the filtered list, not the whole list, so it is always
    /// zero under [`Filter::Completed`].
    pub remaining_count: usize,
    /// Filter the view was projected with
    pub active_filter: Filter,
}

impl TodoView {
    /// Footer text, e.g. `"3 Items Left"`
    #[must_use]
    pub fn items_left_label(&self) -> String {
        format!("{} Items Left", self.remaining_count)
    }
}

/// Project a state into the view shown to the user
#[must_use]
pub fn project(state: &TodoState) -> TodoView {
    let visible_items: Vec<TodoItem> = state
        .items
        .iter()
        .filter(|item| state.active_filter.matches(item))
        .cloned()
        .collect();
    let remaining_count = visible_items.iter().filter(|item| !item.completed).count();

    TodoView {
        visible_items,
        remaining_count,
        active_filter: state.active_filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_state(filter: Filter) -> TodoState {
        let mut state = TodoState::with_items(vec![
            TodoItem::new("1", "A"),
            TodoItem::new("2", "B"),
            TodoItem::new("3", "C"),
        ]);
        state.items[1].completed = true;
        state.active_filter = filter;
        state
    }

    fn ids(view: &TodoView) -> Vec<&str> {
        view.visible_items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn all_shows_everything_in_order() {
        let view = project(&mixed_state(Filter::All));
        assert_eq!(ids(&view), ["1", "2", "3"]);
        assert_eq!(view.remaining_count, 2);
        assert_eq!(view.items_left_label(), "2 Items Left");
    }

    #[test]
    fn active_hides_completed() {
        let view = project(&mixed_state(Filter::Active));
        assert_eq!(ids(&view), ["1", "3"]);
        assert_eq!(view.remaining_count, 2);
    }

    #[test]
    fn completed_shows_only_completed_and_counts_zero() {
        let view = project(&mixed_state(Filter::Completed));
        assert_eq!(ids(&view), ["2"]);
        assert_eq!(view.remaining_count, 0);
        assert_eq!(view.active_filter, Filter::Completed);
    }

    #[test]
    fn empty_state_projects_empty_view() {
        let view = project(&TodoState::new());
        assert!(view.visible_items.is_empty());
        assert_eq!(view.items_left_label(), "0 Items Left");
    }
}
