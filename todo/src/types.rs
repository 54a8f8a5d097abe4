//! Domain types for the todo list.
//!
//! A todo list is an ordered sequence of items plus the filter that decides
//! which of them are shown. Order is meaningful: it is both the display order
//! and the order drag-and-drop reordering works on.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tidy_core::action::Action;

/// Unique identifier for a todo item
///
/// Opaque string. Unique within a list for the list's lifetime and never
/// reused after deletion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Creates a `TodoId` from any string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Free-form description; may be empty
    pub text: String,
    /// Whether the todo is completed
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, uncompleted todo item
    #[must_use]
    pub fn new(id: impl Into<TodoId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completed flag
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Which items are visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl Filter {
    /// All filters in display order
    pub const ALL_FILTERS: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Returns `true` if an item passes this filter
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    /// Parse a filter name, treating anything unrecognised as [`Filter::All`]
    #[must_use]
    pub fn parse_or_all(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing a [`Filter`] from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter {0:?}, expected one of: all, active, completed")]
pub struct ParseFilterError(pub String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

/// State of the todo list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Items in display order
    pub items: Vec<TodoItem>,
    /// Filter currently applied to the view
    pub active_filter: Filter,
}

impl TodoState {
    /// Creates an empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            active_filter: Filter::All,
        }
    }

    /// Creates a state holding `items`, with filter `All`
    #[must_use]
    pub const fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            items,
            active_filter: Filter::All,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of completed todos across the whole list
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|t| &t.id == id)
    }

    /// Position of a todo in `items`
    #[must_use]
    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.items.iter().position(|t| &t.id == id)
    }
}

/// Requests to transform a [`TodoState`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new item with a freshly generated id
    Add {
        /// Text of the new item; empty text is accepted
        text: String,
    },

    /// Flip the completed flag of an item
    Toggle {
        /// Item to toggle
        id: TodoId,
    },

    /// Remove an item
    Delete {
        /// Item to remove
        id: TodoId,
    },

    /// Remove every completed item
    ClearCompleted,

    /// Replace the active filter
    SetFilter {
        /// New filter
        filter: Filter,
    },

    /// Move the item at `source_index` to `target_index`
    ///
    /// `target_index` is a position in the sequence after the item has been
    /// removed. Indices are taken as given; mapping a position in a filtered
    /// view back to a position in the full list is the caller's job.
    Reorder {
        /// Current position of the item
        source_index: usize,
        /// Position to reinsert at
        target_index: usize,
    },
}

impl Action for TodoAction {
    fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Toggle { .. } => "toggle",
            Self::Delete { .. } => "delete",
            Self::ClearCompleted => "clear_completed",
            Self::SetFilter { .. } => "set_filter",
            Self::Reorder { .. } => "reorder",
        }
    }
}
