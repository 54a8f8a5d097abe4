//! Todo list state store.
//!
//! The core of a todo-list widget: an ordered list of items, a filter, a pure
//! reducer over the two and a projection that derives what is on screen.
//! Rendering, styling and theme switching belong to the presentation layer,
//! which sends actions on user gestures and re-projects after each one.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use tidy_core::environment::SequentialIdGenerator;
//! use tidy_runtime::Store;
//! use todo::{project, Filter, TodoAction, TodoEnvironment, TodoItem, TodoReducer, TodoState};
//!
//! let env = TodoEnvironment::new(Arc::new(SequentialIdGenerator::starting_at(2)));
//! let seed = vec![TodoItem::new("1", "A")];
//! let mut store = Store::new(TodoState::with_items(seed), TodoReducer::new(), env);
//!
//! store.send(TodoAction::Add { text: "B".to_string() });
//! store.send(TodoAction::Toggle { id: "1".into() });
//! store.send(TodoAction::SetFilter { filter: Filter::Active });
//!
//! let view = store.state(project);
//! assert_eq!(view.visible_items.len(), 1);
//! assert_eq!(view.visible_items[0].text, "B");
//! assert_eq!(view.remaining_count, 1);
//! ```

pub mod config;
pub mod projection;
pub mod reducer;
pub mod seed;
pub mod types;

// Re-export commonly used types
pub use config::{ConfigError, TodoConfig};
pub use projection::{TodoView, project};
pub use reducer::{TodoEnvironment, TodoReducer};
pub use seed::SeedError;
pub use types::{Filter, ParseFilterError, TodoAction, TodoId, TodoItem, TodoState};
