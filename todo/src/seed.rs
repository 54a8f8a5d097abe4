//! Seed data supplied when a session starts.

use crate::types::{TodoId, TodoItem};
use std::collections::HashSet;

/// Errors loading seed data
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed document is not a JSON array of items
    #[error("invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two seed items share an id
    #[error("duplicate todo id in seed data: {0}")]
    DuplicateId(TodoId),
}

/// The six sample items of the Frontend Mentor todo app, none completed
#[must_use]
pub fn frontend_mentor() -> Vec<TodoItem> {
    [
        "complete online JavaScript course",
        "jog around the park 3x",
        "10 minutes meditation",
        "Read for 1 hour",
        "pick up groceries",
        "complete todo app for frontend mentors",
    ]
    .into_iter()
    .zip(1..)
    .map(|(text, id)| TodoItem::new(id.to_string(), text))
    .collect()
}

/// A short four-item list
#[must_use]
pub fn starter() -> Vec<TodoItem> {
    frontend_mentor().into_iter().take(4).collect()
}

/// Parse seed items from a JSON array of `{ "id", "text", "completed" }`
///
/// `completed` may be omitted and defaults to `false`.
pub fn from_json(json: &str) -> Result<Vec<TodoItem>, SeedError> {
    let items: Vec<TodoItem> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(&item.id) {
            return Err(SeedError::DuplicateId(item.id.clone()));
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontend_mentor_has_six_uncompleted_items() {
        let items = frontend_mentor();
        assert_eq!(items.len(), 6);
        assert!(items.iter().all(|item| !item.completed));
        assert_eq!(items[0].id, TodoId::from("1"));
        assert_eq!(items[5].id, TodoId::from("6"));
    }

    #[test]
    fn starter_has_four_items() {
        assert_eq!(starter().len(), 4);
    }

    #[test]
    fn from_json_parses_items() {
        let items = from_json(
            r#"[{"id":"a","text":"A","completed":true},{"id":"b","text":"B"}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].completed);
        assert!(!items[1].completed);
    }

    #[test]
    fn from_json_rejects_duplicate_ids() {
        let err = from_json(r#"[{"id":"a","text":"A"},{"id":"a","text":"B"}]"#).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateId(id) if id.as_str() == "a"));
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        assert!(matches!(from_json("{}"), Err(SeedError::Json(_))));
    }
}
