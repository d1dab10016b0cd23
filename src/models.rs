//! Frontend Models
//!
//! Task data structures, the display filter and the notice taxonomy.

use serde::{Deserialize, Serialize};

/// Task data structure (matches the remote store wire format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

/// Creation payload: a task before the remote store has assigned its id
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl NewTodo {
    /// Builds a creation payload from raw input.
    ///
    /// Leading whitespace is stripped; trailing whitespace is kept as typed.
    /// Returns `None` when nothing remains; empty titles are never submitted.
    pub fn from_title(user_id: u32, raw: &str) -> Option<Self> {
        let title = raw.trim_start();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            user_id,
            title: title.to_string(),
            completed: false,
        })
    }
}

/// Which subset of the collection is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

/// Display subset for the current filter, relative order preserved
pub fn filter_todos(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    match filter {
        Filter::All => todos.to_vec(),
        Filter::Active => todos.iter().filter(|t| !t.completed).cloned().collect(),
        Filter::Completed => todos.iter().filter(|t| t.completed).cloned().collect(),
    }
}

/// One-slot status message shown after a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notice {
    #[default]
    None,
    LoadFailed,
    EmptyTitle,
    AddFailed,
    DeleteFailed,
    UpdateFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::None => "",
            Notice::LoadFailed => "Unable to load todos",
            Notice::EmptyTitle => "Title should not be empty",
            Notice::AddFailed => "Unable to add a todo",
            Notice::DeleteFailed => "Unable to delete a todo",
            Notice::UpdateFailed => "Unable to update a todo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 7,
            title: format!("Todo {}", id),
            completed,
        }
    }

    #[test]
    fn test_filter_all_keeps_order() {
        let todos = vec![make_todo(1, false), make_todo(2, true), make_todo(3, false)];
        assert_eq!(filter_todos(&todos, Filter::All), todos);
        assert!(filter_todos(&[], Filter::All).is_empty());
    }

    #[test]
    fn test_filter_partitions_collection() {
        let todos = vec![
            make_todo(1, false),
            make_todo(2, true),
            make_todo(3, false),
            make_todo(4, true),
        ];

        let active = filter_todos(&todos, Filter::Active);
        let completed = filter_todos(&todos, Filter::Completed);

        assert_eq!(active.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(completed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(active.len() + completed.len(), todos.len());
        assert!(active.iter().all(|t| !t.completed));
        assert!(completed.iter().all(|t| t.completed));
    }

    #[test]
    fn test_new_todo_rejects_blank_titles() {
        assert!(NewTodo::from_title(7, "").is_none());
        assert!(NewTodo::from_title(7, "   ").is_none());
    }

    #[test]
    fn test_new_todo_trims_leading_whitespace_only() {
        let draft = NewTodo::from_title(7, "  Buy milk").unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert!(!draft.completed);

        let trailing = NewTodo::from_title(7, "Buy milk  ").unwrap();
        assert_eq!(trailing.title, "Buy milk  ");
    }

    #[test]
    fn test_todo_wire_format_is_camel_case() {
        let json = r#"{"id":5,"userId":7,"title":"Call mom","completed":false}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 5);
        assert_eq!(todo.user_id, 7);

        let body = serde_json::to_string(&NewTodo::from_title(7, "Call mom").unwrap()).unwrap();
        assert!(body.contains(r#""userId":7"#));
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::EmptyTitle.message(), "Title should not be empty");
        assert_eq!(Notice::DeleteFailed.message(), "Unable to delete a todo");
        assert_eq!(Notice::None.message(), "");
    }
}
