//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! is a whole-field write, so a render never observes a partial update.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Todo};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The owner's task collection, in remote store order
    pub todos: Vec<Todo>,
    /// Currently selected display filter
    pub filter: Filter,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole collection (initial load or delete rollback)
pub fn store_replace_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

/// Append a server-confirmed task to the end of the collection
pub fn store_append_todo(store: &AppStore, todo: Todo) {
    store.todos().write().push(todo);
}

/// Replace the task matching the candidate's id, position preserved
pub fn store_patch_todo(store: &AppStore, candidate: Todo) {
    patch_todo(&mut store.todos().write(), candidate);
}

/// Remove a task from the collection by id
pub fn store_remove_todo(store: &AppStore, id: u32) {
    remove_todo(&mut store.todos().write(), id);
}

/// In-place replacement by id. Returns false when the id is gone, which
/// happens when an update response lands after the task was deleted; the
/// stale response is dropped rather than resurrecting the task.
pub fn patch_todo(todos: &mut Vec<Todo>, candidate: Todo) -> bool {
    match todos.iter_mut().find(|t| t.id == candidate.id) {
        Some(slot) => {
            *slot = candidate;
            true
        }
        None => false,
    }
}

/// In-place removal by id
pub fn remove_todo(todos: &mut Vec<Todo>, id: u32) {
    todos.retain(|t| t.id != id);
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
    fn test_patch_todo_replaces_in_place() {
        let mut todos = vec![make_todo(1, false), make_todo(2, false), make_todo(3, false)];
        let candidate = make_todo(2, true);

        assert!(patch_todo(&mut todos, candidate.clone()));
        assert_eq!(todos[1], candidate);
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_patch_todo_ignores_missing_id() {
        let mut todos = vec![make_todo(1, false)];
        let before = todos.clone();

        assert!(!patch_todo(&mut todos, make_todo(9, true)));
        assert_eq!(todos, before);
    }

    #[test]
    fn test_remove_todo_then_snapshot_restore() {
        let mut todos = vec![make_todo(1, false), make_todo(5, true), make_todo(7, false)];
        let snapshot = todos.clone();

        remove_todo(&mut todos, 5);
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 7]);

        // delete request failed: the pre-delete snapshot comes back verbatim
        todos = snapshot.clone();
        assert_eq!(todos, snapshot);
    }

    #[test]
    fn test_remove_todo_unknown_id_is_noop() {
        let mut todos = vec![make_todo(1, false)];
        remove_todo(&mut todos, 42);
        assert_eq!(todos.len(), 1);
    }
}
