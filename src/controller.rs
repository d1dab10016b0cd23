//! Application Controller
//!
//! Owns every user intent: the pending title, the four remote operations
//! and the display filter. Deletes apply optimistically with a snapshot
//! rollback; creates and status updates wait for server confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config;
use crate::models::{filter_todos, Filter, NewTodo, Notice, Todo};
use crate::notify::NoticeState;
use crate::store::{
    store_append_todo, store_patch_todo, store_remove_todo, store_replace_todos,
    AppStateStoreFields, AppStore,
};

/// Intent handle shared with the component tree via context
#[derive(Clone, Copy)]
pub struct TodoController {
    store: AppStore,
    notices: NoticeState,
    pending_title: RwSignal<String>,
}

/// Get the controller from context
pub fn use_controller() -> TodoController {
    expect_context::<TodoController>()
}

impl TodoController {
    pub fn new(store: AppStore, notices: NoticeState) -> Self {
        Self {
            store,
            notices,
            pending_title: RwSignal::new(String::new()),
        }
    }

    /// One-shot initial fetch. A failure leaves the collection empty; there
    /// is no automatic retry.
    pub fn load(self) {
        self.notices.clear();
        let user_id = config::user_id();
        web_sys::console::log_1(&format!("[APP] Loading todos for user {}", user_id).into());
        spawn_local(async move {
            match api::get_todos(user_id).await {
                Ok(todos) => store_replace_todos(&self.store, todos),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[API] load failed: {}", err).into());
                    self.notices.show(Notice::LoadFailed);
                }
            }
        });
    }

    /// Draft title for the new-task form.
    pub fn pending_title(&self) -> RwSignal<String> {
        self.pending_title
    }

    /// Stores the draft title, stripping leading whitespace as the user
    /// types. Trailing whitespace stays until submit.
    pub fn set_pending_title(&self, raw: String) {
        self.pending_title.set(raw.trim_start().to_string());
    }

    /// Submits the draft title as a new task. Pessimistic: nothing is added
    /// locally until the server confirms and assigns an id.
    pub fn submit_new(self) {
        self.notices.clear();
        let raw = self.pending_title.get_untracked();
        let Some(draft) = NewTodo::from_title(config::user_id(), &raw) else {
            self.notices.show(Notice::EmptyTitle);
            return;
        };
        spawn_local(async move {
            match api::add_todo(&draft).await {
                Ok(created) => store_append_todo(&self.store, created),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[API] add failed: {}", err).into());
                    self.notices.show(Notice::AddFailed);
                }
            }
            // attempted either way, the draft is spent
            self.pending_title.set(String::new());
        });
    }

    /// Flips a task's completion flag. Pessimistic: the collection changes
    /// only after the server confirms.
    pub fn toggle_status(self, todo: Todo) {
        self.notices.clear();
        let candidate = Todo {
            completed: !todo.completed,
            ..todo
        };
        spawn_local(async move {
            match api::update_todo_status(&candidate).await {
                // the id may be gone when a delete raced this update;
                // store_patch_todo drops the stale response in that case
                Ok(_) => store_patch_todo(&self.store, candidate),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[API] update failed: {}", err).into());
                    self.notices.show(Notice::UpdateFailed);
                }
            }
        });
    }

    /// Removes a task immediately and confirms with the server; a failed
    /// delete restores the pre-delete collection.
    pub fn delete(self, id: u32) {
        self.notices.clear();
        let snapshot = self.store.todos().get_untracked();
        store_remove_todo(&self.store, id);
        spawn_local(async move {
            if let Err(err) = api::delete_todo(id).await {
                web_sys::console::warn_1(&format!("[API] delete failed: {}", err).into());
                store_replace_todos(&self.store, snapshot);
                self.notices.show(Notice::DeleteFailed);
            }
        });
    }

    pub fn set_filter(&self, filter: Filter) {
        *self.store.filter().write() = filter;
    }

    pub fn filter(&self) -> Filter {
        *self.store.filter().read()
    }

    /// Display subset for the current filter; derived, never stored.
    pub fn visible(&self) -> Vec<Todo> {
        filter_todos(&self.store.todos().read(), self.filter())
    }

    pub fn notice(&self) -> ReadSignal<Notice> {
        self.notices.current()
    }

    pub fn dismiss_notice(&self) {
        self.notices.clear();
    }
}
