//! Header Component
//!
//! Decorative toggle-all indicator plus the new-task form.

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let controller = use_controller();
    let store = use_app_store();

    let all_completed = move || {
        let todos = store.todos().read();
        !todos.is_empty() && todos.iter().all(|t| t.completed)
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        controller.submit_new();
    };

    view! {
        <header class="todoapp__header">
            <button
                type="button"
                class=move || {
                    if all_completed() { "todoapp__toggle-all active" } else { "todoapp__toggle-all" }
                }
            ></button>

            <form on:submit=on_submit>
                <input
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    prop:value=move || controller.pending_title().get()
                    on:input=move |ev| controller.set_pending_title(event_target_value(&ev))
                />
            </form>
        </header>
    }
}
