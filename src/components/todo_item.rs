//! Todo Item Component
//!
//! One task row: status checkbox, title, remove button.

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::models::Todo;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let controller = use_controller();
    let id = todo.id;
    let row_class = if todo.completed { "todo completed" } else { "todo" };

    let on_toggle = {
        let todo = todo.clone();
        move |_| controller.toggle_status(todo.clone())
    };

    view! {
        <div class=row_class>
            <label class="todo__status-label">
                <input
                    type="checkbox"
                    class="todo__status"
                    prop:checked=todo.completed
                    on:click=on_toggle
                />
            </label>

            <span class="todo__title">{todo.title.clone()}</span>

            <button type="button" class="todo__remove" on:click=move |_| controller.delete(id)>
                "×"
            </button>
        </div>
    }
}
