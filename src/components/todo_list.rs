//! Todo List Component
//!
//! Renders the filtered collection.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::controller::use_controller;

#[component]
pub fn TodoList() -> impl IntoView {
    let controller = use_controller();

    view! {
        <section class="todoapp__main">
            // keyed on the completion flag as well, so a confirmed toggle
            // re-renders the row
            <For
                each=move || controller.visible()
                key=|todo| (todo.id, todo.completed)
                children=move |todo| view! { <TodoItem todo=todo/> }
            />
        </section>
    }
}
