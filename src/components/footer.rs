//! Footer Component
//!
//! Active-task counter, filter links and the clear-completed affordance.

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::models::Filter;
use crate::store::{use_app_store, AppStateStoreFields};

/// Filter tab order and labels
const FILTER_TABS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Active, "Active"),
    (Filter::Completed, "Completed"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let controller = use_controller();
    let store = use_app_store();

    let active_count = move || store.todos().read().iter().filter(|t| !t.completed).count();
    let any_completed = move || store.todos().read().iter().any(|t| t.completed);

    view! {
        <footer class="todoapp__footer">
            <span class="todo-count">{move || format!("{} items left", active_count())}</span>

            <nav class="filter">
                {FILTER_TABS
                    .iter()
                    .map(|(mode, label)| {
                        let mode = *mode;
                        let link_class = move || {
                            if controller.filter() == mode {
                                "filter__link selected"
                            } else {
                                "filter__link"
                            }
                        };
                        view! {
                            <a href="#/" class=link_class on:click=move |_| controller.set_filter(mode)>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                disabled=move || !any_completed()
            >
                "Clear completed"
            </button>
        </footer>
    }
}
