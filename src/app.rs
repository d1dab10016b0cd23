//! Application Root
//!
//! Wires the store, notice state and controller into context and lays out
//! the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ErrorNotification, Footer, Header, TodoList, UserWarning};
use crate::config;
use crate::controller::TodoController;
use crate::notify::NoticeState;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let notices = NoticeState::new();
    let controller = TodoController::new(store, notices);
    provide_context(controller);

    // One-shot fetch at session start; a failure leaves the list empty.
    if config::user_id() != 0 {
        Effect::new(move |_| controller.load());
    }

    view! {
        <Show when=|| config::user_id() != 0 fallback=|| view! { <UserWarning/> }>
            <div class="todoapp">
                <h1 class="todoapp__title">"todos"</h1>

                <div class="todoapp__content">
                    <Header/>
                    <TodoList/>
                    <Show when=move || !store.todos().read().is_empty()>
                        <Footer/>
                    </Show>
                </div>

                <ErrorNotification/>
            </div>
        </Show>
    }
}
