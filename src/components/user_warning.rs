//! User Warning Component
//!
//! Shown instead of the app when no owner id is configured at build time.

use leptos::prelude::*;

#[component]
pub fn UserWarning() -> impl IntoView {
    view! {
        <section class="user-warning">
            <h1>"No owner configured"</h1>
            <p>
                "Set the " <code>"TODO_USER_ID"</code>
                " environment variable when building to pick whose tasks to manage."
            </p>
        </section>
    }
}
