//! Error Notification Component
//!
//! The notice stays mounted and toggles a hidden class so the message can
//! fade out instead of unmounting.

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::models::Notice;

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let controller = use_controller();
    let notice = controller.notice();

    let class = move || {
        if notice.get() == Notice::None {
            "notification notification--danger hidden"
        } else {
            "notification notification--danger"
        }
    };

    view! {
        <div class=class>
            <button
                type="button"
                class="notification__dismiss"
                on:click=move |_| controller.dismiss_notice()
            >
                "×"
            </button>
            {move || notice.get().message()}
        </div>
    }
}
