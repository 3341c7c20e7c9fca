//! Toast Notification Component
//!
//! Transient notifications with a severity icon, a dismiss control and
//! auto-dismiss after a fixed delay.

use leptos::*;

use crate::state::global::{AppState, ToastItem, APP_NAME};

/// Toast notification host container
#[component]
pub fn Toasts() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || {
                state
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| view! { <ToastMessage toast=toast /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ToastMessage(toast: ToastItem) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let id = toast.id;

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             animate-slide-in",
            toast.severity.css_class()
        )>
            <span class="text-lg">{toast.severity.icon()}</span>
            <div class="flex-1">
                <strong class="block text-sm">{APP_NAME}</strong>
                <span class="text-sm">{toast.message.clone()}</span>
            </div>
            <button
                on:click=move |_| state.dismiss_toast(id)
                class="text-white/70 hover:text-white"
                aria-label="Fechar"
            >
                "×"
            </button>
        </div>
    }
}
