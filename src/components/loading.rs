//! Loading Component
//!
//! Global loading overlay and inline spinners.

use leptos::*;

use crate::state::global::AppState;

/// Overlay shown while any background operation is in flight
#[component]
pub fn GlobalLoading() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        {move || {
            if state.loading.get() > 0 {
                view! {
                    <div class="fixed inset-0 bg-gray-900/50 flex items-center justify-center z-40">
                        <div class="loading-spinner w-8 h-8" />
                    </div>
                }
                .into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

/// Centered spinner for page sections
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}
