//! Sidebar Navigation
//!
//! Collapsible sidebar with one entry per page.

use leptos::*;
use leptos_router::*;

use crate::state::global::{AppState, Page, APP_NAME};

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let collapsed = state.sidebar_collapsed;

    view! {
        <aside class=move || {
            let base = "bg-gray-800 border-r border-gray-700 min-h-screen flex flex-col \
                        transition-all";
            if collapsed.get() {
                format!("{} w-16", base)
            } else {
                format!("{} w-56", base)
            }
        }>
            // Brand and collapse toggle
            <div class="flex items-center justify-between h-16 px-4 border-b border-gray-700">
                {move || {
                    if collapsed.get() {
                        view! {}.into_view()
                    } else {
                        view! {
                            <span class="text-xl font-bold text-white">{APP_NAME}</span>
                        }
                        .into_view()
                    }
                }}
                <button
                    on:click=move |_| state.toggle_sidebar()
                    class="text-gray-400 hover:text-white"
                    aria-label="Alternar menu"
                >
                    "☰"
                </button>
            </div>

            // Navigation entries
            <nav class="flex-1 py-4 space-y-1">
                {Page::ALL
                    .into_iter()
                    .map(|page| view! { <SidebarLink page=page /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Individual sidebar entry
#[component]
fn SidebarLink(page: Page) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let collapsed = state.sidebar_collapsed;

    view! {
        <A
            href=page.path()
            exact=true
            class="flex items-center space-x-3 px-4 py-2 mx-2 rounded-lg text-gray-300
                   hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            <span class="text-lg">{page.icon()}</span>
            {move || {
                if collapsed.get() {
                    view! {}.into_view()
                } else {
                    view! { <span>{page.title()}</span> }.into_view()
                }
            }}
        </A>
    }
}
