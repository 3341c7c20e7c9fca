//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{GlobalLoading, Sidebar, Toasts};
use crate::pages::{Customers, Dashboard, Products, Sales};
use crate::state::global::provide_app_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex">
                // Sidebar navigation
                <Sidebar />

                // Main content area, one container per page
                <main class="flex-1 px-6 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/products" view=Products />
                        <Route path="/sales" view=Sales />
                        <Route path="/customers" view=Customers />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Loading overlay
                <GlobalLoading />

                // Toast notifications
                <Toasts />
            </div>
        </Router>
    }
}

/// View for unknown paths; prior navigation state is left untouched
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center w-full">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Página não encontrada"</h1>
            <p class="text-gray-400 mb-6">"A página que procura não existe."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Ir para o Dashboard"
            </A>
        </div>
    }
}
