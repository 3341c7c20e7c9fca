//! Dashboard Page
//!
//! Charts overview: monthly sales trend and top products by revenue.

use leptos::*;

use crate::components::chart::{load_dashboard_charts, ProductsChart, SalesChart};
use crate::components::form::LoadingGuard;
use crate::components::loading::Loading;
use crate::state::global::{AppState, ChartSlot, Page};
use crate::util::format_datetime;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    state.enter_page(Page::Dashboard);

    let (last_updated, set_last_updated) = create_signal(None::<chrono::NaiveDateTime>);

    // Load charts on mount and again whenever a refresh is requested
    let state_for_effect = state.clone();
    create_effect(move |_| {
        state_for_effect.refresh_tick.get();

        let state = state_for_effect.clone();
        let guard = LoadingGuard::begin(state.loading);
        spawn_local(async move {
            let _guard = guard;
            load_dashboard_charts(state).await;
            set_last_updated.set(Some(chrono::Local::now().naive_local()));
        });
    });

    let state_for_sales = state.clone();
    let state_for_products = state;

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Vendas e produtos em destaque"</p>
                </div>

                <div class="text-sm text-gray-400">
                    {move || {
                        last_updated
                            .get()
                            .map(|ts| format!("Atualizado em {}", format_datetime(ts)))
                    }}
                </div>
            </div>

            <div class="grid lg:grid-cols-2 gap-8">
                // Monthly sales
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Vendas (€)"</h2>
                    {move || {
                        let ready = state_for_sales
                            .charts
                            .with(|charts| charts.contains_key(&ChartSlot::Sales));
                        if ready {
                            view! { <SalesChart /> }.into_view()
                        } else {
                            view! { <Loading /> }.into_view()
                        }
                    }}
                </section>

                // Top products by revenue
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Produtos mais vendidos"</h2>
                    {move || {
                        let ready = state_for_products
                            .charts
                            .with(|charts| charts.contains_key(&ChartSlot::Products));
                        if ready {
                            view! { <ProductsChart /> }.into_view()
                        } else {
                            view! { <Loading /> }.into_view()
                        }
                    }}
                </section>
            </div>
        </div>
    }
}
