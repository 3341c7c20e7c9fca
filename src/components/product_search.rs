//! Product Search Component
//!
//! Debounced search against the product endpoint. Results are
//! click-to-select: a selection is handed to the `on_select` callback and
//! dispatched as a `productSelected` custom event on `document`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api::{self, ProductSummary};
use crate::util::{format_currency, stock_status, DEFAULT_MAX_STOCK, DEFAULT_MIN_STOCK};

/// Debounce window applied to search input, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Minimum query length that triggers a request.
pub const MIN_QUERY_LEN: usize = 2;

/// Whether a query is long enough to search for.
pub fn should_search(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Debounced product search with a click-to-select result list
#[component]
pub fn ProductSearch(
    /// Called with the full record when a result is activated
    #[prop(optional, into)]
    on_select: Option<Callback<ProductSummary>>,
) -> impl IntoView {
    let (results, set_results) = create_signal(None::<Vec<ProductSummary>>);

    // Pending debounce timer; replacing it cancels the previous window
    let pending = Rc::new(RefCell::new(None::<Timeout>));
    // Generation of the newest issued query; older responses are dropped
    let generation = Rc::new(Cell::new(0u64));

    let on_input = {
        let pending = Rc::clone(&pending);
        let generation = Rc::clone(&generation);

        move |ev: web_sys::Event| {
            let query = event_target_value(&ev);

            if !should_search(&query) {
                // Cancel any pending query and clear now-stale results
                pending.borrow_mut().take();
                generation.set(generation.get() + 1);
                set_results.set(None);
                return;
            }

            let generation = Rc::clone(&generation);
            let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                let current = generation.get() + 1;
                generation.set(current);

                spawn_local(async move {
                    match api::search_products(&query).await {
                        Ok(products) => {
                            // Only the newest query may publish results
                            if generation.get() == current {
                                set_results.set(Some(products));
                            }
                        }
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Product search error: {}", e).into(),
                            );
                        }
                    }
                });
            });
            *pending.borrow_mut() = Some(timeout);
        }
    };

    view! {
        <div class="space-y-3">
            <input
                type="text"
                placeholder="Pesquisar por nome ou código..."
                on:input=on_input
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />

            <SearchResults results=results on_select=on_select />
        </div>
    }
}

/// Result list; empty result sets render a fixed message
#[component]
fn SearchResults(
    results: ReadSignal<Option<Vec<ProductSummary>>>,
    on_select: Option<Callback<ProductSummary>>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {move || match results.get() {
                None => view! {}.into_view(),
                Some(products) if products.is_empty() => view! {
                    <p class="text-gray-400 text-sm">"Nenhum produto encontrado"</p>
                }
                .into_view(),
                Some(products) => {
                    let received = products.clone();
                    products
                        .into_iter()
                        .map(|product| {
                            let received = received.clone();
                            let id = product.id;
                            let on_click = move |_| {
                                // Resolve against the last-received result set
                                if let Some(selected) =
                                    received.iter().find(|candidate| candidate.id == id)
                                {
                                    emit_product_selected(selected);
                                    if let Some(callback) = on_select {
                                        callback.call(selected.clone());
                                    }
                                }
                            };
                            view! { <SearchResultRow product=product on_click=on_click /> }
                        })
                        .collect_view()
                }
            }}
        </div>
    }
}

/// Single clickable result row
#[component]
fn SearchResultRow(
    product: ProductSummary,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    let status = stock_status(product.stock_quantity, DEFAULT_MIN_STOCK, DEFAULT_MAX_STOCK);

    view! {
        <div
            on:click=on_click
            class="bg-gray-800 rounded-lg p-3 border border-gray-700 hover:border-gray-600
                   cursor-pointer transition-colors"
        >
            <div class="flex items-center justify-between">
                <div>
                    <strong>{product.name.clone()}</strong>
                    <p class="text-gray-400 text-sm">"Código: " {product.code.clone()}</p>
                </div>
                <div class="text-right">
                    <div class="font-bold">{format_currency(product.sale_price)}</div>
                    <p class="text-sm text-gray-400">
                        "Stock: " {product.stock_quantity} " " {product.unit.clone()}
                        " · "
                        <span class=status.css_class()>{status.label()}</span>
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Dispatch the `productSelected` custom event on `document` carrying the
/// full selected record, for listeners outside the component tree.
fn emit_product_selected(product: &ProductSummary) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(json) = serde_json::to_string(product) else {
        return;
    };
    let Ok(detail) = js_sys::JSON::parse(&json) else {
        return;
    };

    let init = web_sys::CustomEventInit::new();
    init.set_detail(&detail);
    if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict("productSelected", &init) {
        let _ = document.dispatch_event(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_never_search() {
        assert!(!should_search(""));
        assert!(!should_search("a"));
        assert!(!should_search(" a "));
    }

    #[test]
    fn two_characters_are_enough() {
        assert!(should_search("ab"));
        assert!(should_search("çã"));
        assert!(should_search("  ab  "));
    }
}
