//! Sales Page
//!
//! New sale entry: line items are picked via product search, totals run
//! client-side, the sale posts in the background.

use leptos::*;

use crate::api::{self, ProductSummary};
use crate::components::form::AjaxForm;
use crate::components::product_search::ProductSearch;
use crate::state::global::{AppState, Page};
use crate::util::{
    calculate_totals, format_currency, format_date, safe_f64, safe_u32, LineItem,
    DEFAULT_TAX_RATE,
};

/// A line of the sale being drafted.
#[derive(Clone, Debug, PartialEq)]
struct SaleItemDraft {
    product: ProductSummary,
    quantity: u32,
    unit_price: f64,
}

impl SaleItemDraft {
    fn line_item(&self) -> LineItem {
        LineItem {
            quantity: self.quantity,
            unit_price: self.unit_price,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

/// Sales page component
#[component]
pub fn Sales() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    state.enter_page(Page::Sales);

    let (items, set_items) = create_signal(Vec::<SaleItemDraft>::new());

    // Picking a product adds a line; picking it again bumps the quantity
    let on_select = Callback::new(move |product: ProductSummary| {
        set_items.update(|items| {
            if let Some(existing) = items.iter_mut().find(|item| item.product.id == product.id) {
                existing.quantity += 1;
            } else {
                items.push(SaleItemDraft {
                    quantity: 1,
                    unit_price: product.sale_price,
                    product,
                });
            }
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Vendas"</h1>
                <p class="text-gray-400 mt-1">"Registe uma nova venda"</p>
            </div>

            <div class="grid lg:grid-cols-2 gap-8">
                // Product picker
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Adicionar produtos"</h2>
                    <ProductSearch on_select=on_select />
                </section>

                // Sale form
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Nova venda"</h2>
                    <SaleForm items=items set_items=set_items />
                </section>
            </div>
        </div>
    }
}

/// Sale form: header fields, the drafted line items and running totals
#[component]
fn SaleForm(
    items: ReadSignal<Vec<SaleItemDraft>>,
    set_items: WriteSignal<Vec<SaleItemDraft>>,
) -> impl IntoView {
    let totals = create_memo(move |_| {
        items.with(|items| {
            calculate_totals(&items.iter().map(SaleItemDraft::line_item).collect::<Vec<_>>())
        })
    });

    let today = chrono::Utc::now().date_naive();
    let today_iso = today.format("%Y-%m-%d").to_string();

    view! {
        <AjaxForm action=api::api_url("/sales/add") class="space-y-4">
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Cliente (ID)"</label>
                    <input
                        type="number"
                        name="customer_id"
                        required=true
                        min="1"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Data da venda"</label>
                    <input
                        type="date"
                        name="sale_date"
                        required=true
                        value=today_iso
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <p class="text-xs text-gray-500 mt-1">{format_date(today)}</p>
                </div>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Método de pagamento"</label>
                <select
                    name="payment_method"
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="dinheiro">"Dinheiro"</option>
                    <option value="cartao">"Cartão"</option>
                    <option value="transferencia">"Transferência"</option>
                </select>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Notas"</label>
                <textarea
                    name="notes"
                    rows=2
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Drafted line items, editable in place
            <div class="space-y-2">
                {move || {
                    let drafted = items.get();
                    if drafted.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">
                                "Sem produtos na venda. Use a pesquisa para adicionar."
                            </p>
                        }
                        .into_view()
                    } else {
                        drafted
                            .into_iter()
                            .enumerate()
                            .map(|(idx, item)| {
                                view! {
                                    <SaleItemRow idx=idx item=item set_items=set_items />
                                }
                            })
                            .collect_view()
                    }
                }}
            </div>

            // Running totals
            <div class="border-t border-gray-700 pt-4 space-y-1 text-sm">
                <div class="flex justify-between text-gray-400">
                    <span>"Subtotal"</span>
                    <span>{move || format_currency(totals.get().subtotal)}</span>
                </div>
                <div class="flex justify-between text-gray-400">
                    <span>"IVA"</span>
                    <span>{move || format_currency(totals.get().tax_total)}</span>
                </div>
                <div class="flex justify-between text-lg font-bold">
                    <span>"Total"</span>
                    <span>{move || format_currency(totals.get().total)}</span>
                </div>
            </div>

            <button
                type="submit"
                disabled=move || items.with(|items| items.is_empty())
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors"
            >
                "Registar venda"
            </button>
        </AjaxForm>
    }
}

/// One editable line of the sale. Hidden inputs carry the wire fields the
/// server expects as repeated `products` / `quantities` / `unit_prices`
/// lists.
#[component]
fn SaleItemRow(
    idx: usize,
    item: SaleItemDraft,
    set_items: WriteSignal<Vec<SaleItemDraft>>,
) -> impl IntoView {
    let quantity = item.quantity;
    let unit_price = item.unit_price;
    let line_total = quantity as f64 * unit_price;

    let on_quantity = move |ev: web_sys::Event| {
        let value = safe_u32(&event_target_value(&ev), 1).max(1);
        set_items.update(|items| {
            if let Some(item) = items.get_mut(idx) {
                item.quantity = value;
            }
        });
    };

    let on_price = move |ev: web_sys::Event| {
        let value = safe_f64(&event_target_value(&ev), unit_price);
        set_items.update(|items| {
            if let Some(item) = items.get_mut(idx) {
                item.unit_price = value;
            }
        });
    };

    let on_remove = move |_| {
        set_items.update(|items| {
            if idx < items.len() {
                items.remove(idx);
            }
        });
    };

    view! {
        <div class="bg-gray-700 rounded-lg p-3">
            <div class="flex items-center justify-between mb-2">
                <strong class="text-sm">{item.product.name.clone()}</strong>
                <button
                    type="button"
                    on:click=on_remove
                    class="text-gray-400 hover:text-white"
                    aria-label="Remover"
                >
                    "×"
                </button>
            </div>

            <div class="flex items-center space-x-2 text-sm">
                <input
                    type="number"
                    min="1"
                    prop:value=quantity.to_string()
                    on:input=on_quantity
                    class="w-20 bg-gray-800 rounded px-2 py-1
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <span class="text-gray-400">"×"</span>
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    prop:value=format!("{:.2}", unit_price)
                    on:input=on_price
                    class="w-24 bg-gray-800 rounded px-2 py-1
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <span class="flex-1 text-right font-semibold">
                    {format_currency(line_total)}
                </span>
            </div>

            // Wire fields
            <input type="hidden" name="products" value=item.product.id.to_string() />
            <input type="hidden" name="quantities" value=quantity.to_string() />
            <input type="hidden" name="unit_prices" value=format!("{:.2}", unit_price) />
        </div>
    }
}
