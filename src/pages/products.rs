//! Products Page
//!
//! Live product search and product registration.

use leptos::*;

use crate::api;
use crate::components::form::AjaxForm;
use crate::components::product_search::ProductSearch;
use crate::state::global::{AppState, Page};
use crate::util::{DEFAULT_MAX_STOCK, DEFAULT_MIN_STOCK, DEFAULT_TAX_RATE};

/// Products page component
#[component]
pub fn Products() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    state.enter_page(Page::Products);

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Produtos"</h1>
                <p class="text-gray-400 mt-1">"Pesquise o catálogo e registe novos produtos"</p>
            </div>

            <div class="grid lg:grid-cols-2 gap-8">
                // Search panel
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Pesquisa"</h2>
                    <ProductSearch />
                </section>

                // Registration form
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Novo produto"</h2>
                    <AddProductForm />
                </section>
            </div>
        </div>
    }
}

/// Product registration form; posts to the products endpoint in the
/// background.
#[component]
fn AddProductForm() -> impl IntoView {
    view! {
        <AjaxForm action=api::api_url("/products/add") class="space-y-4">
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Código"</label>
                    <input
                        type="text"
                        name="code"
                        required=true
                        placeholder="ex.: P-001"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Unidade"</label>
                    <select
                        name="unit"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="unidade">"Unidade"</option>
                        <option value="kg">"Quilograma"</option>
                        <option value="litro">"Litro"</option>
                        <option value="caixa">"Caixa"</option>
                    </select>
                </div>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Nome"</label>
                <input
                    type="text"
                    name="name"
                    required=true
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Descrição"</label>
                <textarea
                    name="description"
                    rows=2
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Categoria (ID)"</label>
                    <input
                        type="number"
                        name="category_id"
                        required=true
                        min="1"
                        value="1"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Fornecedor (ID)"</label>
                    <input
                        type="number"
                        name="supplier_id"
                        min="1"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Preço de compra (€)"</label>
                    <input
                        type="number"
                        name="purchase_price"
                        step="0.01"
                        min="0"
                        value="0"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Preço de venda (€)"</label>
                    <input
                        type="number"
                        name="sale_price"
                        required=true
                        step="0.01"
                        min="0"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <div class="grid grid-cols-3 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Stock inicial"</label>
                    <input
                        type="number"
                        name="stock_quantity"
                        min="0"
                        value="0"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Stock mínimo"</label>
                    <input
                        type="number"
                        name="min_stock"
                        min="0"
                        value=DEFAULT_MIN_STOCK.to_string()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Stock máximo"</label>
                    <input
                        type="number"
                        name="max_stock"
                        min="0"
                        value=DEFAULT_MAX_STOCK.to_string()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Taxa de IVA (%)"</label>
                <input
                    type="number"
                    name="tax_rate"
                    step="0.01"
                    min="0"
                    value=format!("{:.2}", DEFAULT_TAX_RATE)
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                       font-semibold transition-colors"
            >
                "Adicionar produto"
            </button>
        </AjaxForm>
    }
}
