//! Customers Page
//!
//! Customer registration with Portuguese NIF validation.

use leptos::*;

use crate::api;
use crate::components::form::AjaxForm;
use crate::state::global::{AppState, Page};
use crate::util::validate_nif;

/// Customers page component
#[component]
pub fn Customers() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    state.enter_page(Page::Customers);

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Clientes"</h1>
                <p class="text-gray-400 mt-1">"Registe novos clientes"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 max-w-2xl">
                <h2 class="text-xl font-semibold mb-4">"Novo cliente"</h2>
                <AddCustomerForm />
            </section>
        </div>
    }
}

/// Customer registration form; the NIF is validated as it is typed and an
/// invalid one blocks submission.
#[component]
fn AddCustomerForm() -> impl IntoView {
    let (nif, set_nif) = create_signal(String::new());
    let nif_valid = create_memo(move |_| nif.with(|nif| validate_nif(nif)));

    view! {
        <AjaxForm action=api::api_url("/customers/add") class="space-y-4">
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

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        name="email"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Telefone"</label>
                    <input
                        type="tel"
                        name="phone"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Morada"</label>
                <textarea
                    name="address"
                    rows=2
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div class="grid grid-cols-3 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Cidade"</label>
                    <input
                        type="text"
                        name="city"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Código postal"</label>
                    <input
                        type="text"
                        name="postal_code"
                        placeholder="0000-000"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"País"</label>
                    <input
                        type="text"
                        name="country"
                        value="Portugal"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"NIF"</label>
                    <input
                        type="text"
                        name="tax_number"
                        placeholder="123456789"
                        on:input=move |ev| set_nif.set(event_target_value(&ev))
                        class=move || {
                            let base = "w-full bg-gray-700 rounded-lg px-4 py-3 border \
                                        focus:outline-none";
                            if nif_valid.get() {
                                format!("{} border-gray-600 focus:border-primary-500", base)
                            } else {
                                format!("{} border-red-500", base)
                            }
                        }
                    />
                    {move || {
                        if nif_valid.get() {
                            view! {}.into_view()
                        } else {
                            view! {
                                <p class="text-red-400 text-sm mt-1">"NIF inválido"</p>
                            }
                            .into_view()
                        }
                    }}
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Tipo de cliente"</label>
                    <select
                        name="customer_type"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="particular">"Particular"</option>
                        <option value="empresa">"Empresa"</option>
                    </select>
                </div>
            </div>

            <button
                type="submit"
                disabled=move || !nif_valid.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors"
            >
                "Adicionar cliente"
            </button>
        </AjaxForm>
    }
}
