//! GestVendas Admin
//!
//! Sales management front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Dashboard with sales trend and top-product charts
//! - Product registry with live search
//! - Sale entry with line items and running totals
//! - Customer registry with NIF validation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every view is built in the browser; the GestVendas API is
//! reached over HTTP and returns JSON only.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod util;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
