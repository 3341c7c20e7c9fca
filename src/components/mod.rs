//! UI Components
//!
//! Reusable Leptos components for the admin.

pub mod chart;
pub mod form;
pub mod loading;
pub mod nav;
pub mod product_search;
pub mod toast;

pub use chart::{ProductsChart, SalesChart};
pub use form::AjaxForm;
pub use loading::GlobalLoading;
pub use nav::Sidebar;
pub use product_search::ProductSearch;
pub use toast::Toasts;
