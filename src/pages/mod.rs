//! Pages
//!
//! Top-level page components for each route.

pub mod customers;
pub mod dashboard;
pub mod products;
pub mod sales;

pub use customers::Customers;
pub use dashboard::Dashboard;
pub use products::Products;
pub use sales::Sales;
