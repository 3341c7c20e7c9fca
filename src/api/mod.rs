//! API Client
//!
//! HTTP access to the GestVendas REST endpoints.

pub mod client;

pub use client::*;
