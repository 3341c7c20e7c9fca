//! State Management
//!
//! Global application state shared across components.

pub mod global;

pub use global::{provide_app_state, AppState, ChartData, ChartSlot, Page, Severity};
