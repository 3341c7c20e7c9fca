//! Global Application State
//!
//! Reactive state management using Leptos signals. One `AppState` is
//! created at startup and provided to the whole component tree.

use leptos::*;
use std::collections::HashMap;

/// Application name used in the document title template.
pub const APP_NAME: &str = "GestVendas";

/// How long a toast stays visible before auto-dismissing, in milliseconds.
pub const TOAST_DISMISS_MS: u32 = 5_000;

/// Navigable pages of the admin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Products,
    Sales,
    Customers,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Products, Page::Sales, Page::Customers];

    /// Router path for this page.
    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Products => "/products",
            Page::Sales => "/sales",
            Page::Customers => "/customers",
        }
    }

    /// User-facing page title.
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Products => "Produtos",
            Page::Sales => "Vendas",
            Page::Customers => "Clientes",
        }
    }

    /// Sidebar icon.
    pub fn icon(self) -> &'static str {
        match self {
            Page::Dashboard => "📊",
            Page::Products => "📦",
            Page::Sales => "🛒",
            Page::Customers => "👥",
        }
    }

    /// Resolve a router path to a page. Unknown paths resolve to `None`.
    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL
            .into_iter()
            .find(|page| page.path() == path.trim_end_matches('/') || page.path() == path)
    }
}

/// Chart anchor slots. Each slot owns at most one live dataset at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Sales,
    Products,
}

/// Monthly sales series from the dashboard endpoint.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct SalesSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Top-product revenue breakdown from the dashboard endpoint. The server
/// also sends per-product quantities; the doughnut only charts revenues.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ProductsSeries {
    pub labels: Vec<String>,
    #[serde(default)]
    pub quantities: Vec<f64>,
    pub revenues: Vec<f64>,
}

/// Dataset held by a chart slot.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Sales(SalesSeries),
    Products(ProductsSeries),
}

/// Toast severity, selecting icon and styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "bg-green-600",
            Severity::Error => "bg-red-600",
            Severity::Warning => "bg-yellow-600",
            Severity::Info => "bg-blue-600",
        }
    }
}

/// A queued toast notification.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastItem {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// Page currently mounted by the router
    pub current_page: RwSignal<Page>,
    /// Whether the sidebar is collapsed to icons only
    pub sidebar_collapsed: RwSignal<bool>,
    /// Live chart dataset per slot
    pub charts: RwSignal<HashMap<ChartSlot, ChartData>>,
    /// Count of in-flight operations; the indicator shows while non-zero
    pub loading: RwSignal<u32>,
    /// Queued toast notifications
    pub toasts: RwSignal<Vec<ToastItem>>,
    /// Bumped by `refresh_current_page`; page loaders subscribe to it
    pub refresh_tick: RwSignal<u32>,
    next_toast_id: RwSignal<u64>,
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    provide_context(AppState::new());
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_page: create_rw_signal(Page::Dashboard),
            sidebar_collapsed: create_rw_signal(false),
            charts: create_rw_signal(HashMap::new()),
            loading: create_rw_signal(0),
            toasts: create_rw_signal(Vec::new()),
            refresh_tick: create_rw_signal(0),
            next_toast_id: create_rw_signal(0),
        }
    }

    /// Record the page the router mounted and update the document title.
    pub fn enter_page(&self, page: Page) {
        self.current_page.set(page);
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} - {}", page.title(), APP_NAME));
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|collapsed| *collapsed = !*collapsed);
    }

    /// Store a dataset in a chart slot. Replaces any previous dataset for
    /// that slot, so a slot never holds two live datasets.
    pub fn render_chart(&self, slot: ChartSlot, data: ChartData) {
        self.charts.update(|charts| {
            charts.insert(slot, data);
        });
    }

    /// Re-run the current page's loader without changing navigation state.
    pub fn refresh_current_page(&self) {
        self.refresh_tick.update(|tick| *tick = tick.wrapping_add(1));
    }

    /// Queue a toast without scheduling auto-dismiss. Returns its id.
    pub fn push_toast(&self, message: &str, severity: Severity) -> u64 {
        let id = self.next_toast_id.get_untracked();
        self.next_toast_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(ToastItem {
                id,
                message: message.to_string(),
                severity,
            });
        });
        id
    }

    /// Remove a toast. Safe to call twice; the second call is a no-op.
    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    /// Show a toast that auto-dismisses after [`TOAST_DISMISS_MS`].
    pub fn show_toast(&self, message: &str, severity: Severity) {
        let id = self.push_toast(message, severity);

        let state = self.clone();
        gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || {
            state.dismiss_toast(id);
        })
        .forget();
    }

    pub fn show_success(&self, message: &str) {
        self.show_toast(message, Severity::Success);
    }

    pub fn show_error(&self, message: &str) {
        self.show_toast(message, Severity::Error);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn unknown_path_resolves_to_none() {
        assert_eq!(Page::from_path("/analytics"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn render_chart_replaces_slot_dataset() {
        let runtime = create_runtime();

        let state = AppState::new();
        let first = SalesSeries {
            labels: vec!["Jan 2025".into()],
            data: vec![100.0],
        };
        let second = SalesSeries {
            labels: vec!["Fev 2025".into()],
            data: vec![250.0],
        };

        state.render_chart(ChartSlot::Sales, ChartData::Sales(first));
        state.render_chart(ChartSlot::Sales, ChartData::Sales(second.clone()));

        let charts = state.charts.get_untracked();
        assert_eq!(charts.len(), 1);
        assert_eq!(
            charts.get(&ChartSlot::Sales),
            Some(&ChartData::Sales(second))
        );

        runtime.dispose();
    }

    #[test]
    fn chart_slots_are_independent() {
        let runtime = create_runtime();

        let state = AppState::new();
        state.render_chart(
            ChartSlot::Sales,
            ChartData::Sales(SalesSeries {
                labels: vec![],
                data: vec![],
            }),
        );
        state.render_chart(
            ChartSlot::Products,
            ChartData::Products(ProductsSeries {
                labels: vec!["Café".into()],
                quantities: vec![3.0],
                revenues: vec![7.5],
            }),
        );

        assert_eq!(state.charts.get_untracked().len(), 2);

        runtime.dispose();
    }

    #[test]
    fn toasts_are_queued_and_dismissed() {
        let runtime = create_runtime();

        let state = AppState::new();
        let first = state.push_toast("Operação realizada com sucesso!", Severity::Success);
        let second = state.push_toast("Erro ao processar solicitação", Severity::Error);
        assert_ne!(first, second);
        assert_eq!(state.toasts.get_untracked().len(), 2);

        state.dismiss_toast(first);
        let remaining = state.toasts.get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);

        // Dismissing again is a no-op
        state.dismiss_toast(first);
        assert_eq!(state.toasts.get_untracked().len(), 1);

        runtime.dispose();
    }

    #[test]
    fn severity_defaults_to_info() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::default().icon(), "ℹ");
    }

    #[test]
    fn refresh_bumps_tick_without_touching_navigation() {
        let runtime = create_runtime();

        let state = AppState::new();
        state.current_page.set(Page::Sales);
        let before = state.refresh_tick.get_untracked();

        state.refresh_current_page();

        assert_eq!(state.refresh_tick.get_untracked(), before + 1);
        assert_eq!(state.current_page.get_untracked(), Page::Sales);

        runtime.dispose();
    }
}
