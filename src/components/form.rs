//! Background Form Submission
//!
//! Forms that post their fields over HTTP instead of navigating. The
//! response envelope decides between a redirect, a page refresh and an
//! error toast; the loading indicator is released on every path.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use crate::api::{self, SubmitResponse};
use crate::state::global::AppState;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operação realizada com sucesso!";
pub const DEFAULT_ERROR_MESSAGE: &str = "Erro ao processar solicitação";

/// Decrements the loading counter when dropped, so loading-end fires
/// exactly once per submission regardless of outcome.
pub struct LoadingGuard(RwSignal<u32>);

impl LoadingGuard {
    pub fn begin(loading: RwSignal<u32>) -> Self {
        loading.update(|count| *count += 1);
        Self(loading)
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.update(|count| *count = count.saturating_sub(1));
    }
}

/// What the submission handler does with a response envelope.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAction {
    /// Success toast, then browser navigation to the given URL
    Navigate { url: String, message: String },
    /// Success toast, then re-run the current page's loader
    Refresh { message: String },
    /// Error toast; no navigation
    Fail { message: String },
}

/// Map a response envelope onto the action to take.
pub fn interpret_envelope(response: &SubmitResponse) -> SubmitAction {
    if response.success {
        let message = response
            .message
            .clone()
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
        match &response.redirect {
            Some(url) => SubmitAction::Navigate {
                url: url.clone(),
                message,
            },
            None => SubmitAction::Refresh { message },
        }
    } else {
        SubmitAction::Fail {
            message: response
                .message
                .clone()
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Form wrapper that submits its fields in the background. Target URL and
/// method are read from the form element itself; the DOM resolves a
/// missing action to the current location, and the method defaults to
/// POST.
#[component]
pub fn AjaxForm(
    #[prop(into, optional)] action: Option<String>,
    #[prop(default = "post")] method: &'static str,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        // Suppress native navigation
        ev.prevent_default();

        if let Some(form) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        {
            submit(state.clone(), &form);
        }
    };

    view! {
        <form action=action method=method class=class on:submit=on_submit>
            {children()}
        </form>
    }
}

/// Post a form's fields and react to the response envelope.
pub fn submit(state: AppState, form: &HtmlFormElement) {
    let url = form.action();
    let method = form.method();
    let fields = collect_fields(form);

    let guard = LoadingGuard::begin(state.loading);
    spawn_local(async move {
        let _guard = guard;

        match api::submit_form(&url, &method, &fields).await {
            Ok(response) => match interpret_envelope(&response) {
                SubmitAction::Navigate { url, message } => {
                    state.show_success(&message);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                SubmitAction::Refresh { message } => {
                    state.show_success(&message);
                    state.refresh_current_page();
                }
                SubmitAction::Fail { message } => {
                    state.show_error(&message);
                }
            },
            Err(e) => {
                web_sys::console::error_1(&format!("Form submission error: {}", e).into());
                state.show_error(DEFAULT_ERROR_MESSAGE);
            }
        }
    });
}

/// Collect a form's named fields as (name, value) pairs, in form order.
/// File entries have no url-encoded rendition and are skipped.
fn collect_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    let mut fields = Vec::new();

    let Ok(data) = FormData::new_with_form(form) else {
        return fields;
    };
    let Ok(Some(entries)) = js_sys::try_iter(data.as_ref()) else {
        return fields;
    };

    for entry in entries.flatten() {
        let pair = js_sys::Array::from(&entry);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push((name, value));
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_wins_over_refresh() {
        let response = SubmitResponse {
            success: true,
            message: None,
            redirect: Some("/x".to_string()),
        };

        assert_eq!(
            interpret_envelope(&response),
            SubmitAction::Navigate {
                url: "/x".to_string(),
                message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn success_without_redirect_refreshes_with_default_message() {
        let response = SubmitResponse {
            success: true,
            message: None,
            redirect: None,
        };

        assert_eq!(
            interpret_envelope(&response),
            SubmitAction::Refresh {
                message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn business_failure_keeps_server_message_and_never_navigates() {
        let response = SubmitResponse {
            success: false,
            message: Some("Erro X".to_string()),
            redirect: Some("/ignored".to_string()),
        };

        assert_eq!(
            interpret_envelope(&response),
            SubmitAction::Fail {
                message: "Erro X".to_string(),
            }
        );
    }

    #[test]
    fn loading_guard_balances_the_counter() {
        let runtime = create_runtime();

        let loading = create_rw_signal(0u32);
        {
            let _outer = LoadingGuard::begin(loading);
            assert_eq!(loading.get_untracked(), 1);
            {
                let _inner = LoadingGuard::begin(loading);
                assert_eq!(loading.get_untracked(), 2);
            }
            assert_eq!(loading.get_untracked(), 1);
        }
        assert_eq!(loading.get_untracked(), 0);

        runtime.dispose();
    }

    #[test]
    fn loading_guard_releases_on_early_exit() {
        let runtime = create_runtime();

        let loading = create_rw_signal(0u32);
        let failing = || -> Result<(), String> {
            let _guard = LoadingGuard::begin(loading);
            Err("transport failure".to_string())?;
            Ok(())
        };

        assert!(failing().is_err());
        assert_eq!(loading.get_untracked(), 0);

        runtime.dispose();
    }
}
