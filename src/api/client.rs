//! HTTP API Client
//!
//! Functions for communicating with the GestVendas REST API.

use gloo_net::http::{Method, Request, RequestBuilder};

use crate::state::global::{ProductsSeries, SalesSeries};

/// Default API base: empty, meaning same origin as the served app
pub const DEFAULT_API_BASE: &str = "";

/// Local storage key holding the API base URL override
const API_URL_KEY: &str = "gestvendas_api_url";

/// Get the API base URL from local storage, falling back to same origin
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Build a request URL for a server path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", get_api_base(), path)
}

// ============ Response Types ============

/// Payload of `GET /api/dashboard/charts`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct DashboardCharts {
    pub sales: SalesSeries,
    pub products: ProductsSeries,
}

/// One product row from `GET /api/products/search`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProductSummary {
    pub id: u32,
    pub code: String,
    pub name: String,
    pub sale_price: f64,
    pub stock_quantity: i32,
    pub unit: String,
}

/// Envelope returned by form-handling endpoints.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

// ============ API Functions ============

/// Fetch both dashboard chart datasets
pub async fn fetch_dashboard_charts() -> Result<DashboardCharts, String> {
    let response = Request::get(&api_url("/api/dashboard/charts"))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: format!("Request failed with status {}", response.status()),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Search products by name or code
pub async fn search_products(query: &str) -> Result<Vec<ProductSummary>, String> {
    let url = format!(
        "{}?q={}",
        api_url("/api/products/search"),
        urlencoding::encode(query)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: format!("Request failed with status {}", response.status()),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Send url-encoded form fields to a form-handling endpoint and decode the
/// response envelope. The envelope is decoded regardless of HTTP status;
/// a non-envelope body surfaces as a parse error.
pub async fn submit_form(
    url: &str,
    method: &str,
    fields: &[(String, String)],
) -> Result<SubmitResponse, String> {
    let response = RequestBuilder::new(url)
        .method(parse_method(method))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(encode_form(fields))
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Map a form's declared method onto an HTTP method, defaulting to POST.
fn parse_method(method: &str) -> Method {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Method::GET,
        "PUT" => Method::PUT,
        "DELETE" => Method::DELETE,
        "PATCH" => Method::PATCH,
        _ => Method::POST,
    }
}

/// Encode form fields as an `application/x-www-form-urlencoded` body.
pub fn encode_form(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_charts_payload_decodes() {
        let payload = r#"{
            "sales": {"labels": ["Jan 2025", "Fev 2025"], "data": [1200.5, 980.0]},
            "products": {
                "labels": ["Café", "Açúcar"],
                "quantities": [42, 17],
                "revenues": [630.0, 85.0]
            }
        }"#;

        let charts: DashboardCharts = serde_json::from_str(payload).unwrap();
        assert_eq!(charts.sales.labels.len(), 2);
        assert_eq!(charts.sales.data[0], 1200.5);
        assert_eq!(charts.products.revenues, vec![630.0, 85.0]);
    }

    #[test]
    fn products_series_tolerates_missing_quantities() {
        let payload = r#"{"labels": ["Café"], "revenues": [630.0]}"#;
        let series: crate::state::global::ProductsSeries = serde_json::from_str(payload).unwrap();
        assert!(series.quantities.is_empty());
        assert_eq!(series.revenues, vec![630.0]);
    }

    #[test]
    fn missing_series_field_is_a_parse_error() {
        // Presence check: a payload without `data` must not decode
        let payload = r#"{"labels": ["Jan 2025"]}"#;
        assert!(serde_json::from_str::<SalesSeries>(payload).is_err());
    }

    #[test]
    fn product_summary_decodes() {
        let payload = r#"{
            "id": 7,
            "code": "P-007",
            "name": "Café Lote Especial",
            "sale_price": 14.9,
            "stock_quantity": 3,
            "unit": "kg"
        }"#;

        let product: ProductSummary = serde_json::from_str(payload).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.unit, "kg");
    }

    #[test]
    fn envelope_optional_fields_default_to_none() {
        let ok: SubmitResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.message, None);
        assert_eq!(ok.redirect, None);

        let full: SubmitResponse = serde_json::from_str(
            r#"{"success": false, "message": "Erro X", "redirect": "/x"}"#,
        )
        .unwrap();
        assert!(!full.success);
        assert_eq!(full.message.as_deref(), Some("Erro X"));
        assert_eq!(full.redirect.as_deref(), Some("/x"));
    }

    #[test]
    fn unknown_method_defaults_to_post() {
        assert!(matches!(parse_method("get"), Method::GET));
        assert!(matches!(parse_method("POST"), Method::POST));
        assert!(matches!(parse_method(""), Method::POST));
        assert!(matches!(parse_method("dialog"), Method::POST));
    }

    #[test]
    fn form_fields_are_url_encoded() {
        let fields = vec![
            ("name".to_string(), "Café & Chá".to_string()),
            ("city".to_string(), "Póvoa de Varzim".to_string()),
        ];

        let body = encode_form(&fields);
        assert_eq!(
            body,
            "name=Caf%C3%A9%20%26%20Ch%C3%A1&city=P%C3%B3voa%20de%20Varzim"
        );
    }
}
