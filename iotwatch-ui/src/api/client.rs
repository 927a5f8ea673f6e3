//! HTTP API Client
//!
//! Functions for communicating with the IoTWatch REST API.

use gloo_net::http::Request;

use crate::state::global::{DatasetSummary, Reading};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("iotwatch_api_url") {
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

// ============ Response Types ============

#[derive(Debug, Clone, serde::Deserialize)]
pub struct WindowResponse {
    pub index: usize,
    pub size: usize,
    pub window_count: usize,
    pub last: bool,
    pub readings: Vec<Reading>,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Errors surfaced to the poll loop
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The requested window lies past the end of the dataset
    Exhausted,
    /// Anything else: network failures, parse failures, server errors
    Other(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Exhausted => write!(f, "window exhausted"),
            FetchError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// Decode a non-2xx response into a FetchError, recognizing the terminal
/// exhaustion code
async fn parse_error(response: gloo_net::http::Response) -> FetchError {
    let status = response.status();
    match response.json::<ErrorEnvelope>().await {
        Ok(envelope) if envelope.error.code == "WINDOW_EXHAUSTED" => FetchError::Exhausted,
        Ok(envelope) => FetchError::Other(envelope.error.message),
        Err(_) => FetchError::Other(format!("HTTP {}", status)),
    }
}

// ============ API Functions ============

/// Fetch the dataset summary
pub async fn fetch_summary() -> Result<DatasetSummary, FetchError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/dataset", api_base))
        .send()
        .await
        .map_err(|e| FetchError::Other(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(parse_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Other(format!("Parse error: {}", e)))
}

/// Fetch the n-th window of readings; `size` overrides the server's default
/// chunk size
pub async fn fetch_window(n: usize, size: Option<usize>) -> Result<WindowResponse, FetchError> {
    let api_base = get_api_base();

    let url = match size {
        Some(s) => format!("{}/window/{}?size={}", api_base, n, s),
        None => format!("{}/window/{}", api_base, n),
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Other(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(parse_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Other(format!("Parse error: {}", e)))
}
