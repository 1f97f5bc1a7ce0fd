//! HTTP round-trip for triggering server-side processing.

use gloo_net::http::Request;

use crate::types::{AppError, AppResult, ProcessRequest, ProcessResponse};

/// Submits the staged filename list for processing and returns the
/// redirect target on success.
///
/// The verdict is all-or-nothing: anything other than `success: true`
/// with a non-empty `redirect` is a failure.
pub async fn process_files(files: Vec<String>, endpoint: &str) -> AppResult<String> {
    let response = Request::post(endpoint)
        .json(&ProcessRequest { files })
        .map_err(|e| AppError::Network(format!("failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("request failed: {}", e)))?;

    let parsed: ProcessResponse = response
        .json()
        .await
        .map_err(|e| AppError::Network(format!("failed to parse response: {}", e)))?;

    if !parsed.success {
        return Err(AppError::Process("server reported failure".to_string()));
    }

    match parsed.redirect {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(AppError::Process("response missing redirect target".to_string())),
    }
}
