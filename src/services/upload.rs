//! HTTP round-trip for staging files on the server.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::types::{AppError, AppResult, StageResponse};

/// Multipart field carrying the staged files, one part per file.
const FILES_FIELD: &str = "files[]";

/// Uploads `files` as a single multipart batch, in order, and returns the
/// server-confirmed filenames.
///
/// An empty batch is sent as-is; whether it is valid is the server's call.
/// The response body is parsed regardless of HTTP status, since the server
/// answers rejected batches with a JSON error body.
pub async fn stage_files(files: Vec<File>, endpoint: &str) -> AppResult<Vec<String>> {
    let form_data =
        FormData::new().map_err(|e| AppError::Network(format!("failed to create form data: {:?}", e)))?;

    for file in &files {
        form_data
            .append_with_blob(FILES_FIELD, file)
            .map_err(|e| AppError::Network(format!("failed to append file: {:?}", e)))?;
    }

    let response = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("request failed: {}", e)))?;

    let parsed: StageResponse = response
        .json()
        .await
        .map_err(|e| AppError::Network(format!("failed to parse response: {}", e)))?;

    if parsed.success {
        Ok(parsed.files.unwrap_or_default())
    } else {
        Err(AppError::Upload(
            parsed
                .error
                .unwrap_or_else(|| "server rejected the batch".to_string()),
        ))
    }
}
