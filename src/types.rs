//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Request/response structures for the two endpoints
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Types
// =============================================================================

/// Response from the staging endpoint.
///
/// `files` is present and non-null only on success; `error` carries the
/// server's failure text when it has one. The server may answer a rejected
/// batch with an error-only body, so every field tolerates being absent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StageResponse {
    /// Whether the server accepted the batch
    #[serde(default)]
    pub success: bool,
    /// Server-confirmed filenames, in display order
    #[serde(default)]
    pub files: Option<Vec<String>>,
    /// Server-provided failure text
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body for the processing endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// The full staged queue, in display order
    pub files: Vec<String>,
}

/// Response from the processing endpoint.
///
/// Navigation happens only when `success` is true and `redirect` is a
/// non-empty string.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Whether processing succeeded
    #[serde(default)]
    pub success: bool,
    /// Location of the result page
    #[serde(default)]
    pub redirect: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug)]
pub enum AppError {
    /// The server declined the staged batch.
    Upload(String),
    /// The server declined the processing request.
    Process(String),
    /// Transport failure or malformed response.
    Network(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload failed: {}", msg),
            AppError::Process(msg) => write!(f, "Processing failed: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_response_success() {
        let json = r#"{"success": true, "files": ["a.csv", "b.csv"]}"#;
        let response: StageResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.files.unwrap(), ["a.csv", "b.csv"]);
        assert!(response.error.is_none());
    }

    #[test]
    fn stage_response_declared_failure() {
        let json = r#"{"success": false, "error": "no files in request"}"#;
        let response: StageResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("no files in request"));
    }

    // Rejected batches can come back as an error-only body (HTTP 4xx).
    #[test]
    fn stage_response_error_only_body() {
        let json = r#"{"error": "file too large"}"#;
        let response: StageResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("file too large"));
    }

    #[test]
    fn process_request_payload_shape() {
        let request = ProcessRequest {
            files: vec!["a.csv".to_string(), "b.csv".to_string()],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"files":["a.csv","b.csv"]}"#);
    }

    #[test]
    fn process_response_with_redirect() {
        let json = r#"{"success": true, "redirect": "/results/42"}"#;
        let response: ProcessResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.redirect.as_deref(), Some("/results/42"));
    }

    #[test]
    fn process_response_missing_redirect() {
        let json = r#"{"success": false}"#;
        let response: ProcessResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.redirect.is_none());
    }
}
