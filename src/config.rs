//! Application configuration.
//!
//! Centralized configuration for the CSV Stager frontend. The endpoints
//! are relative paths, so the app talks to whichever server serves it.

/// Staging endpoint.
///
/// Receives a multipart body with one `files[]` part per candidate file.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Processing endpoint.
///
/// Receives the staged filename list as a JSON body.
pub const PROCESS_ENDPOINT: &str = "/process";

/// How long a notice stays visible before auto-dismissing (milliseconds).
pub const NOTICE_DISMISS_MS: u32 = 3_000;
