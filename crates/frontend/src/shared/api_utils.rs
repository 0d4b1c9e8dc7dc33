//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::{load_config, resolve_base_url, stored_base_url_override};

/// Get the base URL of the integrations backend
///
/// Uses the embedded configuration unless a localStorage override is set.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/integrations/notion/load", api_base());
/// ```
pub fn api_base() -> String {
    resolve_base_url(&load_config(), stored_base_url_override())
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path, starting with "/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
