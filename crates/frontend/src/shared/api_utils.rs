//! API utilities for frontend-backend communication
//!
//! The login endpoints live on the same origin as the pages, so the base is
//! simply the current window origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin like "http://localhost:5000" or "https://example.com"
/// - Empty string if window is not available (requests then use a relative URL)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/admin_login");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
