//! URL helpers for frontend-backend communication

/// Порт backend по умолчанию (см. `[server] port` в config.toml)
const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// The page may be served by the backend itself (`dist/` fallback) or by a
/// dev server on another port; in both cases requests go to the backend port
/// on the same host.
///
/// Returns an empty string when window is not available, so paths stay relative.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path starting with "/api/"
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/d404/summary");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
